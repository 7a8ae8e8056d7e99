use std::sync::Arc;

use clap::Parser;
use rsvp_form::cli::commands::{cmd_check, cmd_submit, cmd_validate};
use rsvp_form::cli::config::{
    AppConfig, Cli, Commands, load_config, resolve_format, resolve_trace_path,
};
use rsvp_form::trace::logger::TraceLogger;

mod common;
use common::{RSVP_YAML, temp_file};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_validate_minimal() {
    let cli = Cli::parse_from(["rsvp-form", "validate", "--form", "form.yaml"]);
    match cli.command {
        Commands::Validate {
            form,
            responses,
            format,
            output,
        } => {
            assert_eq!(form, "form.yaml");
            assert!(responses.is_none());
            assert!(format.is_none());
            assert!(output.is_none());
        }
        _ => panic!("Expected Validate command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_validate_all_args() {
    let cli = Cli::parse_from([
        "rsvp-form",
        "-vv",
        "--trace",
        "trace.jsonl",
        "validate",
        "--form",
        "form.yaml",
        "--responses",
        "answers.yaml",
        "--format",
        "json",
        "-o",
        "report.json",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.trace.as_deref(), Some("trace.jsonl"));
    match cli.command {
        Commands::Validate {
            responses,
            format,
            output,
            ..
        } => {
            assert_eq!(responses.as_deref(), Some("answers.yaml"));
            assert_eq!(format.as_deref(), Some("json"));
            assert_eq!(output.as_deref(), Some("report.json"));
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn cli_parse_submit_requires_responses() {
    assert!(Cli::try_parse_from(["rsvp-form", "submit", "--form", "f.yaml"]).is_err());

    let cli = Cli::parse_from([
        "rsvp-form",
        "submit",
        "--form",
        "f.yaml",
        "--responses",
        "r.yaml",
        "--config",
        "custom.yaml",
    ]);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
    match cli.command {
        Commands::Submit { format, .. } => assert!(format.is_none()),
        _ => panic!("Expected Submit command"),
    }

    let cli = Cli::parse_from([
        "rsvp-form", "submit", "--form", "f.yaml", "--responses", "r.yaml", "--format", "json",
    ]);
    match cli.command {
        Commands::Submit { format, .. } => assert_eq!(format.as_deref(), Some("json")),
        _ => panic!("Expected Submit command"),
    }
}

#[test]
fn cli_parse_check() {
    let cli = Cli::parse_from(["rsvp-form", "check", "--form", "f.yaml"]);
    match cli.command {
        Commands::Check { form } => assert_eq!(form, "f.yaml"),
        _ => panic!("Expected Check command"),
    }
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_defaults_when_missing() {
    let config = load_config(Some("/nonexistent/rsvp-form.yaml"));
    assert_eq!(config.validate.format, "console");
    assert!(config.validate.seed_defaults);
    assert!(config.trace.path.is_none());
}

#[test]
fn config_partial_file_fills_defaults() {
    let path = temp_file("config_partial.yaml", "trace:\n  path: events.jsonl\n");
    let config = load_config(path.to_str());
    assert_eq!(config.trace.path.as_deref(), Some("events.jsonl"));
    assert_eq!(config.validate.format, "console");
}

#[test]
fn config_malformed_falls_back_to_defaults() {
    let path = temp_file("config_bad.yaml", "validate: [not, a, mapping]\n");
    let config = load_config(path.to_str());
    assert_eq!(config.validate.format, "console");
}

#[test]
fn cli_settings_override_config() {
    let mut config = AppConfig::default();
    config.validate.format = "json".into();
    config.trace.path = Some("from-config.jsonl".into());

    assert_eq!(resolve_format(None, &config), "json");
    assert_eq!(resolve_format(Some("console"), &config), "console");
    assert_eq!(
        resolve_trace_path(None, &config).as_deref(),
        Some("from-config.jsonl")
    );
    assert_eq!(
        resolve_trace_path(Some("cli.jsonl"), &config).as_deref(),
        Some("cli.jsonl")
    );
    assert_eq!(resolve_trace_path(None, &AppConfig::default()), None);
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn validate_command_writes_report() {
    let form = temp_file("cmd_validate_form.yaml", RSVP_YAML);
    let responses = temp_file(
        "cmd_validate_responses.yaml",
        "field_0: Jane\nfield_1: Yes\n",
    );
    let output = std::env::temp_dir().join(format!(
        "rsvp_form_{}_cmd_validate_out.txt",
        std::process::id()
    ));
    let tracer = Arc::new(TraceLogger::disabled());

    let valid = cmd_validate(
        form.to_str().unwrap(),
        responses.to_str(),
        "console",
        output.to_str(),
        true,
        0,
        &tracer,
    )
    .expect("validate failed");

    assert!(!valid, "Code of conduct box is seeded empty and unticked");
    let out = std::fs::read_to_string(&output).unwrap();
    assert!(out.contains("[ERROR] #3 field_3"), "Output:\n{}", out);
}

#[test]
fn submit_command_outputs_snapshot_when_accepted() {
    let form = temp_file("cmd_submit_form.yaml", RSVP_YAML);
    let responses = temp_file(
        "cmd_submit_responses.yaml",
        "field_0: Jane\nfield_1: Yes\nfield_3: [Agree]\nfield_9: stray\n",
    );
    let output = std::env::temp_dir().join(format!(
        "rsvp_form_{}_cmd_submit_out.json",
        std::process::id()
    ));
    let tracer = Arc::new(TraceLogger::disabled());

    let accepted = cmd_submit(
        form.to_str().unwrap(),
        responses.to_str().unwrap(),
        "console",
        output.to_str(),
        true,
        0,
        &tracer,
    )
    .expect("submit failed");

    assert!(accepted);
    let snapshot: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(snapshot["field_3"], serde_json::json!(["Agree"]));
    assert_eq!(snapshot["field_9"], "stray", "Unknown ids travel with the snapshot");
}

#[test]
fn submit_command_renders_rejection_in_requested_format() {
    let form = temp_file("cmd_submit_reject_form.yaml", RSVP_YAML);
    let responses = temp_file("cmd_submit_reject_responses.yaml", "field_1: Yes\n");
    let output = std::env::temp_dir().join(format!(
        "rsvp_form_{}_cmd_submit_reject_out.json",
        std::process::id()
    ));
    let tracer = Arc::new(TraceLogger::disabled());

    let accepted = cmd_submit(
        form.to_str().unwrap(),
        responses.to_str().unwrap(),
        "json",
        output.to_str(),
        true,
        0,
        &tracer,
    )
    .expect("submit failed");

    assert!(!accepted);
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap())
            .expect("Rejection written as JSON");
    assert_eq!(report["valid"], false);
    let indices: Vec<u64> = report["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![0, 3]);

    let err = cmd_submit(
        form.to_str().unwrap(),
        responses.to_str().unwrap(),
        "xml",
        output.to_str(),
        true,
        0,
        &tracer,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unknown output format"), "Got: {}", err);
}

#[test]
fn check_command_flags_bad_spec() {
    let good = temp_file("cmd_check_good.yaml", RSVP_YAML);
    assert!(cmd_check(good.to_str().unwrap(), 0).unwrap());

    let bad = temp_file(
        "cmd_check_bad.yaml",
        "name: Bad\nfields:\n  - kind: dropdown\n    title: Meal\n",
    );
    assert!(!cmd_check(bad.to_str().unwrap(), 0).unwrap());
}
