use std::sync::Arc;

use crate::form::error::FormError;
use crate::prepare_engine;
use crate::report::console::format_console_report;
use crate::report::json::{format_json_report, format_snapshot};
use crate::report::report_model::ValidationReport;
use crate::spec::form_spec::load_form_spec;
use crate::spec::responses::{ResponseEntry, load_responses};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::FormEventKind;
use crate::workflow::submission::{SubmissionWorkflow, SubmitOutcome};

// ============================================================================
// validate subcommand
// ============================================================================

/// Validate a form against recorded responses and return whether it is valid.
pub fn cmd_validate(
    form_path: &str,
    responses_path: Option<&str>,
    format: &str,
    output: Option<&str>,
    seed_defaults: bool,
    verbose: u8,
    tracer: &Arc<TraceLogger>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let spec = load_form_spec(form_path)?;
    let entries = load_entries(responses_path)?;

    if verbose > 0 {
        eprintln!(
            "Validating '{}' ({} fields, {} responses)...",
            spec.name,
            spec.fields.len(),
            entries.len()
        );
    }

    let engine = prepare_engine(&spec, &entries, seed_defaults, tracer);
    let report = ValidationReport::from_engine(&spec.name, &engine);

    let (valid, errors) = engine.validate_and_collect_errors();
    tracer.log(
        &tracer
            .event(FormEventKind::Validated)
            .with_form(&spec.name)
            .with_valid(valid)
            .with_errors(&errors),
    );

    let output_content = render_report(&report, format)?;
    write_output(output, &output_content)?;

    Ok(report.valid)
}

// ============================================================================
// submit subcommand
// ============================================================================

/// Submit recorded responses. Returns true when the submission was accepted.
/// A rejection is rendered as a validation report in `format`.
pub fn cmd_submit(
    form_path: &str,
    responses_path: &str,
    format: &str,
    output: Option<&str>,
    seed_defaults: bool,
    verbose: u8,
    tracer: &Arc<TraceLogger>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let spec = load_form_spec(form_path)?;
    let entries = load_responses(responses_path)?;

    let engine = prepare_engine(&spec, &entries, seed_defaults, tracer);
    let mut workflow = SubmissionWorkflow::new(engine);

    match workflow.submit() {
        SubmitOutcome::Accepted(snapshot) => {
            tracer.log(
                &tracer
                    .event(FormEventKind::SubmitAccepted)
                    .with_form(&spec.name)
                    .with_valid(true)
                    .with_detail(format!("{} responses", snapshot.len())),
            );
            if verbose > 0 {
                eprintln!("Submission accepted ({} responses)", snapshot.len());
            }
            write_output(output, &format_snapshot(&snapshot)?)?;
            workflow.finish();
            Ok(true)
        }
        SubmitOutcome::Rejected {
            errors,
            first_invalid,
        } => {
            tracer.log(
                &tracer
                    .event(FormEventKind::SubmitRejected)
                    .with_form(&spec.name)
                    .with_valid(false)
                    .with_errors(&errors)
                    .with_detail(format!("first invalid field #{}", first_invalid)),
            );
            if verbose > 0 {
                eprintln!(
                    "Submission rejected: {} required fields incomplete",
                    errors.len()
                );
            }
            let report = ValidationReport::from_engine(&spec.name, workflow.engine());
            write_output(output, &render_report(&report, format)?)?;
            Ok(false)
        }
        SubmitOutcome::AlreadySubmitting => {
            tracer.log(
                &tracer
                    .event(FormEventKind::SubmitBlocked)
                    .with_form(&spec.name),
            );
            eprintln!("A submission is already in progress");
            Ok(false)
        }
    }
}

// ============================================================================
// check subcommand
// ============================================================================

/// Check a form spec and return whether it has no structural problems.
pub fn cmd_check(form_path: &str, verbose: u8) -> Result<bool, Box<dyn std::error::Error>> {
    let spec = load_form_spec(form_path)?;
    let issues = spec.issues();

    if issues.is_empty() {
        println!(
            "\u{2713} {} ({} fields) is well-formed",
            spec.name,
            spec.fields.len()
        );
        if verbose > 0 {
            let engine = spec.build_engine();
            for (field, id) in engine.fields().iter().zip(engine.field_ids()) {
                eprintln!("  {} {} \"{}\"", id, field.kind.as_str(), field.title);
            }
        }
        return Ok(true);
    }

    println!("\u{2717} {} has {} problem(s):", spec.name, issues.len());
    for (index, reason) in &issues {
        let title = spec
            .fields
            .get(*index)
            .map(|f| f.title.as_str())
            .unwrap_or("");
        println!("    #{} \"{}\" \u{2014} {}", index, title, reason);
    }
    Ok(false)
}

// ============================================================================
// Helpers
// ============================================================================

/// Render a report in the named format.
pub fn render_report(report: &ValidationReport, format: &str) -> Result<String, FormError> {
    match format {
        "console" => Ok(format_console_report(report)),
        "json" => format_json_report(report),
        other => Err(FormError::UnknownFormat(other.to_string())),
    }
}

fn load_entries(path: Option<&str>) -> Result<Vec<ResponseEntry>, FormError> {
    match path {
        Some(p) => load_responses(p),
        None => Ok(Vec::new()),
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<(), FormError> {
    match path {
        Some(p) => std::fs::write(p, content).map_err(|source| FormError::Io {
            path: p.to_string(),
            source,
        }),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
