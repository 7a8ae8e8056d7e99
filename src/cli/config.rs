use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "rsvp-form",
    version,
    about = "Validate and collect answers for dynamic RSVP forms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: rsvp-form.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append JSON Lines trace events to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay responses against a form and report validity
    Validate {
        /// Path to the form spec YAML file
        #[arg(long)]
        form: String,

        /// Path to a responses YAML file (omit to validate an empty form)
        #[arg(long)]
        responses: Option<String>,

        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replay responses and submit; prints the answers as JSON when accepted
    Submit {
        /// Path to the form spec YAML file
        #[arg(long)]
        form: String,

        /// Path to a responses YAML file
        #[arg(long)]
        responses: String,

        /// Report format when the submission is rejected: console, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check a form spec for structural problems
    Check {
        /// Path to the form spec YAML file
        #[arg(long)]
        form: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `rsvp-form.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub validate: ValidateConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    #[serde(default = "default_console")]
    pub format: String,

    /// Seed empty selections for required checkbox groups before replay
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            seed_defaults: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_true() -> bool { true }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("rsvp-form.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Setting resolution (CLI > config > default)
// ============================================================================

pub fn resolve_format(cli: Option<&str>, config: &AppConfig) -> String {
    cli.unwrap_or(config.validate.format.as_str()).to_string()
}

pub fn resolve_trace_path(cli: Option<&str>, config: &AppConfig) -> Option<String> {
    cli.or(config.trace.path.as_deref()).map(str::to_string)
}
