use std::sync::Arc;

use clap::Parser;
use rsvp_form::cli::commands::{cmd_check, cmd_submit, cmd_validate};
use rsvp_form::cli::config::{Cli, Commands, load_config, resolve_format, resolve_trace_path};
use rsvp_form::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace settings: CLI > config > disabled
    let tracer = Arc::new(match resolve_trace_path(cli.trace.as_deref(), &config) {
        Some(path) => TraceLogger::new(&path),
        None => TraceLogger::disabled(),
    });

    let ok = match cli.command {
        Commands::Validate {
            form,
            responses,
            format,
            output,
        } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_validate(
                &form,
                responses.as_deref(),
                &format,
                output.as_deref(),
                config.validate.seed_defaults,
                cli.verbose,
                &tracer,
            )?
        }
        Commands::Submit {
            form,
            responses,
            format,
            output,
        } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_submit(
                &form,
                &responses,
                &format,
                output.as_deref(),
                config.validate.seed_defaults,
                cli.verbose,
                &tracer,
            )?
        }
        Commands::Check { form } => cmd_check(&form, cli.verbose)?,
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
