//! Command implementations behind the binaries.

use crate::cli::CliConfig;
use crate::diagnostics::render_cli_error;
use crate::Result;
use nd_core::scenario::{run as run_scenario, Scenario};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Run one scenario against the configured entity, writing its output to
/// stdout.
pub fn run_command(scenario: Scenario, config: &CliConfig) -> Result<()> {
    info!(%scenario, "running {}", scenario.description());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let name = run_scenario(scenario, config.entity(), &mut out)?;
    if scenario.writes_output() {
        out.flush()?;
    }

    debug!(%name, "scenario completed");
    Ok(())
}

/// Write one line per scenario: its subcommand name and what it shows.
pub fn list_command<W: Write>(out: &mut W) -> Result<()> {
    for scenario in Scenario::ALL {
        writeln!(out, "{:<18}{}", scenario.name(), scenario.description())?;
    }
    Ok(())
}

/// Turn a command result into the process exit status, reporting failures
/// on stderr.
pub fn exit_status(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !render_cli_error(&mut io::stderr().lock(), &e) {
                error!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
