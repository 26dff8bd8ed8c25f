//! Type assertion on an empty interface.
//!
//! Holds the entity as an `AnyValue` and recovers the concrete type with a
//! type switch. Prints nothing.

use nd_cli::{
    cli::CliConfig,
    commands::exit_status,
    logging::{setup_logging, LogFormat},
    AnyValue, NameProvider, NamedEntity, Narrow, Result,
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    exit_status(run())
}

fn run() -> Result<()> {
    setup_logging(0, false, None, LogFormat::Pretty)?;

    let config = CliConfig::default();
    let value = AnyValue::new(config.entity());
    let switch = value
        .type_switch()
        .case::<NamedEntity>(|entity| entity.get_name().to_owned());
    let matched = switch.matched();
    let name = switch.finish();

    debug!(matched, ?name, "type switch finished");
    Ok(())
}
