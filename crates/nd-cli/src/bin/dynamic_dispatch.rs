//! Dynamic dispatch through an interface value.
//!
//! Hands the entity to `print_name` as a `dyn NameProvider`; `print_name`
//! never learns the concrete type. Prints the name on stdout.

use nd_cli::{
    cli::CliConfig,
    commands::exit_status,
    logging::{setup_logging, LogFormat},
    print_name, NameProvider, Result,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    exit_status(run())
}

fn run() -> Result<()> {
    setup_logging(0, false, None, LogFormat::Pretty)?;

    let config = CliConfig::default();
    let person: Box<dyn NameProvider> = Box::new(config.entity());
    print_name(&*person)?;
    Ok(())
}
