//! namedyn CLI Binary
//!
//! Runs any of the named-entity demonstrations from one entry point.
//!
//! # Usage
//!
//! ```bash
//! # Print the entity name through dynamic dispatch
//! namedyn dispatch
//!
//! # Narrow an accept-anything value with a different entity name
//! namedyn --name 中文 -vv assert-any
//!
//! # Read the entity from a config file
//! namedyn --config namedyn.toml dispatch
//! ```

use clap::{Parser, Subcommand};
use nd_cli::{
    cli::CliConfig,
    commands::{exit_status, list_command, run_command},
    logging::{setup_logging, LogFormat, LogLevel},
    Result, Scenario,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "namedyn",
    version = env!("CARGO_PKG_VERSION"),
    about = "namedyn: type assertion and dynamic dispatch over a named entity"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Entity name (overrides the config file)
    #[arg(long, global = true)]
    name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Narrow a NameProvider trait object back to the entity
    AssertInterface,

    /// Narrow an accept-anything value back to the entity
    AssertAny,

    /// Print the entity name through the NameProvider trait object
    Dispatch,

    /// List the available scenarios
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    exit_status(run(cli))
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration before logging so the file can pick the defaults
    let config = CliConfig::load(cli.config.as_deref());

    let (level, format) = match &config {
        Ok(config) => (
            cli.log.or(config.logging.level),
            cli.log_format.or(config.logging.format),
        ),
        Err(_) => (cli.log, cli.log_format),
    };
    setup_logging(cli.verbose, cli.quiet, level, format.unwrap_or_default())?;

    let config = config?.with_name(cli.name);

    match cli.command {
        Commands::AssertInterface => run_command(Scenario::InterfaceAssertion, &config),
        Commands::AssertAny => run_command(Scenario::EmptyInterfaceAssertion, &config),
        Commands::Dispatch => run_command(Scenario::DynamicDispatch, &config),
        Commands::List => list_command(&mut std::io::stdout().lock()),
    }
}
