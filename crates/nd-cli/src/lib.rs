//! Command-line surface for the named-entity demonstrations.
//!
//! Hosts the three standalone programs and the `namedyn` umbrella binary,
//! together with their configuration and logging setup.

pub mod cli;
pub mod commands;
pub mod diagnostics;
pub mod logging;

pub use nd_core::*;

// CLI-specific error handling
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error(transparent)]
        Core(#[from] nd_core::Error),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
