use miette::Diagnostic;
use std::result;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("value holds `{found}`, not `{expected}`")]
    #[diagnostic(
        code(namedyn::narrow_mismatch),
        help("narrow to the type the value actually holds, or add a type switch case for it")
    )]
    NarrowMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("IO error: {0}")]
    #[diagnostic(code(namedyn::io))]
    Io(#[from] std::io::Error),
    #[error("Generic error: {0}")]
    Generic(String),
}

impl Error {
    pub fn is_narrow_mismatch(&self) -> bool {
        matches!(self, Error::NarrowMismatch { .. })
    }
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}
