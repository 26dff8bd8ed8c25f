//! Calling `get_name` through the capability without knowing who answers.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::provider::NameProvider;

/// Write the provider's name followed by a newline.
pub fn write_name<W: Write + ?Sized>(out: &mut W, provider: &dyn NameProvider) -> Result<()> {
    let name = provider.get_name();
    debug!(name, "dispatching get_name");
    writeln!(out, "{name}")?;
    Ok(())
}

/// Print the provider's name on stdout.
pub fn print_name(provider: &dyn NameProvider) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_name(&mut out, provider)?;
    out.flush()?;
    Ok(())
}
