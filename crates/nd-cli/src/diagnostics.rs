//! Diagnostic rendering for errors that carry a miette code and help text

use crate::CliError;
use miette::{GraphicalReportHandler, GraphicalTheme};
use std::io::Write;

/// Render `err` as a miette report into `out`.
///
/// Returns `false` when the error has no diagnostic to show or rendering
/// failed, so the caller can fall back to plain logging.
pub fn render_cli_error<W: Write + ?Sized>(out: &mut W, err: &CliError) -> bool {
    let CliError::Core(core) = err else {
        return false;
    };

    let handler =
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(120);
    let mut report = String::new();
    if handler.render_report(&mut report, core).is_err() {
        return false;
    }

    out.write_all(report.as_bytes()).is_ok()
}
