use std::io::Write;

use anyhow::{Error, Result};
use crossterm::style::Stylize;

/// Severity levels used when echoing the outcome of an operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

/// Write a one-line status message. Severity colors are only applied when
/// `styled` is set, so piped output stays plain text.
pub(crate) fn write_status(
    out: &mut impl Write,
    kind: StatusKind,
    text: &str,
    styled: bool,
) -> Result<()> {
    match (kind, styled) {
        (_, false) => writeln!(out, "{text}")?,
        (StatusKind::Info, true) => writeln!(out, "{}", text.green())?,
        (StatusKind::Error, true) => writeln!(out, "{}", text.red())?,
    }
    Ok(())
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
