//! The append-only status log written after each check.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use passcheck::Strength;

/// Append a `Status=<STRENGTH>` line to the log at `path`, creating the file if needed.
pub(crate) fn append_status(path: &Path, strength: Strength) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Status={}", strength)?;
    file.flush()
}

/// Like [`append_status`], but a failure is only logged. A missing status line is not worth
/// failing the check over.
pub(crate) fn record_status(path: &Path, strength: Strength) {
    match append_status(path, strength) {
        Ok(()) => tracing::info!(path = %path.display(), %strength, "recorded status"),
        Err(err) => tracing::warn!(
            path = %path.display(),
            error = %err,
            "failed to append to the status log"
        ),
    }
}
