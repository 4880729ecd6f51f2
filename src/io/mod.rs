//! File I/O and diff reporting: plain `std::fs` wrapped with
//! `anyhow::Context` at the edges so failures carry a useful path.

pub mod diff;

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::AppError;
use crate::transform::TransformedLine;

/// Reads a script file into memory, wrapping I/O failures as `AppError`
/// so callers at the CLI edge get a uniform message.
pub fn read_script(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io { path: path.to_path_buf(), source })
}

/// Writes the rewritten lines to `path`, one per line, joined by `\n` with
/// a trailing newline.
pub fn write_script(path: &Path, lines: &[TransformedLine]) -> Result<()> {
    let body: String = lines
        .iter()
        .map(|l| l.rewritten.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(path, format!("{body}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}
