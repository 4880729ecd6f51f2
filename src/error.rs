//! Crate-wide error type for the CLI boundary.
//!
//! The core's own `core::types::ParseError` stays a plain tagged enum — the
//! core never panics and never returns surprise errors, only the parser
//! returns a distinct error value. `AppError` is the place that wraps it,
//! and I/O/config failures, into something `anyhow`-friendly at the CLI
//! edge: one `thiserror` enum per fallible subsystem.

use crate::core::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("line {line_number} is not a valid invocation: {reason}")]
    InvalidLine { line_number: usize, reason: String },
}

/// Renders a core `ParseError` as a human-readable reason string, for
/// callers that need to surface it as a synthetic validation issue for
/// uniform rendering.
pub fn describe_parse_error(err: &ParseError) -> String {
    match err {
        ParseError::Empty => "empty line".to_string(),
        ParseError::NotATool => "not a usacloud invocation".to_string(),
        ParseError::InvalidSyntax { position, reason } => {
            format!("{reason} at position {position}")
        }
    }
}
