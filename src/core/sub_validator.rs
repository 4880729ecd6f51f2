//! Subcommand validator.

use super::dictionary::{is_known, standalone, subcommands_for};
use super::types::{ParsedInvocation, SubErrorKind, SubValidationResult};

/// Validates a `(main, sub)` pair.
pub fn validate_sub(main: &str, sub: &str) -> SubValidationResult {
    if is_known(main).is_none() {
        return SubValidationResult {
            valid: false,
            main: main.to_string(),
            sub: sub.to_string(),
            error_kind: SubErrorKind::InvalidMainCommand,
            message: format!("'{main}' is not a valid main command"),
            available: Vec::new(),
            suggestions: Vec::new(),
        };
    }

    if standalone(main) {
        if sub.is_empty() {
            return SubValidationResult::valid(main, sub);
        }
        return SubValidationResult {
            valid: false,
            main: main.to_string(),
            sub: sub.to_string(),
            error_kind: SubErrorKind::UnexpectedSubcommand,
            message: format!("'{main}' does not accept a subcommand"),
            available: Vec::new(),
            suggestions: Vec::new(),
        };
    }

    let Some(available) = subcommands_for(main) else {
        // Dictionary gap: main is known but has no subcommand list entry.
        return SubValidationResult {
            valid: false,
            main: main.to_string(),
            sub: sub.to_string(),
            error_kind: SubErrorKind::InvalidSubcommand,
            message: format!("'{main}' has no declared subcommands"),
            available: Vec::new(),
            suggestions: Vec::new(),
        };
    };

    if sub.is_empty() {
        return SubValidationResult {
            valid: false,
            main: main.to_string(),
            sub: sub.to_string(),
            error_kind: SubErrorKind::MissingSubcommand,
            message: format!("'{main}' requires a subcommand"),
            available: available.iter().map(|s| s.to_string()).collect(),
            suggestions: available.iter().take(5).map(|s| s.to_string()).collect(),
        };
    }

    let lower_sub = sub.to_lowercase();
    if available.iter().any(|s| s.eq_ignore_ascii_case(&lower_sub)) {
        return SubValidationResult::valid(main, sub);
    }

    SubValidationResult {
        valid: false,
        main: main.to_string(),
        sub: sub.to_string(),
        error_kind: SubErrorKind::InvalidSubcommand,
        message: format!("'{sub}' is not a valid subcommand for '{main}'"),
        available: available.iter().map(|s| s.to_string()).collect(),
        suggestions: coarse_suggestions(available, &lower_sub),
    }
}

/// `validate_sub_line` convenience wrapper.
pub fn validate_sub_line(parsed: &ParsedInvocation) -> SubValidationResult {
    validate_sub(&parsed.main, &parsed.sub)
}

/// Coarse substring/prefix fallback, kept for callers that don't invoke
/// the similarity engine.
fn coarse_suggestions(available: &[&'static str], lower_sub: &str) -> Vec<String> {
    if lower_sub.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = available
        .iter()
        .filter(|s| s.contains(lower_sub) || lower_sub.contains(*s))
        .map(|s| s.to_string())
        .collect();
    out.truncate(5);
    out
}
