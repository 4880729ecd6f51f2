//! Main-command validator.

use super::dictionary::{all_main_commands, is_known, standalone, DEPRECATED_COMMANDS};
use super::types::{CommandType, MainErrorKind, MainValidationResult, ParsedInvocation};

/// Validates a bare main-command token (case-insensitive).
pub fn validate_main(command: &str) -> MainValidationResult {
    if command.is_empty() {
        return MainValidationResult {
            valid: false,
            command: command.to_string(),
            command_type: None,
            error_kind: MainErrorKind::EmptyCommand,
            message: String::new(),
            suggestions: Vec::new(),
        };
    }

    if let Some(command_type) = is_known(command) {
        let canonical = canonical_form(command, command_type);
        if command != canonical {
            // Valid but advisory: prefer the canonical lowercase form.
            return MainValidationResult {
                valid: true,
                command: command.to_string(),
                command_type: Some(command_type),
                error_kind: MainErrorKind::None,
                message: format!("prefer the lowercase form '{canonical}'"),
                suggestions: vec![canonical],
            };
        }
        return MainValidationResult::valid(command, command_type);
    }

    let lower = command.to_lowercase();
    if let Some(record) = DEPRECATED_COMMANDS.get(lower.as_str()) {
        use super::types::DeprecationKind;
        return match record.kind {
            DeprecationKind::Renamed => MainValidationResult {
                valid: false,
                command: command.to_string(),
                command_type: Some(CommandType::Deprecated),
                error_kind: MainErrorKind::DeprecatedCommand,
                message: record.message.to_string(),
                suggestions: vec![record.replacement.to_string()],
            },
            DeprecationKind::Discontinued => MainValidationResult {
                valid: false,
                command: command.to_string(),
                command_type: Some(CommandType::Deprecated),
                error_kind: MainErrorKind::DiscontinuedCommand,
                message: record.message.to_string(),
                suggestions: Vec::new(),
            },
        };
    }

    MainValidationResult {
        valid: false,
        command: command.to_string(),
        command_type: None,
        error_kind: MainErrorKind::UnknownCommand,
        message: format!("'{command}' is not a valid command"),
        suggestions: coarse_suggestions(&lower),
    }
}

/// Validates a full invocation: adds the standalone + non-empty-sub rule.
pub fn validate_main_line(parsed: &ParsedInvocation) -> MainValidationResult {
    let result = validate_main(&parsed.main);
    if result.valid && standalone(&parsed.main) && !parsed.sub.is_empty() {
        return MainValidationResult {
            valid: false,
            command: parsed.main.clone(),
            command_type: result.command_type,
            error_kind: MainErrorKind::UnexpectedSubcommand,
            message: format!("'{}' does not accept a subcommand", parsed.main),
            suggestions: Vec::new(),
        };
    }
    result
}

fn canonical_form(command: &str, command_type: CommandType) -> String {
    use super::dictionary::{IAAS_COMMANDS, MISC_COMMANDS, ROOT_COMMANDS};
    let lower = command.to_lowercase();
    let table = match command_type {
        CommandType::Iaas => &*IAAS_COMMANDS,
        CommandType::Misc => &*MISC_COMMANDS,
        CommandType::Root => &*ROOT_COMMANDS,
        CommandType::Deprecated => unreachable!("canonical_form is never called for deprecated"),
    };
    table
        .keys()
        .find(|k| k.eq_ignore_ascii_case(&lower))
        .map(|k| k.to_string())
        .unwrap_or(lower)
}

/// Coarse substring/prefix safety-net fallback, kept for callers that
/// don't invoke the similarity engine. Capped at 2 entries.
fn coarse_suggestions(lower_input: &str) -> Vec<String> {
    if lower_input.is_empty() {
        return Vec::new();
    }
    let first_char = lower_input.chars().next();
    let mut out: Vec<String> = all_main_commands()
        .into_iter()
        .filter(|c| {
            c.contains(lower_input)
                || lower_input.contains(c)
                || first_char.is_some_and(|ch| c.starts_with(ch))
        })
        .map(|s| s.to_string())
        .collect();
    out.sort();
    out.dedup();
    out.truncate(2);
    out
}
