//! Message generator.
//!
//! `MessageKind` is a closed enum, not stringly-typed template kinds, and
//! slot filling is a per-kind `match` instead of substring sniffing. The
//! external `error_kind` strings stay stringly-typed for golden-file
//! stability.

use super::types::{Language, MainValidationResult, Severity, SubValidationResult};

/// The closed set of message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    InvalidCommand,
    InvalidSubcommand,
    DeprecatedCommand,
    DiscontinuedCommand,
    SyntaxError,
    MissingCommand,
    MissingSubcommand,
    Suggestion,
    Success,
}

impl MessageKind {
    pub fn severity(&self) -> Severity {
        match self {
            MessageKind::InvalidCommand
            | MessageKind::InvalidSubcommand
            | MessageKind::SyntaxError
            | MessageKind::MissingCommand
            | MessageKind::MissingSubcommand => Severity::Error,
            MessageKind::DeprecatedCommand | MessageKind::DiscontinuedCommand => Severity::Warning,
            MessageKind::Suggestion => Severity::Info,
            MessageKind::Success => Severity::Success,
        }
    }

    pub fn supports_suggestions(&self) -> bool {
        matches!(
            self,
            MessageKind::InvalidCommand | MessageKind::InvalidSubcommand | MessageKind::Suggestion
        )
    }
}

/// Named slot values a template may draw from. Only the fields relevant to
/// a given `MessageKind` need to be populated by the caller.
#[derive(Debug, Clone, Default)]
pub struct MessageParams {
    pub command: String,
    pub main_command: String,
    pub replacement_command: String,
    pub available_subcommands: Vec<String>,
    pub alternative_actions: Vec<String>,
    pub syntax_detail: String,
}

/// ANSI SGR codes for each severity.
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn color_code(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
        Severity::Info => BLUE,
        Severity::Success => GREEN,
    }
}

/// Wraps `text` in the ANSI color for `severity` when `color_enabled`.
pub fn colorize(text: &str, severity: Severity, color_enabled: bool) -> String {
    if !color_enabled {
        return text.to_string();
    }
    format!("{}{}{}", color_code(severity), text, RESET)
}

/// Kind-specific slot extraction, per language.
pub fn generate_message(kind: MessageKind, params: &MessageParams, lang: Language) -> String {
    match (kind, lang) {
        (MessageKind::InvalidCommand, Language::Ja) => {
            format!("'{}' は有効なusacloudコマンドではありません", params.command)
        }
        (MessageKind::InvalidCommand, Language::En) => {
            format!("'{}' is not a valid usacloud command", params.command)
        }
        (MessageKind::InvalidSubcommand, Language::Ja) => format!(
            "'{}' コマンドに '{}' サブコマンドは存在しません",
            params.main_command, params.command
        ),
        (MessageKind::InvalidSubcommand, Language::En) => format!(
            "'{}' is not a valid subcommand for '{}'",
            params.command, params.main_command
        ),
        (MessageKind::DeprecatedCommand, Language::Ja) => format!(
            "'{}' は非推奨です。代わりに '{}' を使用してください",
            params.command, params.replacement_command
        ),
        (MessageKind::DeprecatedCommand, Language::En) => format!(
            "'{}' is deprecated; use '{}' instead",
            params.command, params.replacement_command
        ),
        (MessageKind::DiscontinuedCommand, Language::Ja) => format!(
            "'{}' は廃止されました。代替手段: {}",
            params.command,
            params.alternative_actions.join(", ")
        ),
        (MessageKind::DiscontinuedCommand, Language::En) => format!(
            "'{}' has been discontinued. Alternatives: {}",
            params.command,
            params.alternative_actions.join(", ")
        ),
        (MessageKind::SyntaxError, Language::Ja) => format!("構文エラー: {}", params.syntax_detail),
        (MessageKind::SyntaxError, Language::En) => format!("Syntax error: {}", params.syntax_detail),
        (MessageKind::MissingCommand, Language::Ja) => "コマンドが指定されていません".to_string(),
        (MessageKind::MissingCommand, Language::En) => "No command specified".to_string(),
        (MessageKind::MissingSubcommand, Language::Ja) => format!(
            "'{}' コマンドにはサブコマンドが必要です。利用可能なサブコマンド: {}",
            params.main_command,
            params.available_subcommands.join(", ")
        ),
        (MessageKind::MissingSubcommand, Language::En) => format!(
            "'{}' requires a subcommand. Available subcommands: {}",
            params.main_command,
            params.available_subcommands.join(", ")
        ),
        (MessageKind::Suggestion, Language::Ja) => format!("もしかして: {} ?", params.command),
        (MessageKind::Suggestion, Language::En) => format!("Did you mean: {}?", params.command),
        (MessageKind::Success, Language::Ja) => "コマンドは有効です".to_string(),
        (MessageKind::Success, Language::En) => "Command is valid".to_string(),
    }
}

/// Convenience wrapper: builds the message for a main-command validation
/// result, pulling suggestions/deprecation detail from the result itself.
pub fn message_for_main_result(result: &MainValidationResult, lang: Language) -> String {
    use super::types::MainErrorKind;
    let mut params = MessageParams { command: result.command.clone(), ..Default::default() };

    let kind = match result.error_kind {
        MainErrorKind::EmptyCommand => MessageKind::MissingCommand,
        MainErrorKind::UnknownCommand => MessageKind::InvalidCommand,
        MainErrorKind::DeprecatedCommand => {
            params.replacement_command = result.suggestions.first().cloned().unwrap_or_default();
            MessageKind::DeprecatedCommand
        }
        MainErrorKind::DiscontinuedCommand => {
            params.alternative_actions = super::deprecation::detect(&result.command)
                .map(|r| r.alternatives.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default();
            MessageKind::DiscontinuedCommand
        }
        MainErrorKind::UnexpectedSubcommand => return result.message.clone(),
        MainErrorKind::None => return generate_message(MessageKind::Success, &params, lang),
    };

    generate_message(kind, &params, lang)
}

/// Convenience wrapper over a subcommand validation result.
pub fn message_for_sub_result(result: &SubValidationResult, lang: Language) -> String {
    use super::types::SubErrorKind;
    let params = MessageParams {
        command: result.sub.clone(),
        main_command: result.main.clone(),
        available_subcommands: result.available.clone(),
        ..Default::default()
    };

    let kind = match result.error_kind {
        SubErrorKind::InvalidMainCommand => MessageKind::InvalidCommand,
        SubErrorKind::InvalidSubcommand => MessageKind::InvalidSubcommand,
        SubErrorKind::MissingSubcommand => MessageKind::MissingSubcommand,
        SubErrorKind::UnexpectedSubcommand => return result.message.clone(),
        SubErrorKind::None => return generate_message(MessageKind::Success, &params, lang),
    };

    generate_message(kind, &params, lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_both_languages() {
        let kinds = [
            MessageKind::InvalidCommand,
            MessageKind::InvalidSubcommand,
            MessageKind::DeprecatedCommand,
            MessageKind::DiscontinuedCommand,
            MessageKind::SyntaxError,
            MessageKind::MissingCommand,
            MessageKind::MissingSubcommand,
            MessageKind::Suggestion,
            MessageKind::Success,
        ];
        let params = MessageParams::default();
        for kind in kinds {
            assert!(!generate_message(kind, &params, Language::Ja).is_empty());
            assert!(!generate_message(kind, &params, Language::En).is_empty());
        }
    }

    #[test]
    fn colorize_wraps_with_ansi_when_enabled() {
        let s = colorize("boom", Severity::Error, true);
        assert!(s.starts_with(RED));
        assert!(s.ends_with(RESET));
    }

    #[test]
    fn colorize_is_plain_when_disabled() {
        assert_eq!(colorize("boom", Severity::Error, false), "boom");
    }

    #[test]
    fn discontinued_message_joins_alternatives() {
        let params = MessageParams {
            command: "summary".to_string(),
            alternative_actions: vec!["bill".into(), "self".into(), "rest".into()],
            ..Default::default()
        };
        let msg = generate_message(MessageKind::DiscontinuedCommand, &params, Language::En);
        assert!(msg.contains("bill, self, rest"));
    }
}
