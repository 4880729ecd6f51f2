//! Comprehensive formatter — the top-level orchestrator.

use super::dictionary::doc_root;
use super::message::colorize;
use super::similarity::SimilarityConfig;
use super::types::{
    DeprecationKind, ErrorContext, IssueType, Language, MainValidationResult, Severity,
    SubValidationResult, UserIntent, ValidationIssue,
};

/// Formatter configuration: color, language, and the default help URL used
/// when an `ErrorContext` doesn't carry one.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    pub color_enabled: bool,
    pub language: Language,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self { color_enabled: false, language: Language::Ja }
    }
}

/// Stateful formatter — holds the current output language, mutable only
/// through `set_language` (which silently rejects unsupported codes).
#[derive(Debug, Clone)]
pub struct Formatter {
    config: FormatterConfig,
}

impl Default for Formatter {
    fn default() -> Self {
        Self { config: FormatterConfig::default() }
    }
}

impl Formatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Accepts only `"ja"`/`"en"`; any other value leaves the current
    /// language unchanged.
    pub fn set_language(&mut self, code: &str) {
        if let Some(lang) = Language::from_code(code) {
            self.config.language = lang;
        }
    }

    pub fn get_language(&self) -> Language {
        self.config.language
    }

    pub fn set_color_enabled(&mut self, enabled: bool) {
        self.config.color_enabled = enabled;
    }

    fn t(&self, ja: &str, en: &str) -> String {
        match self.config.language {
            Language::Ja => ja.to_string(),
            Language::En => en.to_string(),
        }
    }

    /// A nil context or zero detected issues yields a localized "unknown
    /// error" string with the error icon.
    pub fn format_error(&self, ctx: Option<&ErrorContext>) -> String {
        let Some(ctx) = ctx else {
            return self.unknown_error();
        };
        if ctx.detected_issues.is_empty() {
            return self.unknown_error();
        }
        self.render(ctx)
    }

    fn unknown_error(&self) -> String {
        let text = format!(
            "{} {}",
            Severity::Error.icon(),
            self.t("不明なエラーが発生しました", "An unknown error occurred")
        );
        colorize(&text, Severity::Error, self.config.color_enabled)
    }

    /// Success short-circuit for a main-command result.
    pub fn format_validation_result(&self, result: &MainValidationResult) -> String {
        if result.valid {
            return self.success_message();
        }
        self.render(&self.context_from_main_result(result))
    }

    /// Success short-circuit for a subcommand result.
    pub fn format_subcommand_result(&self, result: &SubValidationResult) -> String {
        if result.valid {
            return self.success_message();
        }
        self.render(&self.context_from_sub_result(result))
    }

    fn success_message(&self) -> String {
        let text = format!("{} {}", Severity::Success.icon(), self.t("コマンドは有効です", "Command is valid"));
        colorize(&text, Severity::Success, self.config.color_enabled)
    }

    fn context_from_main_result(&self, result: &MainValidationResult) -> ErrorContext {
        use super::types::MainErrorKind;
        let severity = match result.error_kind {
            MainErrorKind::DeprecatedCommand | MainErrorKind::DiscontinuedCommand => Severity::Warning,
            _ => Severity::Error,
        };
        let issue_type = match result.error_kind {
            MainErrorKind::DeprecatedCommand | MainErrorKind::DiscontinuedCommand => IssueType::Deprecated,
            MainErrorKind::UnexpectedSubcommand => IssueType::Ambiguous,
            _ => IssueType::InvalidMain,
        };
        let message = super::message::message_for_main_result(result, self.config.language);
        let deprecation = super::deprecation::detect(&result.command);

        let suggestions = result
            .suggestions
            .iter()
            .map(|s| super::types::SimilarityResult {
                candidate: s.clone(),
                distance: 0,
                score: 1.0,
            })
            .collect::<Vec<_>>();

        // Prefer the ranked similarity suggestions when there's a real
        // command to rank against (unknown-command path); the
        // deprecated/empty paths keep their single authoritative
        // suggestion as-is.
        let ranked = if matches!(result.error_kind, MainErrorKind::UnknownCommand) {
            super::similarity::suggest_main(&result.command, SimilarityConfig::default())
        } else {
            suggestions
        };

        ErrorContext {
            input_command: result.command.clone(),
            command_parts: vec![result.command.clone()],
            detected_issues: vec![ValidationIssue {
                issue_type,
                severity,
                component: "main_validator".to_string(),
                message,
                expected: Vec::new(),
            }],
            suggestions: ranked,
            deprecation,
            help_url: doc_root().to_string(),
        }
    }

    fn context_from_sub_result(&self, result: &SubValidationResult) -> ErrorContext {
        use super::types::SubErrorKind;
        let issue_type = match result.error_kind {
            SubErrorKind::InvalidMainCommand => IssueType::InvalidMain,
            _ => IssueType::InvalidSub,
        };
        let message = super::message::message_for_sub_result(result, self.config.language);

        let ranked = if matches!(result.error_kind, SubErrorKind::InvalidSubcommand) {
            super::similarity::suggest_sub(&result.main, &result.sub, SimilarityConfig::default())
        } else {
            result
                .suggestions
                .iter()
                .map(|s| super::types::SimilarityResult { candidate: s.clone(), distance: 0, score: 1.0 })
                .collect()
        };

        ErrorContext {
            input_command: result.sub.clone(),
            command_parts: vec![result.main.clone(), result.sub.clone()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect(),
            detected_issues: vec![ValidationIssue {
                issue_type,
                severity: Severity::Error,
                component: "sub_validator".to_string(),
                message,
                expected: result.available.clone(),
            }],
            suggestions: ranked,
            deprecation: None,
            help_url: doc_root().to_string(),
        }
    }

    /// Convenience wrapper so external callers (the CLI's session profile)
    /// can get an intent reading without building an `ErrorContext`
    /// themselves. Returns `None` for a valid result (no intent to infer).
    pub fn infer_intent_for_main_result(&self, result: &MainValidationResult) -> Option<UserIntent> {
        if result.valid {
            return None;
        }
        Some(self.infer_user_intent(&self.context_from_main_result(result)))
    }

    /// Same as `infer_intent_for_main_result`, for subcommand results.
    pub fn infer_intent_for_sub_result(&self, result: &SubValidationResult) -> Option<UserIntent> {
        if result.valid {
            return None;
        }
        Some(self.infer_user_intent(&self.context_from_sub_result(result)))
    }

    /// Infers the user's likely intent. Informational only.
    pub fn infer_user_intent(&self, ctx: &ErrorContext) -> UserIntent {
        if ctx.deprecation.is_some() {
            return UserIntent::Migrating;
        }
        if ctx.suggestions.first().is_some_and(|s| s.score > 0.8) {
            return UserIntent::Typo;
        }
        if ctx.command_parts.len() <= 2 && ctx.suggestions.len() > 3 {
            return UserIntent::Exploring;
        }
        UserIntent::Learning
    }

    fn render(&self, ctx: &ErrorContext) -> String {
        // The primary issue is the most severe (lowest severity ordinal);
        // the rest are secondary, stable order.
        let mut ordered: Vec<&ValidationIssue> = ctx.detected_issues.iter().collect();
        let primary_index = ordered
            .iter()
            .enumerate()
            .min_by_key(|(_, issue)| issue.severity)
            .map(|(i, _)| i)
            .expect("detected_issues is non-empty (checked by caller)");
        let primary = ordered.remove(primary_index);
        let secondary = ordered;

        let mut sections = Vec::new();
        sections.push(self.header_section(ctx, primary, &secondary));

        if !ctx.suggestions.is_empty() {
            sections.push(self.suggestions_section(ctx));
        }

        if let Some(deprecation) = &ctx.deprecation {
            sections.push(self.migration_section(deprecation));
        }

        sections.push(self.help_section(ctx));

        let body = sections.join("\n\n");
        colorize(&body, primary.severity, self.config.color_enabled)
    }

    fn header_section(
        &self,
        ctx: &ErrorContext,
        primary: &ValidationIssue,
        secondary: &[&ValidationIssue],
    ) -> String {
        let icon = primary.severity.icon();
        let label = self.severity_label(primary.severity);

        if secondary.is_empty() {
            let headline = self.headline_for(ctx, primary);
            format!("{icon} {label}: {headline}")
        } else {
            let headline = self.t("複数の問題が見つかりました", "multiple issues detected");
            let mut out = format!("{icon} {label}: {headline}\n  - {}", primary.message);
            for issue in secondary {
                out.push_str(&format!("\n  - {}", issue.message));
            }
            out
        }
    }

    /// Invalid-main/invalid-sub headlines name the offending input
    /// alongside the short generic phrase; deprecated/syntax/ambiguous
    /// issues already carry a complete, specific message (e.g. naming the
    /// replacement command) and are used verbatim.
    fn headline_for(&self, ctx: &ErrorContext, issue: &ValidationIssue) -> String {
        match issue.issue_type {
            IssueType::InvalidMain => format!(
                "'{}' {}",
                ctx.input_command,
                self.t("は有効なコマンドではありません", "is not a valid command")
            ),
            IssueType::InvalidSub => format!(
                "'{}' {}",
                ctx.input_command,
                self.t("は有効なサブコマンドではありません", "is not a valid subcommand")
            ),
            IssueType::Deprecated | IssueType::Syntax | IssueType::Ambiguous => issue.message.clone(),
        }
    }

    fn severity_label(&self, severity: Severity) -> String {
        match severity {
            Severity::Error => self.t("エラー", "Error"),
            Severity::Warning => self.t("警告", "Warning"),
            Severity::Info => self.t("情報", "Info"),
            Severity::Success => self.t("成功", "Success"),
        }
    }

    fn suggestions_section(&self, ctx: &ErrorContext) -> String {
        let header = format!("💡 {}", self.t("もしかして:", "Did you mean:"));
        let label = self.t("類似度", "similarity");
        let lines: Vec<String> = ctx
            .suggestions
            .iter()
            .take(3)
            .map(|s| {
                let pct = (s.score * 100.0).round() as i64;
                format!("• {} ({label}: {pct}%)", s.candidate)
            })
            .collect();
        format!("{header}\n{}", lines.join("\n"))
    }

    fn migration_section(&self, deprecation: &super::types::DeprecationRecord) -> String {
        let header = format!("🔄 {}", self.t("移行ガイド:", "Migration guide:"));
        let mut body = match deprecation.kind {
            DeprecationKind::Renamed => self.t(
                &format!("代わりに '{}' を使用してください", deprecation.replacement),
                &format!("Use '{}' instead", deprecation.replacement),
            ),
            DeprecationKind::Discontinued => {
                let bullets: String =
                    deprecation.alternatives.iter().map(|a| format!("\n- {a}")).collect();
                format!("{}{bullets}", self.t("代替手段:", "Alternatives:"))
            }
        };
        body.push_str(&format!("\n{}", deprecation.doc_url));
        format!("{header}\n{body}")
    }

    fn help_section(&self, ctx: &ErrorContext) -> String {
        let header = format!("📋 {}", self.t("詳細情報:", "See also:"));
        let invocation = match ctx.command_parts.first() {
            Some(main) if !main.is_empty() => format!("usacloud {main} --help"),
            _ => "usacloud --help".to_string(),
        };
        let url = if ctx.help_url.is_empty() { doc_root().to_string() } else { ctx.help_url.clone() };
        format!("{header}\n{invocation} | {url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::main_validator::validate_main;
    use crate::core::sub_validator::validate_sub;

    #[test]
    fn null_context_is_unknown_error() {
        let f = Formatter::default();
        let out = f.format_error(None);
        assert!(out.contains("❌"));
        assert!(out.contains("不明なエラー"));
    }

    #[test]
    fn empty_issues_is_unknown_error() {
        let f = Formatter::default();
        let ctx = ErrorContext::default();
        let out = f.format_error(Some(&ctx));
        assert!(out.contains("❌"));
    }

    #[test]
    fn valid_main_result_is_success_and_has_no_error_icons() {
        let f = Formatter::default();
        let result = validate_main("server");
        let out = f.format_validation_result(&result);
        assert!(out.contains("✅"));
        assert!(!out.contains("❌"));
        assert!(!out.contains("⚠️"));
    }

    #[test]
    fn typo_formats_with_suggestion() {
        let mut f = Formatter::default();
        f.set_language("en");
        let result = validate_main("sever");
        let out = f.format_validation_result(&result);
        assert!(out.contains("❌"));
        assert!(out.contains("sever"));
        assert!(out.contains("💡"));
        assert!(out.contains("server"));
        assert!(out.contains("83%"));
    }

    #[test]
    fn renamed_deprecation_formats_migration_block() {
        let mut f = Formatter::default();
        f.set_language("ja");
        let result = validate_main("iso-image");
        let out = f.format_validation_result(&result);
        assert!(out.contains("⚠️"));
        assert!(out.contains("iso-image"));
        assert!(out.contains("🔄"));
        assert!(out.contains("cdrom"));
        assert!(out.contains("📋"));
        assert!(out.contains("移行"));
    }

    #[test]
    fn missing_subcommand_renders_through_subcommand_path() {
        let f = Formatter::default();
        let result = validate_sub("server", "");
        let out = f.format_subcommand_result(&result);
        assert!(out.contains("❌"));
    }

    #[test]
    fn standalone_misuse_headline_keeps_its_own_message() {
        use crate::core::parser::Parser;
        let mut f = Formatter::default();
        f.set_language("en");
        let parsed = Parser::default().parse("usacloud version list").unwrap();
        let result = crate::core::validate_main_line(&parsed);
        let out = f.format_validation_result(&result);
        assert!(out.contains("does not accept a subcommand"));
        assert!(!out.contains("is not a valid command"));
    }

    #[test]
    fn language_switch_changes_rendered_text() {
        let mut f = Formatter::default();
        f.set_language("en");
        assert_eq!(f.get_language().code(), "en");
        let result = validate_main("sever");
        let out_en = f.format_validation_result(&result);
        assert!(out_en.contains("Did you mean"));
        assert!(out_en.contains("See also"));

        f.set_language("ja");
        let out_ja = f.format_validation_result(&result);
        assert!(out_ja.contains("もしかして"));
        assert!(out_ja.contains("詳細情報"));
    }

    #[test]
    fn set_language_rejects_unsupported_codes() {
        let mut f = Formatter::default();
        f.set_language("en");
        f.set_language("fr");
        assert_eq!(f.get_language().code(), "en");
    }

    /// The primary issue always carries the minimum severity ordinal.
    #[test]
    fn primary_issue_has_minimum_severity_ordinal() {
        let ctx = ErrorContext {
            input_command: "x".to_string(),
            command_parts: vec!["x".to_string()],
            detected_issues: vec![
                ValidationIssue {
                    issue_type: IssueType::Deprecated,
                    severity: Severity::Warning,
                    component: "c".to_string(),
                    message: "warn".to_string(),
                    expected: vec![],
                },
                ValidationIssue {
                    issue_type: IssueType::InvalidMain,
                    severity: Severity::Error,
                    component: "c".to_string(),
                    message: "err".to_string(),
                    expected: vec![],
                },
            ],
            suggestions: vec![],
            deprecation: None,
            help_url: String::new(),
        };
        let f = Formatter::default();
        let out = f.format_error(Some(&ctx));
        // Primary (error) renders first, so its icon leads the output.
        assert!(out.starts_with('\u{1b}') || out.starts_with("❌"));
    }
}
