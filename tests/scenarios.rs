//! End-to-end scenarios driven through the crate's public API the way a
//! CLI consumer would use it.

use usacloud_update::core::{
    self, detect_deprecation, migration_message, suggest_main, Formatter, FormatterConfig,
    Language, Parser, SimilarityConfig,
};

#[test]
fn typo_in_main_command_suggests_the_correct_one() {
    let result = core::validate_main("sever");
    assert!(!result.valid);
    assert_eq!(result.error_kind.as_str(), "unknown_command");

    let suggestions = suggest_main("sever", SimilarityConfig::default());
    let top = suggestions.first().expect("at least one suggestion");
    assert_eq!(top.candidate, "server");
    assert_eq!(top.distance, 1);
    assert!(top.score >= 0.83);

    let formatter = Formatter::new(FormatterConfig { color_enabled: false, language: Language::En });
    let out = formatter.format_validation_result(&result);
    assert!(out.contains('\u{274c}'));
    assert!(out.contains("sever"));
    assert!(out.contains('\u{1f4a1}'));
    assert!(out.contains("server"));
    assert!(out.contains("83%"));
}

#[test]
fn renamed_command_reports_its_replacement() {
    let record = detect_deprecation("iso-image").expect("iso-image is deprecated");
    assert_eq!(record.kind.as_str(), "renamed");
    assert_eq!(record.replacement, "cdrom");

    let formatter = Formatter::new(FormatterConfig { color_enabled: false, language: Language::Ja });
    let result = core::validate_main("iso-image");
    let out = formatter.format_validation_result(&result);
    assert!(out.contains('\u{26a0}'));
    assert!(out.contains("iso-image"));
    assert!(out.contains('\u{1f504}'));
    assert!(out.contains("cdrom"));
    assert!(out.contains('\u{1f4cb}'));
    assert!(out.contains("移行"));
}

#[test]
fn discontinued_command_lists_alternatives() {
    let record = detect_deprecation("summary").expect("summary is deprecated");
    assert_eq!(record.kind.as_str(), "discontinued");
    assert!(!record.alternatives.is_empty());

    let message = migration_message("summary");
    assert!(message.contains("bill"));
    assert!(message.contains("self"));
    assert!(message.contains("rest"));
    assert!(message.trim_end().contains("https://"));
}

#[test]
fn standalone_command_rejects_a_subcommand() {
    let parser = Parser::new("tool");
    let parsed = parser.parse("tool version list").expect("parses");
    assert_eq!(parsed.main, "version");
    assert_eq!(parsed.sub, "list");

    let result = core::validate_main_line(&parsed);
    assert!(!result.valid);
    assert_eq!(result.error_kind.as_str(), "unexpected_subcommand");
}

#[test]
fn missing_subcommand_lists_available_ones_as_suggestions() {
    let result = core::validate_sub("server", "");
    assert!(!result.valid);
    assert_eq!(result.error_kind.as_str(), "missing_subcommand");
    assert!(!result.available.is_empty());
    assert_eq!(result.suggestions, result.available.iter().take(5).cloned().collect::<Vec<_>>());
}

#[test]
fn formatter_language_switch_changes_rendered_text() {
    let mut formatter = Formatter::new(FormatterConfig { color_enabled: false, language: Language::En });
    let result = core::validate_main("sever");

    let out_en = formatter.format_validation_result(&result);
    assert!(out_en.contains("Error"));
    assert!(out_en.contains("Did you mean"));
    assert!(out_en.contains("See also"));

    formatter.set_language("ja");
    let out_ja = formatter.format_validation_result(&result);
    assert!(out_ja.contains("エラー"));
    assert!(out_ja.contains("もしかして"));
    assert!(out_ja.contains("詳細情報"));
}
