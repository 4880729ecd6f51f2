//! Transform pipeline: rewrites a usacloud v0 script line-by-line for v1,
//! annotating changed lines with a trailing comment naming the rule and
//! its doc link. Consumes `crate::core` for validation diagnostics; the
//! core never calls back into this module.

pub mod rules;

use crate::core::{self, Formatter, FormatterConfig};

/// One transformed line, with an optional diagnostic attached when the
/// (possibly rewritten) line still fails validation.
#[derive(Debug, Clone)]
pub struct TransformedLine {
    pub original: String,
    pub rewritten: String,
    pub rule_applied: Option<&'static str>,
    pub diagnostic: Option<String>,
}

/// Rewrites every line of `source`, applying the first matching rule per
/// line and appending a `# usacloud-update: <rule>` annotation comment.
/// Lines that validate cleanly (after rewriting) carry no diagnostic;
/// lines that still fail get one rendered via the formatter.
pub fn transform_script(source: &str, formatter_config: FormatterConfig) -> Vec<TransformedLine> {
    let formatter = Formatter::new(formatter_config);
    source.lines().map(|line| transform_line(line, &formatter)).collect()
}

fn transform_line(line: &str, formatter: &Formatter) -> TransformedLine {
    let mut rewritten = line.to_string();
    let mut rule_applied = None;
    for rule in rules::RULES.iter() {
        if let Some(replaced) = rule.apply(&rewritten) {
            rewritten = format!("{replaced}  # usacloud-update: {} ({})", rule.name, rule.doc_url);
            rule_applied = Some(rule.name);
            break;
        }
    }

    let diagnostic = diagnose(&rewritten, formatter);

    TransformedLine {
        original: line.to_string(),
        rewritten,
        rule_applied,
        diagnostic,
    }
}

fn diagnose(line: &str, formatter: &Formatter) -> Option<String> {
    let trimmed = line.split('#').next().unwrap_or("").trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = match core::Parser::default().parse(trimmed) {
        Ok(parsed) => parsed,
        Err(_) => return None,
    };
    if parsed.is_empty_invocation() {
        return None;
    }

    let main_result = core::validate_main_line(&parsed);
    if !main_result.valid {
        return Some(formatter.format_validation_result(&main_result));
    }

    let sub_result = core::validate_sub_line(&parsed);
    if !sub_result.valid {
        return Some(formatter.format_subcommand_result(&sub_result));
    }

    None
}
