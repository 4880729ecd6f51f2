//! Regex-based rewrite rules, built around a `Lazy<Regex>`-per-rule shape.
//!
//! The core never runs these; a rule only rewrites the text of a line and
//! names itself for the trailing annotation comment.

use once_cell::sync::Lazy;
use regex::Regex;

/// One regex-based substitution, applied line-by-line.
pub struct Rule {
    pub name: &'static str,
    pub doc_url: &'static str,
    pattern: Lazy<Regex>,
    replacement: &'static str,
}

impl Rule {
    /// Applies the rule to `line`. Returns `None` if the pattern doesn't match.
    pub fn apply(&self, line: &str) -> Option<String> {
        if !self.pattern.is_match(line) {
            return None;
        }
        Some(self.pattern.replace(line, self.replacement).into_owned())
    }
}

macro_rules! rule {
    ($name:expr, $doc_url:expr, $pattern:expr, $replacement:expr) => {
        Rule {
            name: $name,
            doc_url: $doc_url,
            pattern: Lazy::new(|| Regex::new($pattern).expect("valid rewrite-rule regex")),
            replacement: $replacement,
        }
    };
}

/// The fixed, ordered rule set. Rules are applied first-match-wins per
/// line — once a rule rewrites a line, later rules are skipped for it.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule!(
            "iso-image-to-cdrom",
            "https://manual.sakura.ad.jp/cloud-api/1.1/cdrom/",
            r"\busacloud\s+iso-image\b",
            "usacloud cdrom"
        ),
        rule!(
            "summary-to-bill",
            "https://manual.sakura.ad.jp/cloud-api/1.1/bill/",
            r"\busacloud\s+summary\b",
            "usacloud bill"
        ),
        rule!(
            "object-storage-rename",
            "https://manual.sakura.ad.jp/cloud-api/1.1/object-storage/",
            r"\busacloud\s+object-storage\b",
            "usacloud ojs"
        ),
        rule!(
            "output-type-csv-tsv-removed",
            "https://manual.sakura.ad.jp/cloud-api/1.1/output/",
            r"--output-type=(csv|tsv)\b",
            "--output-type=json"
        ),
        rule!(
            "selector-arg-to-id",
            "https://manual.sakura.ad.jp/cloud-api/1.1/selector/",
            r"--selector\s+",
            "--id "
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_image_rule_rewrites_only_matching_lines() {
        let rule = &RULES[0];
        assert_eq!(
            rule.apply("usacloud iso-image list"),
            Some("usacloud cdrom list".to_string())
        );
        assert_eq!(rule.apply("usacloud server list"), None);
    }

    #[test]
    fn every_rule_has_a_doc_url() {
        for rule in RULES.iter() {
            assert!(rule.doc_url.starts_with("https://"));
            assert!(!rule.name.is_empty());
        }
    }

    #[test]
    fn output_type_rule_normalizes_csv_and_tsv() {
        let rule = &RULES[3];
        assert_eq!(
            rule.apply("usacloud server list --output-type=csv"),
            Some("usacloud server list --output-type=json".to_string())
        );
        assert_eq!(
            rule.apply("usacloud server list --output-type=tsv"),
            Some("usacloud server list --output-type=json".to_string())
        );
    }
}
