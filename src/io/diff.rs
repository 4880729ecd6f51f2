//! Unified-diff-style reporter for `convert --dry-run`: prints only the
//! lines the transform pipeline actually changed.

use crate::transform::TransformedLine;

/// Renders a git-style `-`/`+` pair for every changed line, and nothing
/// for untouched lines. Returns the number of lines changed.
pub fn render_diff(lines: &[TransformedLine]) -> (String, usize) {
    let mut out = String::new();
    let mut changed = 0;
    for (i, line) in lines.iter().enumerate() {
        if line.rule_applied.is_none() {
            continue;
        }
        changed += 1;
        out.push_str(&format!("@@ line {} @@\n", i + 1));
        out.push_str(&format!("- {}\n", line.original));
        out.push_str(&format!("+ {}\n", line.rewritten));
    }
    (out, changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nothing_for_untouched_script() {
        let lines = vec![TransformedLine {
            original: "usacloud server list".to_string(),
            rewritten: "usacloud server list".to_string(),
            rule_applied: None,
            diagnostic: None,
        }];
        let (out, changed) = render_diff(&lines);
        assert!(out.is_empty());
        assert_eq!(changed, 0);
    }

    #[test]
    fn renders_a_hunk_per_changed_line() {
        let lines = vec![TransformedLine {
            original: "usacloud iso-image list".to_string(),
            rewritten: "usacloud cdrom list  # usacloud-update: iso-image-to-cdrom (https://x)".to_string(),
            rule_applied: Some("iso-image-to-cdrom"),
            diagnostic: None,
        }];
        let (out, changed) = render_diff(&lines);
        assert_eq!(changed, 1);
        assert!(out.contains("- usacloud iso-image list"));
        assert!(out.contains("+ usacloud cdrom list"));
    }
}
