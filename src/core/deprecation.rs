//! Deprecation detector — a pure lookup layer over the deprecation table,
//! plus formatting helpers. No suggestion ranking here; that's the
//! similarity engine's job.

use super::dictionary::DEPRECATED_COMMANDS;
use super::types::{DeprecationKind, DeprecationRecord};

/// Looks up a command against the deprecation table (case-insensitive,
/// whitespace-trimmed).
pub fn detect(name: &str) -> Option<DeprecationRecord> {
    let key = name.trim().to_lowercase();
    DEPRECATED_COMMANDS.get(key.as_str()).cloned()
}

/// Formats the migration message for a deprecated command name.
///
/// Renamed: a single-sentence "X was renamed to Y; use Y" with a doc link.
/// Discontinued: a multi-line block listing alternatives as bullets
/// followed by a doc link.
pub fn migration_message(name: &str) -> String {
    match detect(name) {
        None => String::new(),
        Some(record) => match record.kind {
            DeprecationKind::Renamed => format!(
                "{} was renamed to {}; use {} instead. See {}",
                record.old_name, record.replacement, record.replacement, record.doc_url
            ),
            DeprecationKind::Discontinued => {
                let bullets: String = record
                    .alternatives
                    .iter()
                    .map(|a| format!("- {a}\n"))
                    .collect();
                format!(
                    "{} has been discontinued. Alternatives:\n{}See {}",
                    record.old_name, bullets, record.doc_url
                )
            }
        },
    }
}
