//! Help content registry — static seed data consumed by external
//! collaborators (the `explain`/`tutorial` CLI subcommands here; an
//! interactive builder elsewhere). The core treats these as opaque tables.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct CommonMistake {
    pub pattern: &'static str,
    pub description: &'static str,
    pub correct_examples: Vec<&'static str>,
    pub explanation: &'static str,
    pub related_topics: Vec<&'static str>,
    pub frequency: u8,
}

#[derive(Debug, Clone)]
pub struct TutorialStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub commands: Vec<&'static str>,
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Concept {
    pub title: &'static str,
    pub description: &'static str,
    pub examples: Vec<&'static str>,
    pub see_also: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct MigrationChange {
    pub old_command: &'static str,
    pub new_command: &'static str,
    pub reason: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone)]
pub struct MigrationExample {
    pub scenario: &'static str,
    pub old: &'static str,
    pub new: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Clone)]
pub struct MigrationGuide {
    pub from: &'static str,
    pub to: &'static str,
    pub changes: Vec<MigrationChange>,
    pub examples: Vec<MigrationExample>,
}

pub static COMMON_MISTAKES: Lazy<Vec<CommonMistake>> = Lazy::new(|| {
    vec![
        CommonMistake {
            pattern: "sever",
            description: "typing 'sever' instead of 'server'",
            correct_examples: vec!["usacloud server list"],
            explanation: "a single dropped letter turns 'server' into an unknown command",
            related_topics: vec!["typos", "server"],
            frequency: 40,
        },
        CommonMistake {
            pattern: "iso-image",
            description: "using the old 'iso-image' command name",
            correct_examples: vec!["usacloud cdrom list"],
            explanation: "iso-image was renamed to cdrom in the v1 line",
            related_topics: vec!["deprecations", "cdrom"],
            frequency: 25,
        },
    ]
});

pub static TUTORIAL_STEPS: Lazy<Vec<TutorialStep>> = Lazy::new(|| {
    vec![
        TutorialStep {
            id: "01-list-servers",
            title: "List your servers",
            description: "The most common first command: list all servers in the current zone.",
            commands: vec!["usacloud server list"],
            tips: vec!["Add --zone to target a specific zone"],
        },
        TutorialStep {
            id: "02-inspect-a-server",
            title: "Inspect one server",
            description: "Read full details for a single server by ID.",
            commands: vec!["usacloud server read 123456789012"],
            tips: vec![],
        },
    ]
});

pub static CONCEPTS: Lazy<HashMap<&'static str, Concept>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "standalone-command",
        Concept {
            title: "Standalone command",
            description: "A main command that rejects any subcommand, e.g. version or update-self.",
            examples: vec!["usacloud version"],
            see_also: vec!["subcommand"],
        },
    );
    m.insert(
        "deprecation",
        Concept {
            title: "Deprecation",
            description: "An old command name that has either been renamed or discontinued.",
            examples: vec!["usacloud iso-image list", "usacloud summary"],
            see_also: vec!["standalone-command"],
        },
    );
    m
});

pub static MIGRATION_GUIDES: Lazy<HashMap<&'static str, MigrationGuide>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "v0-to-v1",
        MigrationGuide {
            from: "v0",
            to: "v1",
            changes: vec![
                MigrationChange {
                    old_command: "iso-image",
                    new_command: "cdrom",
                    reason: "unified disk-image resource naming",
                    impact: "scripts using iso-image must switch to cdrom",
                },
                MigrationChange {
                    old_command: "summary",
                    new_command: "",
                    reason: "summary was discontinued in favor of targeted commands",
                    impact: "use bill, self, or rest instead",
                },
            ],
            examples: vec![MigrationExample {
                scenario: "listing cdrom images",
                old: "usacloud iso-image list",
                new: "usacloud cdrom list",
                explanation: "direct rename, no argument changes needed",
            }],
        },
    );
    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registries_are_non_empty() {
        assert!(!COMMON_MISTAKES.is_empty());
        assert!(!TUTORIAL_STEPS.is_empty());
        assert!(!CONCEPTS.is_empty());
        assert!(!MIGRATION_GUIDES.is_empty());
    }

    #[test]
    fn migration_guide_v0_to_v1_exists() {
        let guide = MIGRATION_GUIDES.get("v0-to-v1").unwrap();
        assert_eq!(guide.from, "v0");
        assert_eq!(guide.to, "v1");
        assert!(!guide.changes.is_empty());
    }
}
