//! `usacloud-update explain` — looks up a concept or migration guide from
//! the help content registry and prints it.

use anyhow::{bail, Result};

use crate::core::help::{CONCEPTS, MIGRATION_GUIDES};

pub fn explain_command(topic: &str) -> Result<()> {
    if let Some(concept) = CONCEPTS.get(topic) {
        println!("{}\n\n{}", concept.title, concept.description);
        if !concept.examples.is_empty() {
            println!("\nExamples:");
            for example in &concept.examples {
                println!("  {example}");
            }
        }
        if !concept.see_also.is_empty() {
            println!("\nSee also: {}", concept.see_also.join(", "));
        }
        return Ok(());
    }

    if let Some(guide) = MIGRATION_GUIDES.get(topic) {
        println!("Migration guide: {} -> {}", guide.from, guide.to);
        for change in &guide.changes {
            let new = if change.new_command.is_empty() { "(discontinued)" } else { change.new_command };
            println!("  {} -> {} ({})", change.old_command, new, change.reason);
        }
        return Ok(());
    }

    bail!("no concept or migration guide named '{topic}'");
}
