//! `usacloud-update tutorial` — walks through the seeded tutorial steps,
//! one screen per step.

use anyhow::Result;

use crate::core::help::TUTORIAL_STEPS;

pub fn tutorial_command(step_id: Option<&str>) -> Result<()> {
    match step_id {
        Some(id) => {
            if let Some(step) = TUTORIAL_STEPS.iter().find(|s| s.id == id) {
                print_step(step);
            } else {
                println!("no tutorial step named '{id}'");
            }
        }
        None => {
            for step in TUTORIAL_STEPS.iter() {
                print_step(step);
                println!();
            }
        }
    }
    Ok(())
}

fn print_step(step: &crate::core::help::TutorialStep) {
    println!("[{}] {}", step.id, step.title);
    println!("{}", step.description);
    for command in &step.commands {
        println!("  $ {command}");
    }
    for tip in &step.tips {
        println!("  tip: {tip}");
    }
}
