//! `usacloud-update validate` — runs the parser/validator/formatter chain
//! over a single line or a whole script without rewriting it, and reports
//! the dominant inferred user intent across the run.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Settings;
use crate::core::{Formatter, Parser};
use crate::io::read_script;
use crate::profile::SessionProfile;

pub enum ValidateTarget {
    Line(String),
    File(PathBuf),
}

pub fn validate_command(target: ValidateTarget, settings: &Settings) -> Result<()> {
    let parser = Parser::default();
    let formatter = Formatter::new(settings.formatter_config());
    let mut profile = SessionProfile::new();

    let lines: Vec<String> = match target {
        ValidateTarget::Line(line) => vec![line],
        ValidateTarget::File(path) => {
            read_script(&path)?.lines().map(|l| l.to_string()).collect()
        }
    };

    let mut any_invalid = false;
    for raw in &lines {
        let parsed = match parser.parse(raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!("parse error: {}", crate::error::describe_parse_error(&err));
                any_invalid = true;
                continue;
            }
        };
        if parsed.is_empty_invocation() {
            continue;
        }

        let main_result = crate::core::validate_main_line(&parsed);
        if let Some(intent) = formatter.infer_intent_for_main_result(&main_result) {
            profile.record(intent);
        }
        if !main_result.valid {
            println!("{}", formatter.format_validation_result(&main_result));
            any_invalid = true;
            continue;
        }

        let sub_result = crate::core::validate_sub_line(&parsed);
        if let Some(intent) = formatter.infer_intent_for_sub_result(&sub_result) {
            profile.record(intent);
        }
        if !sub_result.valid {
            println!("{}", formatter.format_subcommand_result(&sub_result));
            any_invalid = true;
            continue;
        }

        println!("{}", formatter.format_validation_result(&main_result));
    }

    if let Some(intent) = profile.dominant_intent() {
        eprintln!("(inferred intent across this run: {intent})");
    }

    if any_invalid {
        std::process::exit(1);
    }
    Ok(())
}
