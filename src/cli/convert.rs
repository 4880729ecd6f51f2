//! `usacloud-update convert` — rewrites a script in place (or to stdout)
//! as a thin function over the transform/io library calls, with
//! `anyhow::Context` at I/O edges.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Settings;
use crate::io::{diff, read_script, write_script};
use crate::transform::transform_script;

pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn convert_command(args: ConvertArgs, settings: &Settings) -> Result<()> {
    let source = read_script(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let lines = transform_script(&source, settings.formatter_config());

    let (hunk, changed) = diff::render_diff(&lines);
    if args.dry_run || args.output.is_none() {
        if changed == 0 {
            println!("No changes needed.");
        } else {
            print!("{hunk}");
        }
    }

    if !args.dry_run {
        let target: &Path = args.output.as_deref().unwrap_or(&args.input);
        write_script(target, &lines)?;
        info!(changed, target = %target.display(), "wrote converted script");
    }

    for line in &lines {
        if let Some(diagnostic) = &line.diagnostic {
            eprintln!("{diagnostic}");
        }
    }

    Ok(())
}
