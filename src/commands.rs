//! CLI command definitions for usacloud-update.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite a usacloud v0 script for the v1 CLI
    Convert {
        /// Script to read
        input: PathBuf,

        /// Where to write the rewritten script (defaults to printing a diff)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the diff without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a single invocation line or a whole script, without rewriting
    Validate {
        /// A literal invocation line, e.g. "usacloud server list"
        #[arg(long, conflicts_with = "file")]
        line: Option<String>,

        /// A script file to validate line-by-line
        #[arg(long, conflicts_with = "line")]
        file: Option<PathBuf>,
    },

    /// Explain a concept or migration guide
    Explain {
        /// Concept id (e.g. "deprecation") or migration guide id (e.g. "v0-to-v1")
        topic: String,
    },

    /// Walk through the built-in tutorial
    Tutorial {
        /// A specific step id; omit to print all steps
        step: Option<String>,
    },
}
