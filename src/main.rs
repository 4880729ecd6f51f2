use anyhow::Result;
use clap::Parser as ClapParser;
use std::path::PathBuf;

use usacloud_update::cli;
use usacloud_update::config::Settings;
use usacloud_update::logging::init_logging;

mod commands;
use commands::Commands;

#[derive(ClapParser)]
#[command(name = "usacloud-update")]
#[command(about = "Rewrites usacloud v0 scripts for the v1 CLI, with semantic validation and bilingual diagnostics")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to .usacloud-update.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(".usacloud-update.toml"));
    let settings = Settings::load(&config_path)?;

    match cli.command {
        Commands::Convert { input, output, dry_run } => {
            cli::convert::convert_command(cli::convert::ConvertArgs { input, output, dry_run }, &settings)?;
        }
        Commands::Validate { line, file } => {
            let target = match (line, file) {
                (Some(line), None) => cli::validate::ValidateTarget::Line(line),
                (None, Some(file)) => cli::validate::ValidateTarget::File(file),
                _ => anyhow::bail!("pass exactly one of --line or --file"),
            };
            cli::validate::validate_command(target, &settings)?;
        }
        Commands::Explain { topic } => {
            cli::explain::explain_command(&topic)?;
        }
        Commands::Tutorial { step } => {
            cli::tutorial::tutorial_command(step.as_deref())?;
        }
    }

    Ok(())
}
