use anyhow::Result;
use clap::Parser;
use scrub::cleaner::CleanupEngine;
use scrub::config::Config;
use scrub::reporter::{CliReporter, JsonReporter, Reporter};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "scrub")]
#[command(about = "Release-prep cleanup for web front-ends: strips debug logging and unused CSS rules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Report what would be removed (read-only, no modifications)
    Check {
        /// Project root directory
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output results in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Remove debug calls and unused CSS rules in place
    Clean {
        /// Project root directory
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output results in JSON format
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    match cli.command {
        Commands::Check { root, json } => run(root, json, true),
        Commands::Clean { root, json } => run(root, json, false),
    }
}

fn run(root: PathBuf, json: bool, dry_run: bool) -> Result<()> {
    let start = Instant::now();

    let config = Config::find_and_load(&root);
    let engine = CleanupEngine::new(config).dry_run(dry_run);
    let stats = engine.clean(&root);

    if json {
        JsonReporter.report(&stats)?;
    } else {
        CliReporter.report(&stats)?;
        println!("⏱️  Completed in {:.2?}", start.elapsed());
    }

    // The stats object never hides failures; surface them in the exit code so
    // a release pipeline can decide to stop.
    if !stats.errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
