use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use design_patterns::catalog::{self, RunContext};
use design_patterns::config::{RunnerConfig, DEFAULT_CONFIG_FILE};
use design_patterns::{logging, Result};

#[derive(Parser)]
#[command(name = "patterns", about = "Run design pattern examples", version)]
struct Cli {
    /// Runner configuration (TOML)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every example
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run examples by name
    Run {
        /// Example names; falls back to the configured list
        names: Vec<String>,

        /// Run every example
        #[arg(long)]
        all: bool,
    },
}

fn list(out: &mut dyn Write, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, catalog::catalog())?;
        writeln!(out)?;
        return Ok(());
    }

    for example in catalog::catalog() {
        writeln!(
            out,
            "{:<20} {:<9} {}",
            example.name.green(),
            example.topic,
            example.summary
        )?;
    }
    Ok(())
}

fn execute(cli: Cli) -> Result<()> {
    let config = RunnerConfig::load(&cli.config)?;
    colored::control::set_override(config.color);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List { json } => list(&mut out, json),
        Command::Run { names, all } => {
            let examples = catalog::select(&names, all, &config)?;
            info!(count = examples.len(), "running examples");

            let mut ctx = RunContext::new(&mut out).with_journal_path(config.journal_path);
            catalog::run_examples(&examples, &mut ctx)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
