//! CMS page CLI
//!
//! Resolves field paths against page documents stored as JSON files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} CMS page CLI", "cms".green().bold());
            println!();
            println!("Run {} for available commands.", "cms --help".cyan());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(true);
    let result = if verbose {
        let subscriber = builder.with_max_level(Level::DEBUG).finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = builder.with_env_filter(EnvFilter::from_default_env()).finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    result.map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Field {
            document,
            paths,
            locales,
            backend,
            config,
        } => commands::run_field(&document, &paths, locales, backend, config.as_deref()),
        Commands::Compose { document } => commands::run_compose(&document),
        Commands::Identifier { id } => commands::run_identifier(&id),
    }
}
