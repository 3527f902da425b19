//! medrec - hospital records console
//!
//! Runs canned patient, doctor and admission reports (and the payment
//! update) against the records database, either once in batch mode or
//! repeatedly from an interactive menu.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use medrec_core::{Account, SqliteSession};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod config;
mod menu;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize tracing. Stdout carries report text only.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.filter).context("Invalid log filter")?,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let account = Account::new(cli.username, cli.password);
    let db_path = config.database_path(cli.database.as_deref());
    debug!(path = %db_path.display(), "Using records database");

    if cli.check {
        return commands::check::execute(&db_path, &account);
    }

    let mut session = SqliteSession::connect(&db_path, &account)
        .context("Failed to open records database")?;

    let result = match cli.choice {
        Some(code) => commands::report::run_batch(&mut session, code),
        None => commands::report::run_interactive(&mut session),
    };

    commands::report::finish(&mut session, std::io::stdout().lock())?;
    result
}
