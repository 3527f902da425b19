//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Hospital records console
///
/// Runs a single report when CHOICE is given, otherwise shows the report menu
/// until 0 is entered.
#[derive(Parser, Debug)]
#[command(name = "medrec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operator user name
    pub username: String,

    /// Operator password
    pub password: String,

    /// Report to run once (1 patient, 2 doctor, 3 admission, 4 update payment, 0 exit)
    #[arg(value_parser = clap::value_parser!(u8).range(0..=4))]
    pub choice: Option<u8>,

    /// Records database file
    #[arg(long, env = "MEDREC_DATABASE_PATH")]
    pub database: Option<PathBuf>,

    /// Check the database connection and exit
    #[arg(long)]
    pub check: bool,
}
