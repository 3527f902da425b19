//! Connection diagnostics.

use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;
use medrec_core::{Account, Error, Session, SqliteSession, Value};

/// Tables the reports read from.
pub const REPORT_TABLES: [&str; 5] = ["Patient", "Doctor", "Admission", "StayIn", "Examine"];

pub fn execute(db_path: &Path, account: &Account) -> Result<()> {
    println!("{}", "medrec check".cyan().bold());
    println!("{}", "─".repeat(50));
    println!();

    print!("  Database ({}): ", db_path.display());
    let mut session = match SqliteSession::connect(db_path, account) {
        Ok(session) => {
            println!("{}", "✓ connected".green());
            session
        }
        Err(e) => {
            println!("{}", format!("✗ {}", e).red());
            bail!("Database not accessible");
        }
    };

    println!();
    println!("  {}", "Tables:".cyan());
    let mut issues = Vec::new();
    for (table, count) in table_counts(&mut session, &REPORT_TABLES) {
        print!("    {}: ", table);
        match count {
            Ok(rows) => println!("{}", format!("✓ {} row(s)", rows).green()),
            Err(e) => {
                println!("{}", format!("✗ {}", e).red());
                issues.push(table);
            }
        }
    }
    session.close();

    // Summary
    println!();
    if issues.is_empty() {
        println!("{}", "✓ All checks passed".green().bold());
        Ok(())
    } else {
        println!("{}", format!("✗ {} table(s) unreadable", issues.len()).red().bold());
        bail!("Missing or unreadable tables: {}", issues.join(", "))
    }
}

/// Count rows in each table, keeping per-table failures.
pub fn table_counts<'t, S: Session>(
    session: &mut S,
    tables: &[&'t str],
) -> Vec<(&'t str, medrec_core::Result<i64>)> {
    tables
        .iter()
        .map(|&table| {
            let sql = format!("SELECT COUNT(*) AS total FROM {}", table);
            let count = session.query(&sql, &[]).and_then(|rows| {
                match rows.first().and_then(|row| row.get("total")) {
                    Some(Value::Integer(n)) => Ok(*n),
                    _ => Err(Error::Query(format!("no row count for {}", table))),
                }
            });
            (table, count)
        })
        .collect()
}
