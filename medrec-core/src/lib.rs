//! medrec-core - report engine for the hospital records console
//!
//! - **db**: the [`Session`] boundary and its SQLite implementation
//! - **report**: report selection, typed prompts, query templates, rendering
//! - **account**: operator credentials handed to the connection bootstrap

pub mod account;
pub mod db;
pub mod error;
pub mod report;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use account::Account;
pub use db::{ResultRow, Session, SqliteSession, Value};
pub use error::{Error, Result};
pub use report::{ReportEngine, ReportSelector};
