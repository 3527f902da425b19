//! Database sessions.
//!
//! A [`Session`] owns one live connection and runs one statement at a time.
//! Every result set is read to the end and released before a call returns,
//! so the connection never has two statements outstanding.

pub mod types;

pub use types::*;

use std::path::Path;

use rusqlite::{Connection, OpenFlags, params_from_iter};
use tracing::{debug, info, warn};

use crate::account::Account;
use crate::error::{Error, Result};

/// Query and statement execution against one open connection.
pub trait Session {
    /// Run a read query and collect every row.
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<ResultRow>>;

    /// Run a mutating statement and return the number of rows changed.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize>;

    /// Release the connection. Safe to call more than once; never fails.
    fn close(&mut self);
}

/// SQLite-backed session.
pub struct SqliteSession {
    conn: Option<Connection>,
}

impl SqliteSession {
    /// Open an existing records database on behalf of an operator.
    ///
    /// The file must already exist; a missing or unreadable database is a
    /// [`Error::ConnectionFailure`].
    pub fn connect(path: &Path, account: &Account) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)
            .map_err(|e| Error::connection_failure(path.display().to_string(), e))?;

        // Force SQLite to read the header so a non-database file fails here.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |_| Ok(()))
            .map_err(|e| Error::connection_failure(path.display().to_string(), e))?;

        if !account.has_password() {
            warn!(user = account.username(), "Connecting without a password");
        }
        info!(user = account.username(), path = %path.display(), "Connected to records database");

        Ok(Self::from_connection(conn))
    }

    /// Wrap an already-open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn: Some(conn) }
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(Error::SessionClosed)
    }
}

impl Session for SqliteSession {
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<ResultRow>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql).map_err(Error::query)?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.query(params_from_iter(params.iter())).map_err(Error::query)?;
        let mut result = Vec::new();
        while let Some(row) = rows.next().map_err(Error::query)? {
            let mut columns = Vec::with_capacity(names.len());
            for (i, name) in names.iter().enumerate() {
                let value = row.get_ref(i).map_err(Error::query)?;
                columns.push((name.clone(), Value::from(value)));
            }
            result.push(ResultRow::new(columns));
        }

        debug!(rows = result.len(), "Query complete");
        Ok(result)
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize> {
        let conn = self.conn()?;
        let affected = conn
            .execute(sql, params_from_iter(params.iter()))
            .map_err(Error::statement)?;

        info!(affected, "Statement complete");
        Ok(affected)
    }

    fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                debug!(error = %e, "Ignoring error while closing connection");
            }
        }
    }
}

impl Drop for SqliteSession {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{seeded_database, SCHEMA};
    use tempfile::tempdir;

    #[test]
    fn test_connect_missing_file_fails() {
        let temp = tempdir().expect("Failed to create temp dir");
        let db_path = temp.path().join("missing.db");

        let result = SqliteSession::connect(&db_path, &Account::new("clerk", "pw"));
        assert!(matches!(result, Err(Error::ConnectionFailure { .. })));

        // Connecting must never create the file
        assert!(!db_path.exists());
    }

    #[test]
    fn test_connect_non_database_file_fails() {
        let temp = tempdir().expect("Failed to create temp dir");
        let db_path = temp.path().join("notes.txt");
        std::fs::write(&db_path, "not a sqlite database\n".repeat(64)).expect("Failed to write file");

        let result = SqliteSession::connect(&db_path, &Account::new("clerk", "pw"));
        assert!(matches!(result, Err(Error::ConnectionFailure { .. })));
    }

    #[test]
    fn test_connect_existing_database() {
        let temp = tempdir().expect("Failed to create temp dir");
        let db_path = temp.path().join("hospital.db");
        Connection::open(&db_path)
            .and_then(|c| c.execute_batch(SCHEMA))
            .expect("Failed to create schema");

        let session = SqliteSession::connect(&db_path, &Account::new("clerk", "pw"));
        assert!(session.is_ok(), "Failed to connect: {:?}", session.err());
    }

    #[test]
    fn test_query_returns_named_columns_and_nulls() {
        let (mut session, _dir) = seeded_database();

        let rows = session
            .query(
                "SELECT SSN, givenName, surname, address FROM Patient WHERE SSN = ?1",
                &[Value::from("222-22-2222")],
            )
            .expect("Query failed");

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.get("SSN"), Some(&Value::from("222-22-2222")));
        assert_eq!(row.get("surname"), Some(&Value::Null));
        assert_eq!(row.get("address"), Some(&Value::Null));
        assert_eq!(row.columns().collect::<Vec<_>>(), ["SSN", "givenName", "surname", "address"]);
    }

    #[test]
    fn test_bound_parameters_are_not_interpolated() {
        let (mut session, _dir) = seeded_database();

        let rows = session
            .query(
                "SELECT SSN FROM Patient WHERE SSN = ?1",
                &[Value::from("' OR '1'='1")],
            )
            .expect("Query failed");

        assert!(rows.is_empty());
    }

    #[test]
    fn test_bad_sql_is_query_error() {
        let (mut session, _dir) = seeded_database();

        let result = session.query("SELECT nope FROM NoSuchTable", &[]);
        assert!(matches!(result, Err(Error::Query(_))));

        // The session stays usable after a rejected query
        let rows = session.query("SELECT SSN FROM Patient", &[]).expect("Query failed");
        assert!(!rows.is_empty());
    }

    #[test]
    fn test_execute_returns_affected_count() {
        let (mut session, _dir) = seeded_database();

        let affected = session
            .execute(
                "UPDATE Admission SET totalPayment = ?1 WHERE admissionNumber = ?2",
                &[Value::Decimal(10.0), Value::Integer(1)],
            )
            .expect("Update failed");
        assert_eq!(affected, 1);

        let affected = session
            .execute(
                "UPDATE Admission SET totalPayment = ?1 WHERE admissionNumber = ?2",
                &[Value::Decimal(10.0), Value::Integer(999)],
            )
            .expect("Update failed");
        assert_eq!(affected, 0);
    }

    #[test]
    fn test_bad_statement_is_statement_error() {
        let (mut session, _dir) = seeded_database();

        let result = session.execute("UPDATE NoSuchTable SET x = 1", &[]);
        assert!(matches!(result, Err(Error::Statement(_))));
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut session, _dir) = seeded_database();

        session.close();
        session.close();
        assert!(!session.is_open());

        let result = session.query("SELECT 1", &[]);
        assert!(matches!(result, Err(Error::SessionClosed)));
    }
}
