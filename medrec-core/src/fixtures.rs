//! Shared test fixtures: a seeded hospital database and a scripted session.

use std::collections::VecDeque;

use rusqlite::Connection;
use tempfile::TempDir;

use crate::account::Account;
use crate::db::{ResultRow, Session, SqliteSession, Value};
use crate::error::{Error, Result};

pub const SCHEMA: &str = "
CREATE TABLE Patient (
    SSN TEXT PRIMARY KEY,
    givenName TEXT,
    surname TEXT,
    address TEXT
);
CREATE TABLE Doctor (
    ID INTEGER PRIMARY KEY,
    givenName TEXT,
    surname TEXT,
    gender TEXT
);
CREATE TABLE Admission (
    admissionNumber INTEGER PRIMARY KEY,
    patientSSN TEXT,
    startDate TEXT,
    totalPayment REAL
);
CREATE TABLE StayIn (
    admissionNumber INTEGER,
    roomNumber INTEGER,
    startDate TEXT,
    endDate TEXT
);
CREATE TABLE Examine (
    doctorID INTEGER,
    admissionNumber INTEGER,
    comment TEXT
);
";

const SEED: &str = "
INSERT INTO Patient VALUES ('111-11-1111', 'Grace', 'Hopper', '12 Harbor Rd');
INSERT INTO Patient VALUES ('222-22-2222', 'Alan', NULL, NULL);

INSERT INTO Doctor VALUES (1, 'Meredith', 'Grey', 'F');
INSERT INTO Doctor VALUES (2, NULL, NULL, NULL);

INSERT INTO Admission VALUES (1, '111-11-1111', '2024-01-05', 1500.5);
INSERT INTO Admission VALUES (2, '222-22-2222', '2024-02-10', 0);
INSERT INTO Admission VALUES (3, NULL, '2024-03-01', 200);

INSERT INTO StayIn VALUES (1, 101, '2024-01-05 08:00', '2024-01-07 10:00');
INSERT INTO StayIn VALUES (1, 205, '2024-01-07 10:00', NULL);
INSERT INTO StayIn VALUES (3, 310, '2024-03-01 09:30', '2024-03-02 12:00');

INSERT INTO Examine VALUES (1, 1, 'intake');
INSERT INTO Examine VALUES (1, 1, 'follow-up');
INSERT INTO Examine VALUES (2, 1, 'consult');
";

/// Create a seeded hospital database on disk and connect to it.
pub fn seeded_database() -> (SqliteSession, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("hospital.db");

    let conn = Connection::open(&db_path).expect("Failed to create database");
    conn.execute_batch(SCHEMA).expect("Failed to create schema");
    conn.execute_batch(SEED).expect("Failed to seed database");
    drop(conn);

    let session = SqliteSession::connect(&db_path, &Account::new("clerk", "secret"))
        .expect("Failed to connect");
    (session, dir)
}

/// A session that replays canned results and records what was issued.
#[derive(Default)]
pub struct ScriptedSession {
    query_results: VecDeque<Result<Vec<ResultRow>>>,
    execute_results: VecDeque<Result<usize>>,
    pub queries: Vec<(String, Vec<Value>)>,
    pub statements: Vec<(String, Vec<Value>)>,
    pub close_calls: usize,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the rows for the next query.
    pub fn returns(mut self, rows: Vec<ResultRow>) -> Self {
        self.query_results.push_back(Ok(rows));
        self
    }

    /// Queue a backend rejection for the next query.
    pub fn fails(mut self, message: &str) -> Self {
        self.query_results.push_back(Err(Error::Query(message.to_string())));
        self
    }

    /// Queue the affected count for the next statement.
    pub fn affects(mut self, count: usize) -> Self {
        self.execute_results.push_back(Ok(count));
        self
    }

    /// Queue a backend rejection for the next statement.
    pub fn rejects(mut self, message: &str) -> Self {
        self.execute_results.push_back(Err(Error::Statement(message.to_string())));
        self
    }
}

impl Session for ScriptedSession {
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<ResultRow>> {
        self.queries.push((sql.to_string(), params.to_vec()));
        self.query_results.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize> {
        self.statements.push((sql.to_string(), params.to_vec()));
        self.execute_results.pop_front().unwrap_or(Ok(0))
    }

    fn close(&mut self) {
        self.close_calls += 1;
    }
}
