//! Command implementations for the medrec CLI.

pub mod check;
pub mod report;
