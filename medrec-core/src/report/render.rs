//! Declarative render rules for report rows.
//!
//! Each report lists its fields in print order along with the text to print
//! when the backend returns NULL for that column.

use std::io::{self, Write};

use crate::db::{ResultRow, Value};

/// How a non-null value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Plain,
    /// Numeric, always shown with a fractional part (`1500.5`, `200.0`).
    Decimal,
}

/// One printed `Label: value` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub label: &'static str,
    pub column: &'static str,
    pub when_null: &'static str,
    pub format: FieldFormat,
}

impl FieldRule {
    const fn plain(label: &'static str, column: &'static str, when_null: &'static str) -> Self {
        Self {
            label,
            column,
            when_null,
            format: FieldFormat::Plain,
        }
    }

    const fn decimal(label: &'static str, column: &'static str, when_null: &'static str) -> Self {
        Self {
            label,
            column,
            when_null,
            format: FieldFormat::Decimal,
        }
    }

    /// Format this field's value from a row.
    ///
    /// A column missing from the row renders the same as NULL.
    pub fn value(&self, row: &ResultRow) -> String {
        match row.get(self.column) {
            None | Some(Value::Null) => self.when_null.to_string(),
            Some(value) => match self.format {
                FieldFormat::Plain => value.to_string(),
                FieldFormat::Decimal => match value.as_f64() {
                    Some(amount) => format_decimal(amount),
                    None => value.to_string(),
                },
            },
        }
    }

    pub fn line(&self, row: &ResultRow) -> String {
        format!("{}: {}", self.label, self.value(row))
    }
}

fn format_decimal(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}

pub const PATIENT_FIELDS: &[FieldRule] = &[
    FieldRule::plain("Patient SSN", "SSN", ""),
    FieldRule::plain("Patient First Name", "givenName", ""),
    FieldRule::plain("Patient Last Name", "surname", ""),
    FieldRule::plain("Patient Address", "address", "unknown"),
];

pub const DOCTOR_FIELDS: &[FieldRule] = &[
    FieldRule::plain("Doctor ID", "ID", ""),
    FieldRule::plain("Doctor First Name", "givenName", ""),
    FieldRule::plain("Doctor Last Name", "surname", ""),
    FieldRule::plain("Doctor Gender", "gender", "-"),
];

pub const ADMISSION_FIELDS: &[FieldRule] = &[
    FieldRule::plain("Admission Number", "admissionNumber", ""),
    FieldRule::plain("Patient SSN", "SSN", ""),
    FieldRule::plain("Admission date", "startDate", ""),
    FieldRule::decimal("Total Payment", "totalPayment", "0.0"),
];

pub const ROOM_FIELDS: &[FieldRule] = &[
    FieldRule::plain("RoomNum", "roomNumber", ""),
    FieldRule::plain("FromDate", "startDate", ""),
    FieldRule::plain("ToDate", "endDate", "[current room]"),
];

pub const EXAMINER_FIELDS: &[FieldRule] = &[FieldRule::plain("Doctor ID", "doctorID", "")];

/// Write one line per rule for a row.
pub fn write_row<W: Write>(output: &mut W, rules: &[FieldRule], row: &ResultRow) -> io::Result<()> {
    for rule in rules {
        writeln!(output, "{}", rule.line(row))?;
    }
    Ok(())
}
