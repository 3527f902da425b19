//! Typed console prompts.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::db::Value;
use crate::error::{Error, Result};

/// The kind of value a prompt accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Decimal,
}

impl ValueKind {
    /// Parse operator input, returning `None` when it is not a legal value of this kind.
    ///
    /// Text is taken exactly as typed, minus the line terminator. Numbers
    /// ignore surrounding whitespace. An empty value is never legal.
    pub fn parse(self, input: &str) -> Option<Value> {
        let line = input.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return None;
        }

        match self {
            ValueKind::Text => Some(Value::Text(line.to_string())),
            ValueKind::Integer => line.trim().parse::<i64>().ok().map(Value::Integer),
            ValueKind::Decimal => line
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite())
                .map(Value::Decimal),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "Text",
            ValueKind::Integer => "Integer",
            ValueKind::Decimal => "Decimal",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prompt line paired with the kind of value it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSpec {
    pub text: &'static str,
    pub kind: ValueKind,
}

impl PromptSpec {
    pub const fn new(text: &'static str, kind: ValueKind) -> Self {
        Self { text, kind }
    }
}

pub const PATIENT_SSN: PromptSpec = PromptSpec::new("Enter Patient SSN", ValueKind::Text);
pub const DOCTOR_ID: PromptSpec = PromptSpec::new("Enter Doctor ID", ValueKind::Integer);
pub const ADMISSION_NUMBER: PromptSpec = PromptSpec::new("Enter Admission Number", ValueKind::Integer);
pub const NEW_TOTAL_PAYMENT: PromptSpec = PromptSpec::new("Enter the new total payment", ValueKind::Decimal);

/// Prompt until the operator enters a legal value.
///
/// There is no retry limit. End of input is the only way out without a value
/// and yields [`Error::InputClosed`].
pub fn prompt<R, W>(input: &mut R, output: &mut W, spec: &PromptSpec) -> Result<Value>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{}: ", spec.text)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        if let Some(value) = spec.kind.parse(&line) {
            return Ok(value);
        }

        debug!(prompt = spec.text, kind = %spec.kind, "Rejected operator input");
        writeln!(output, "Please enter a legal value of type: {}", spec.kind)?;
    }
}
