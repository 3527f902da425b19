//! Report dispatch.
//!
//! [`ReportEngine`] turns a [`ReportSelector`] into prompts, bound queries
//! against a borrowed [`Session`], and line-oriented console output.
//!
//! Backend failures and closed input never escape [`ReportEngine::execute`];
//! they are printed for the operator and the report stops where it failed.

pub mod prompt;
pub mod query;
pub mod render;

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, error, info, warn};

use crate::db::{ResultRow, Session, Value};
use crate::error::Result;
use prompt::{PromptSpec, ADMISSION_NUMBER, DOCTOR_ID, NEW_TOTAL_PAYMENT, PATIENT_SSN};
use query::QueryTemplate;
use render::{FieldRule, ADMISSION_FIELDS, DOCTOR_FIELDS, EXAMINER_FIELDS, PATIENT_FIELDS, ROOM_FIELDS};

pub const EMPTY_RESULT: &str = "Result was empty";
pub const EMPTY_ADMISSION: &str = "Result was empty!";
pub const NO_ROOMS: &str = "No rooms recorded!";
pub const NO_DOCTORS: &str = "No Doctors recorded!";
pub const ROOMS_HEADER: &str = "Rooms:";
pub const DOCTORS_HEADER: &str = "Doctors who examined this patient during this admission:";
pub const ADMISSION_MISSING: &str = "That admission does not exist.";
pub const PAYMENT_UPDATED: &str = "Payment updated!";

// ─────────────────────────────────────────────────────────────────────────────
// Selectors
// ─────────────────────────────────────────────────────────────────────────────

/// The canned reports an operator can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSelector {
    PatientLookup,
    DoctorLookup,
    AdmissionDetail,
    UpdatePayment,
}

impl ReportSelector {
    pub const ALL: [ReportSelector; 4] = [
        ReportSelector::PatientLookup,
        ReportSelector::DoctorLookup,
        ReportSelector::AdmissionDetail,
        ReportSelector::UpdatePayment,
    ];

    /// Map a menu code (1-4) to a report.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ReportSelector::PatientLookup),
            2 => Some(ReportSelector::DoctorLookup),
            3 => Some(ReportSelector::AdmissionDetail),
            4 => Some(ReportSelector::UpdatePayment),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ReportSelector::PatientLookup => 1,
            ReportSelector::DoctorLookup => 2,
            ReportSelector::AdmissionDetail => 3,
            ReportSelector::UpdatePayment => 4,
        }
    }

    /// Menu description.
    pub fn description(self) -> &'static str {
        match self {
            ReportSelector::PatientLookup => "Report Patient's Basic Information",
            ReportSelector::DoctorLookup => "Report Doctor's Basic Information",
            ReportSelector::AdmissionDetail => "Report Admissions Information",
            ReportSelector::UpdatePayment => "Update Admissions Payment",
        }
    }
}

impl fmt::Display for ReportSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportSelector::PatientLookup => "patient-lookup",
            ReportSelector::DoctorLookup => "doctor-lookup",
            ReportSelector::AdmissionDetail => "admission-detail",
            ReportSelector::UpdatePayment => "update-payment",
        };
        f.write_str(name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// Runs reports against a borrowed session.
///
/// The engine keeps no state between calls; the report to run is passed to
/// each [`execute`](Self::execute).
pub struct ReportEngine<'a, S: Session, R: BufRead, W: Write> {
    session: &'a mut S,
    input: R,
    output: W,
}

impl<'a, S: Session, R: BufRead, W: Write> ReportEngine<'a, S, R, W> {
    pub fn new(session: &'a mut S, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Run one report to completion or to its first failure.
    pub fn execute(&mut self, selector: ReportSelector) {
        info!(report = %selector, "Running report");

        let result = match selector {
            ReportSelector::PatientLookup => self.lookup(&PATIENT_SSN, query::patient_by_ssn, PATIENT_FIELDS),
            ReportSelector::DoctorLookup => self.lookup(&DOCTOR_ID, query::doctor_by_id, DOCTOR_FIELDS),
            ReportSelector::AdmissionDetail => self.admission_detail(),
            ReportSelector::UpdatePayment => self.update_payment(),
        };

        if let Err(e) = result {
            error!(report = %selector, error = %e, "Report aborted");
            let _ = writeln!(self.output, "{}", e);
        }
        let _ = self.output.flush();
    }

    /// Run the report for a menu code. Unknown codes do nothing.
    pub fn execute_code(&mut self, code: u8) {
        match ReportSelector::from_code(code) {
            Some(selector) => self.execute(selector),
            None => debug!(code, "No report for code"),
        }
    }

    /// Single-query lookup reports (patient, doctor).
    fn lookup(
        &mut self,
        spec: &PromptSpec,
        build: fn(Value) -> QueryTemplate,
        fields: &[FieldRule],
    ) -> Result<()> {
        let key = self.prompt(spec)?;
        let rows = self.query(&build(key))?;

        if rows.is_empty() {
            writeln!(self.output, "{}", EMPTY_RESULT)?;
            return Ok(());
        }

        self.write_rows(fields, &rows)
    }

    fn admission_detail(&mut self) -> Result<()> {
        let admission = self.prompt(&ADMISSION_NUMBER)?;

        let summary = self.query(&query::admission_summary(admission.clone()))?;
        if summary.is_empty() {
            writeln!(self.output, "{}", EMPTY_ADMISSION)?;
            return Ok(());
        }
        self.write_rows(ADMISSION_FIELDS, &summary)?;

        writeln!(self.output, "{}", ROOMS_HEADER)?;
        let rooms = self.query(&query::admission_rooms(admission.clone()))?;
        if rooms.is_empty() {
            writeln!(self.output, "{}", NO_ROOMS)?;
        } else {
            self.write_rows(ROOM_FIELDS, &rooms)?;
        }

        writeln!(self.output, "{}", DOCTORS_HEADER)?;
        let doctors = self.query(&query::admission_doctors(admission))?;
        if doctors.is_empty() {
            writeln!(self.output, "{}", NO_DOCTORS)?;
        } else {
            self.write_rows(EXAMINER_FIELDS, &doctors)?;
        }

        Ok(())
    }

    /// Check that the admission exists, then set its total payment.
    ///
    /// The check and the update are separate statements; an admission removed
    /// in between shows up as a zero-row update.
    fn update_payment(&mut self) -> Result<()> {
        let admission = self.prompt(&ADMISSION_NUMBER)?;

        let existing = self.query(&query::admission_exists(admission.clone()))?;
        if existing.is_empty() {
            writeln!(self.output, "{}", ADMISSION_MISSING)?;
            return Ok(());
        }

        let payment = self.prompt(&NEW_TOTAL_PAYMENT)?;
        let update = query::update_payment(admission.clone(), payment);
        let affected = self.session.execute(update.sql, &update.params)?;

        if affected == 0 {
            warn!(admission = %admission, "Admission disappeared before the payment update");
            writeln!(
                self.output,
                "No rows were updated: admission {} no longer exists.",
                admission
            )?;
        } else {
            writeln!(self.output, "{}", PAYMENT_UPDATED)?;
            writeln!(self.output, "Rows affected: {}", affected)?;
        }

        Ok(())
    }

    fn prompt(&mut self, spec: &PromptSpec) -> Result<Value> {
        prompt::prompt(&mut self.input, &mut self.output, spec)
    }

    fn query(&mut self, template: &QueryTemplate) -> Result<Vec<ResultRow>> {
        let rows = self.session.query(template.sql, &template.params)?;
        if rows.is_empty() {
            debug!(sql = template.sql, "Empty result");
        }
        Ok(rows)
    }

    fn write_rows(&mut self, fields: &[FieldRule], rows: &[ResultRow]) -> Result<()> {
        for row in rows {
            render::write_row(&mut self.output, fields, row)?;
        }
        Ok(())
    }
}
