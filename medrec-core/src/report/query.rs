//! Query templates for each report.
//!
//! Operator values are always bound as parameters, never spliced into SQL text.

use crate::db::Value;

/// SQL text plus the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryTemplate {
    pub sql: &'static str,
    pub params: Vec<Value>,
}

impl QueryTemplate {
    fn new(sql: &'static str, params: Vec<Value>) -> Self {
        Self { sql, params }
    }
}

const PATIENT_BY_SSN: &str = "SELECT SSN, givenName, surname, address
     FROM Patient
     WHERE SSN = ?1";

const DOCTOR_BY_ID: &str = "SELECT ID, givenName, surname, gender
     FROM Doctor
     WHERE ID = ?1";

const ADMISSION_SUMMARY: &str = "SELECT A.admissionNumber AS admissionNumber,
            P.SSN AS SSN,
            A.startDate AS startDate,
            A.totalPayment AS totalPayment
     FROM Admission A
     LEFT JOIN Patient P ON A.patientSSN = P.SSN
     WHERE A.admissionNumber = ?1";

const ADMISSION_ROOMS: &str = "SELECT roomNumber, startDate, endDate
     FROM StayIn
     WHERE admissionNumber = ?1";

const ADMISSION_DOCTORS: &str = "SELECT DISTINCT E.doctorID AS doctorID
     FROM Examine E
     JOIN Admission A ON E.admissionNumber = A.admissionNumber
     WHERE A.admissionNumber = ?1";

const ADMISSION_EXISTS: &str = "SELECT admissionNumber
     FROM Admission
     WHERE admissionNumber = ?1";

const UPDATE_PAYMENT: &str = "UPDATE Admission
     SET totalPayment = ?1
     WHERE admissionNumber = ?2";

pub fn patient_by_ssn(ssn: Value) -> QueryTemplate {
    QueryTemplate::new(PATIENT_BY_SSN, vec![ssn])
}

pub fn doctor_by_id(id: Value) -> QueryTemplate {
    QueryTemplate::new(DOCTOR_BY_ID, vec![id])
}

/// Admission joined to its patient.
pub fn admission_summary(admission: Value) -> QueryTemplate {
    QueryTemplate::new(ADMISSION_SUMMARY, vec![admission])
}

/// Room stays recorded for an admission.
pub fn admission_rooms(admission: Value) -> QueryTemplate {
    QueryTemplate::new(ADMISSION_ROOMS, vec![admission])
}

/// Distinct doctors who examined the patient during an admission.
pub fn admission_doctors(admission: Value) -> QueryTemplate {
    QueryTemplate::new(ADMISSION_DOCTORS, vec![admission])
}

pub fn admission_exists(admission: Value) -> QueryTemplate {
    QueryTemplate::new(ADMISSION_EXISTS, vec![admission])
}

pub fn update_payment(admission: Value, total_payment: Value) -> QueryTemplate {
    QueryTemplate::new(UPDATE_PAYMENT, vec![total_payment, admission])
}
