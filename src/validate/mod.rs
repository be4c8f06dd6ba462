//! Request payload validation.
//!
//! Content rules only. The store assumes these have already run and never
//! re-checks field content itself; identity and existence stay the store's
//! concern. Messages are surfaced to clients verbatim on 400 responses.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::registry::types::{
    ClassPatch, DepartmentPatch, EntityKind, ProfessorPatch, StudentPatch,
};

/// Result type for validation.
pub type ValidationResult = Result<(), ValidationError>;

/// Payload content failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} name is required")]
    MissingName(EntityKind),

    #[error("Class term is required")]
    MissingTerm,

    #[error("Invalid birth date format. Use YYYY-MM-DD")]
    InvalidBirthDate,

    #[error("Invalid hire date format. Use YYYY-MM-DD")]
    InvalidHireDate,

    #[error("Invalid phone number format")]
    InvalidPhone,
}

/// Validate a student payload (create or update).
pub fn validate_student(patch: &StudentPatch) -> ValidationResult {
    require_name(patch.name.as_deref(), EntityKind::Student)?;
    if let Some(birth_date) = present(patch.birth_date.as_deref()) {
        if !is_valid_date(birth_date) {
            return Err(ValidationError::InvalidBirthDate);
        }
    }
    if let Some(phone) = present(patch.phone.as_deref()) {
        if !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }
    }
    Ok(())
}

/// Validate a class payload (create or update).
pub fn validate_class(patch: &ClassPatch) -> ValidationResult {
    require_name(patch.name.as_deref(), EntityKind::Class)?;
    if present(patch.term.as_deref()).is_none() {
        return Err(ValidationError::MissingTerm);
    }
    Ok(())
}

/// Validate a professor payload (create or update).
pub fn validate_professor(patch: &ProfessorPatch) -> ValidationResult {
    require_name(patch.name.as_deref(), EntityKind::Professor)?;
    if let Some(hire_date) = present(patch.hire_date.as_deref()) {
        if !is_valid_date(hire_date) {
            return Err(ValidationError::InvalidHireDate);
        }
    }
    if let Some(phone) = present(patch.phone.as_deref()) {
        if !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }
    }
    Ok(())
}

/// Validate a department payload (create or update).
pub fn validate_department(patch: &DepartmentPatch) -> ValidationResult {
    require_name(patch.name.as_deref(), EntityKind::Department)
}

fn require_name(name: Option<&str>, kind: EntityKind) -> ValidationResult {
    match present(name) {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingName(kind)),
    }
}

/// Absent and empty are treated alike: optional fields are only checked
/// when they carry content.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// `YYYY-MM-DD`, zero-padded, and a real calendar date.
fn is_valid_date(date: &str) -> bool {
    if !date_pattern().is_match(date) {
        return false;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Optional leading `+`, then at least ten digits, spaces or dashes.
fn is_valid_phone(phone: &str) -> bool {
    phone_pattern().is_match(phone)
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[\d\s-]{10,}$").expect("phone pattern compiles"))
}
