//! Worker field validation.
//!
//! Every rule is evaluated; the caller receives the full list of violations.

use chrono::DateTime;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::worker::errors::Violation;
use crate::worker::errors::Violations;
use crate::worker::errors::WorkerField;
use crate::worker::models::Worker;

// Exactly twelve digits, e.g. 380672052196
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{12}$").unwrap());

// local@domain.tld with an optional second tld segment
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\-_.]+@[\w]+\.\w+(\.\w+)?$").unwrap());

/// Validate a worker against the current time.
pub fn validate(worker: &Worker) -> Vec<Violation> {
    validate_at(worker, Utc::now())
}

/// Validate a worker, treating `now` as the current moment.
pub fn validate_at(worker: &Worker, now: DateTime<Utc>) -> Vec<Violation> {
    let mut violations = Vec::new();

    if worker.id.is_empty() {
        violations.push(Violation::Empty(WorkerField::Id));
    }

    let required_fields = [
        (WorkerField::LastName, worker.last_name.as_str()),
        (WorkerField::Name, worker.name.as_str()),
        (WorkerField::Phone, worker.phone.as_str()),
    ];

    for (field, value) in required_fields {
        if value.trim().is_empty() {
            violations.push(Violation::Blank(field));
        }
    }

    if worker.birth_date > now {
        violations.push(Violation::InFuture(WorkerField::BirthDate));
    }

    if !is_valid_phone(&worker.phone) {
        violations.push(Violation::InvalidPhone(WorkerField::Phone));
    }

    if let Some(email) = &worker.email {
        if !is_valid_email(email) {
            violations.push(Violation::InvalidEmail(WorkerField::Email));
        }
    }

    violations
}

/// Validate a worker, folding any violations into a single error value.
pub fn ensure_valid(worker: &Worker) -> Result<(), Violations> {
    let violations = validate(worker);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Violations(violations))
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
