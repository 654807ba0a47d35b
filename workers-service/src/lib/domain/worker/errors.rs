use std::fmt;

use thiserror::Error;

/// Error for WorkerId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkerIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Worker field that a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerField {
    Id,
    LastName,
    Name,
    BirthDate,
    Phone,
    Email,
}

impl WorkerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerField::Id => "Id",
            WorkerField::LastName => "LastName",
            WorkerField::Name => "Name",
            WorkerField::BirthDate => "BirthDate",
            WorkerField::Phone => "Phone",
            WorkerField::Email => "Email",
        }
    }
}

impl fmt::Display for WorkerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single broken validation rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("{0} cannot be empty.")]
    Empty(WorkerField),

    #[error("{0} cannot be null, empty, or whitespace.")]
    Blank(WorkerField),

    #[error("{0} cannot be in the future.")]
    InFuture(WorkerField),

    #[error("{0} is not a valid phone format.")]
    InvalidPhone(WorkerField),

    #[error("{0} is not a valid email format.")]
    InvalidEmail(WorkerField),
}

impl Violation {
    pub fn field(&self) -> WorkerField {
        match self {
            Violation::Empty(field)
            | Violation::Blank(field)
            | Violation::InFuture(field)
            | Violation::InvalidPhone(field)
            | Violation::InvalidEmail(field) => *field,
        }
    }
}

/// Every violation found for one worker, rendered one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation failed:")?;
        for violation in &self.0 {
            write!(f, "\n{}", violation)?;
        }
        Ok(())
    }
}

/// Top-level error for all worker-related operations
#[derive(Debug, Clone, Error)]
pub enum WorkerError {
    #[error("Invalid worker ID: {0}")]
    InvalidWorkerId(#[from] WorkerIdError),

    #[error("{0}")]
    ValidationFailed(Violations),

    #[error("Worker with Id: {0} not found.")]
    NotFound(String),

    #[error("Worker with id: {0} already exists.")]
    AlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
