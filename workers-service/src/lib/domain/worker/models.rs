use std::fmt;

use chrono::DateTime;
use chrono::FixedOffset;
use uuid::Uuid;

use crate::worker::errors::WorkerIdError;

/// Worker record.
///
/// Plain value: carries no behaviour. Rules live in [`crate::worker::validation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    pub id: WorkerId,
    pub last_name: String,
    pub name: String,
    pub birth_date: DateTime<FixedOffset>,
    pub phone: String,
    pub email: Option<String>,
}

/// Worker unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerId(pub Uuid);

impl WorkerId {
    /// Generate a new random worker ID.
    ///
    /// # Returns
    /// WorkerId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil identifier, never valid for a persisted worker.
    pub fn empty() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }

    /// Parse a worker ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, WorkerIdError> {
        Uuid::parse_str(s)
            .map(WorkerId)
            .map_err(|e| WorkerIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for WorkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new worker. The identifier is assigned by the service.
#[derive(Debug, Clone)]
pub struct CreateWorkerCommand {
    pub last_name: String,
    pub name: String,
    pub birth_date: DateTime<FixedOffset>,
    pub phone: String,
    pub email: Option<String>,
}

impl CreateWorkerCommand {
    /// Build the worker this command describes under the given identifier.
    pub fn into_worker(self, id: WorkerId) -> Worker {
        Worker {
            id,
            last_name: self.last_name,
            name: self.name,
            birth_date: self.birth_date,
            phone: self.phone,
            email: self.email,
        }
    }
}
