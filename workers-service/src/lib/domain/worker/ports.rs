use async_trait::async_trait;

use crate::domain::worker::models::CreateWorkerCommand;
use crate::domain::worker::models::Worker;
use crate::domain::worker::models::WorkerId;
use crate::worker::errors::WorkerError;

/// Port for worker domain service operations.
#[async_trait]
pub trait WorkerServicePort: Send + Sync + 'static {
    /// Retrieve every worker.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn read_all(&self) -> Result<Vec<Worker>, WorkerError>;

    /// Retrieve worker by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Worker does not exist
    /// * `DatabaseError` - Database operation failed
    async fn read_by_id(&self, id: &WorkerId) -> Result<Worker, WorkerError>;

    /// Create a new worker under a freshly generated identifier.
    ///
    /// # Returns
    /// Identifier of the created worker
    ///
    /// # Errors
    /// * `ValidationFailed` - One or more fields are invalid
    /// * `AlreadyExists` - Identifier collides with an existing worker
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateWorkerCommand) -> Result<WorkerId, WorkerError>;

    /// Replace an existing worker's fields.
    ///
    /// # Errors
    /// * `ValidationFailed` - One or more fields are invalid
    /// * `NotFound` - Worker does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, worker: Worker) -> Result<(), WorkerError>;

    /// Delete existing worker.
    ///
    /// # Errors
    /// * `NotFound` - Worker does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &WorkerId) -> Result<(), WorkerError>;
}

/// Persistence operations for workers.
#[async_trait]
pub trait WorkerRepository: Send + Sync + 'static {
    /// Retrieve all workers from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Worker>, WorkerError>;

    /// Retrieve worker by identifier.
    ///
    /// # Returns
    /// Optional worker (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &WorkerId) -> Result<Option<Worker>, WorkerError>;

    /// Persist new worker to storage.
    ///
    /// # Errors
    /// * `AlreadyExists` - A worker with the same id is already stored
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, worker: Worker) -> Result<Worker, WorkerError>;

    /// Update existing worker in storage.
    ///
    /// # Errors
    /// * `NotFound` - Worker does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, worker: Worker) -> Result<Worker, WorkerError>;

    /// Remove worker from storage.
    ///
    /// # Errors
    /// * `NotFound` - Worker does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &WorkerId) -> Result<(), WorkerError>;
}
