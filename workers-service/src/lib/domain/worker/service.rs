use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::worker::models::CreateWorkerCommand;
use crate::domain::worker::models::Worker;
use crate::domain::worker::models::WorkerId;
use crate::worker::errors::WorkerError;
use crate::worker::ports::WorkerRepository;
use crate::worker::ports::WorkerServicePort;
use crate::worker::validation;

/// Domain service implementation for worker operations.
pub struct WorkerService<WR>
where
    WR: WorkerRepository,
{
    repository: Arc<WR>,
}

impl<WR> WorkerService<WR>
where
    WR: WorkerRepository,
{
    /// Create a new worker service.
    ///
    /// # Arguments
    /// * `repository` - Worker persistence implementation
    pub fn new(repository: Arc<WR>) -> Self {
        Self { repository }
    }

    fn validate(worker: &Worker) -> Result<(), WorkerError> {
        validation::ensure_valid(worker).map_err(|violations| {
            tracing::warn!(
                worker_id = %worker.id,
                violations = violations.0.len(),
                "Worker validation failed"
            );
            WorkerError::ValidationFailed(violations)
        })
    }
}

#[async_trait]
impl<WR> WorkerServicePort for WorkerService<WR>
where
    WR: WorkerRepository,
{
    async fn read_all(&self) -> Result<Vec<Worker>, WorkerError> {
        self.repository.list_all().await
    }

    async fn read_by_id(&self, id: &WorkerId) -> Result<Worker, WorkerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(WorkerError::NotFound(id.to_string()))
    }

    async fn create(&self, command: CreateWorkerCommand) -> Result<WorkerId, WorkerError> {
        let worker = command.into_worker(WorkerId::new());

        Self::validate(&worker)?;

        let created = self.repository.create(worker).await?;
        tracing::info!(worker_id = %created.id, "Worker created");

        Ok(created.id)
    }

    async fn update(&self, worker: Worker) -> Result<(), WorkerError> {
        Self::validate(&worker)?;

        let updated = self.repository.update(worker).await?;
        tracing::info!(worker_id = %updated.id, "Worker updated");

        Ok(())
    }

    async fn delete(&self, id: &WorkerId) -> Result<(), WorkerError> {
        self.repository.delete(id).await?;
        tracing::info!(worker_id = %id, "Worker deleted");

        Ok(())
    }
}
