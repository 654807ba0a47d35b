use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::worker::models::Worker;
use crate::domain::worker::models::WorkerId;
use crate::domain::worker::ports::WorkerRepository;
use crate::worker::errors::WorkerError;

pub struct PostgresWorkerRepository {
    pool: PgPool,
}

impl PostgresWorkerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct WorkerRow {
    id: Uuid,
    last_name: String,
    name: String,
    birth_date: DateTime<Utc>,
    phone: String,
    email: Option<String>,
}

impl From<WorkerRow> for Worker {
    fn from(row: WorkerRow) -> Self {
        Self {
            id: WorkerId(row.id),
            last_name: row.last_name,
            name: row.name,
            birth_date: row.birth_date.fixed_offset(),
            phone: row.phone,
            email: row.email,
        }
    }
}

fn unable_to(action: &str, id: &WorkerId, e: sqlx::Error) -> WorkerError {
    WorkerError::DatabaseError(format!("Unable to {} worker with id: {}. {}", action, id, e))
}

#[async_trait]
impl WorkerRepository for PostgresWorkerRepository {
    async fn list_all(&self) -> Result<Vec<Worker>, WorkerError> {
        let rows = sqlx::query_as::<_, WorkerRow>(
            r#"
            SELECT id, last_name, name, birth_date, phone, email
            FROM workers
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| WorkerError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Worker::from).collect())
    }

    async fn find_by_id(&self, id: &WorkerId) -> Result<Option<Worker>, WorkerError> {
        let row = sqlx::query_as::<_, WorkerRow>(
            r#"
            SELECT id, last_name, name, birth_date, phone, email
            FROM workers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| WorkerError::DatabaseError(e.to_string()))?;

        Ok(row.map(Worker::from))
    }

    async fn create(&self, worker: Worker) -> Result<Worker, WorkerError> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| unable_to("add", &worker.id, e))?;

        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM workers WHERE id = $1)"#)
                .bind(worker.id.0)
                .fetch_one(&mut *transaction)
                .await
                .map_err(|e| unable_to("add", &worker.id, e))?;

        if exists {
            let _ = transaction.rollback().await;
            return Err(WorkerError::AlreadyExists(worker.id.to_string()));
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO workers (id, last_name, name, birth_date, phone, email)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(worker.id.0)
        .bind(&worker.last_name)
        .bind(&worker.name)
        .bind(worker.birth_date.with_timezone(&Utc))
        .bind(&worker.phone)
        .bind(&worker.email)
        .execute(&mut *transaction)
        .await;

        if let Err(e) = inserted {
            let _ = transaction.rollback().await;
            tracing::error!(worker_id = %worker.id, error = %e, "Worker insert rolled back");

            let is_unique_violation = e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation());
            if is_unique_violation {
                return Err(WorkerError::AlreadyExists(worker.id.to_string()));
            }
            return Err(unable_to("add", &worker.id, e));
        }

        transaction
            .commit()
            .await
            .map_err(|e| unable_to("add", &worker.id, e))?;

        Ok(worker)
    }

    async fn update(&self, worker: Worker) -> Result<Worker, WorkerError> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| unable_to("update", &worker.id, e))?;

        let existing: Option<Uuid> =
            sqlx::query_scalar(r#"SELECT id FROM workers WHERE id = $1 FOR UPDATE"#)
                .bind(worker.id.0)
                .fetch_optional(&mut *transaction)
                .await
                .map_err(|e| unable_to("update", &worker.id, e))?;

        if existing.is_none() {
            let _ = transaction.rollback().await;
            return Err(WorkerError::NotFound(worker.id.to_string()));
        }

        let updated = sqlx::query(
            r#"
            UPDATE workers
            SET last_name = $2, name = $3, birth_date = $4, phone = $5, email = $6
            WHERE id = $1
            "#,
        )
        .bind(worker.id.0)
        .bind(&worker.last_name)
        .bind(&worker.name)
        .bind(worker.birth_date.with_timezone(&Utc))
        .bind(&worker.phone)
        .bind(&worker.email)
        .execute(&mut *transaction)
        .await;

        if let Err(e) = updated {
            let _ = transaction.rollback().await;
            tracing::error!(worker_id = %worker.id, error = %e, "Worker update rolled back");
            return Err(unable_to("update", &worker.id, e));
        }

        transaction
            .commit()
            .await
            .map_err(|e| unable_to("update", &worker.id, e))?;

        Ok(worker)
    }

    async fn delete(&self, id: &WorkerId) -> Result<(), WorkerError> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|e| unable_to("delete", id, e))?;

        let existing: Option<Uuid> =
            sqlx::query_scalar(r#"SELECT id FROM workers WHERE id = $1 FOR UPDATE"#)
                .bind(id.0)
                .fetch_optional(&mut *transaction)
                .await
                .map_err(|e| unable_to("delete", id, e))?;

        if existing.is_none() {
            let _ = transaction.rollback().await;
            return Err(WorkerError::NotFound(id.to_string()));
        }

        let deleted = sqlx::query(r#"DELETE FROM workers WHERE id = $1"#)
            .bind(id.0)
            .execute(&mut *transaction)
            .await;

        if let Err(e) = deleted {
            let _ = transaction.rollback().await;
            tracing::error!(worker_id = %id, error = %e, "Worker delete rolled back");
            return Err(unable_to("delete", id, e));
        }

        transaction
            .commit()
            .await
            .map_err(|e| unable_to("delete", id, e))?;

        Ok(())
    }
}
