use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use uuid::Uuid;

use super::ApiError;
use crate::domain::worker::models::Worker;
use crate::domain::worker::models::WorkerId;
use crate::inbound::http::router::AppState;

pub async fn update_worker(
    State(state): State<AppState>,
    body: Result<Json<UpdateWorkerRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body?;

    state
        .worker_service
        .update(body.worker.into())
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

/// HTTP request body for updating a worker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateWorkerRequest {
    worker: WorkerUpdateData,
}

/// A missing id deserializes as nil and is reported by validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerUpdateData {
    #[serde(default)]
    id: Uuid,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    name: String,
    birth_date: DateTime<FixedOffset>,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: Option<String>,
}

impl From<WorkerUpdateData> for Worker {
    fn from(data: WorkerUpdateData) -> Self {
        Self {
            id: WorkerId(data.id),
            last_name: data.last_name,
            name: data.name,
            birth_date: data.birth_date,
            phone: data.phone,
            email: data.email,
        }
    }
}
