use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::worker::models::CreateWorkerCommand;
use crate::domain::worker::models::WorkerId;
use crate::inbound::http::router::AppState;

pub async fn create_worker(
    State(state): State<AppState>,
    body: Result<Json<CreateWorkerRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;

    let worker_id = state
        .worker_service
        .create(body.worker.into())
        .await
        .map_err(ApiError::from)?;

    let location = format!("/api/v1/workers/{}", worker_id);
    let created = ApiSuccess::new(StatusCode::CREATED, CreateWorkerResponseData::from(worker_id));

    Ok(([(header::LOCATION, location)], created).into_response())
}

/// HTTP request body for creating a worker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateWorkerRequest {
    worker: NewWorkerData,
}

/// Missing text fields deserialize as empty and are reported by validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkerData {
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

impl From<NewWorkerData> for CreateWorkerCommand {
    fn from(data: NewWorkerData) -> Self {
        Self {
            last_name: data.last_name,
            name: data.name,
            birth_date: data.birth_date,
            phone: data.phone,
            email: data.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerResponseData {
    pub worker_id: String,
}

impl From<WorkerId> for CreateWorkerResponseData {
    fn from(id: WorkerId) -> Self {
        Self {
            worker_id: id.to_string(),
        }
    }
}
