use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::FixedOffset;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::worker::models::Worker;
use crate::inbound::http::router::AppState;

pub async fn list_workers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListWorkersResponseData>, ApiError> {
    state
        .worker_service
        .read_all()
        .await
        .map_err(ApiError::from)
        .map(|workers| {
            ApiSuccess::new(
                StatusCode::OK,
                ListWorkersResponseData {
                    workers: workers.iter().map(WorkerData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListWorkersResponseData {
    pub workers: Vec<WorkerData>,
}

/// Worker as returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerData {
    pub id: String,
    // read payloads have always used `lastname`
    pub lastname: String,
    pub name: String,
    pub birth_date: DateTime<FixedOffset>,
    pub phone: String,
    pub email: Option<String>,
}

impl From<&Worker> for WorkerData {
    fn from(worker: &Worker) -> Self {
        Self {
            id: worker.id.to_string(),
            lastname: worker.last_name.clone(),
            name: worker.name.clone(),
            birth_date: worker.birth_date,
            phone: worker.phone.clone(),
            email: worker.email.clone(),
        }
    }
}
