use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::list_workers::WorkerData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::worker::models::WorkerId;
use crate::inbound::http::router::AppState;

pub async fn get_worker(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
) -> Result<ApiSuccess<GetWorkerResponseData>, ApiError> {
    // a segment that is not a UUID names no worker route
    let worker_id =
        WorkerId::from_string(&worker_id).map_err(|e| ApiError::NotFound(e.to_string()))?;

    state
        .worker_service
        .read_by_id(&worker_id)
        .await
        .map_err(ApiError::from)
        .map(|ref worker| {
            ApiSuccess::new(
                StatusCode::OK,
                GetWorkerResponseData {
                    worker: worker.into(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetWorkerResponseData {
    pub worker: WorkerData,
}
