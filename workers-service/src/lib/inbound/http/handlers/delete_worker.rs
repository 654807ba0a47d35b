use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::worker::models::WorkerId;
use crate::inbound::http::router::AppState;
use crate::worker::errors::WorkerError;

/// Deleting an unknown worker answers 400, unlike the read and update endpoints.
pub async fn delete_worker(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    // a segment that is not a UUID names no worker route
    let worker_id =
        WorkerId::from_string(&worker_id).map_err(|e| ApiError::NotFound(e.to_string()))?;

    state
        .worker_service
        .delete(&worker_id)
        .await
        .map_err(|e| match e {
            WorkerError::NotFound(_) => ApiError::BadRequest(e.to_string()),
            e => ApiError::from(e),
        })
        .map(|_| StatusCode::NO_CONTENT)
}
