use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::LoginCredentials;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<String>, ApiError> {
    let Json(body) = body?;

    state
        .authentication_service
        .login(body.login_credentials.into())
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token))
}

/// HTTP request body for login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    login_credentials: LoginCredentialsData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginCredentialsData {
    email: String,
    password: String,
}

impl From<LoginCredentialsData> for LoginCredentials {
    fn from(data: LoginCredentialsData) -> Self {
        Self {
            email: data.email,
            password: data.password,
        }
    }
}
