use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::RegistrationCredentials;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<String>, ApiError> {
    let Json(body) = body?;

    state
        .authentication_service
        .register(body.registration_credentials.into())
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token))
}

/// HTTP request body for registration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    registration_credentials: RegistrationCredentialsData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCredentialsData {
    user_name: String,
    email: String,
    password: String,
}

impl From<RegistrationCredentialsData> for RegistrationCredentials {
    fn from(data: RegistrationCredentialsData) -> Self {
        Self {
            username: data.user_name,
            email: data.email,
            password: data.password,
        }
    }
}
