use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_worker::create_worker;
use super::handlers::delete_worker::delete_worker;
use super::handlers::get_worker::get_worker;
use super::handlers::list_workers::list_workers;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_worker::update_worker;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::AuthenticationServicePort;
use crate::domain::worker::ports::WorkerServicePort;

#[derive(Clone)]
pub struct AppState {
    pub worker_service: Arc<dyn WorkerServicePort>,
    pub authentication_service: Arc<dyn AuthenticationServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub require_authentication: bool,
}

pub fn create_router(
    worker_service: Arc<dyn WorkerServicePort>,
    authentication_service: Arc<dyn AuthenticationServicePort>,
    authenticator: Arc<Authenticator>,
    require_authentication: bool,
) -> Router {
    let state = AppState {
        worker_service,
        authentication_service,
        authenticator,
        require_authentication,
    };

    let authentication_routes = Router::new()
        .route("/api/v1/authentications/register", post(register))
        .route("/api/v1/authentications/login", post(login));

    let worker_routes = Router::new()
        .route(
            "/api/v1/workers",
            get(list_workers).post(create_worker).put(update_worker),
        )
        .route(
            "/api/v1/workers/:worker_id",
            get(get_worker).delete(delete_worker),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(authentication_routes)
        .merge(worker_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
