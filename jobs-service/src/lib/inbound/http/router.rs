use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
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

use super::handlers::create_job::create_job;
use super::handlers::health::health_check;
use super::handlers::list_jobs::list_jobs;
use super::middleware::authorize;
use crate::domain::job::ports::JobServicePort;

#[derive(Clone)]
pub struct AppState {
    pub job_service: Arc<dyn JobServicePort>,
    pub token_codec: Arc<dyn TokenCodec>,
}

pub fn create_router(
    job_service: Arc<dyn JobServicePort>,
    token_codec: Arc<dyn TokenCodec>,
) -> Router {
    let state = AppState {
        job_service,
        token_codec,
    };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/jobs", get(list_jobs));

    let protected_routes = Router::new()
        .route("/jobs", post(create_job))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    // Headers are left out of the span: they carry bearer tokens.
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
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
