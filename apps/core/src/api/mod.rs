//! HTTP boundary.
//!
//! Routes:
//! - `GET /` health check
//! - `POST /api/tasks/classify` preview the enrichment of a description

pub mod dto;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use dto::{ApiResponse, ClassifyRequest, ErrorBody, ErrorDetail, HealthResponse};
pub use handlers::{classify_description, health_check, AppState};

/// Builds the application router with tracing and CORS layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/tasks/classify", post(classify_description))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
