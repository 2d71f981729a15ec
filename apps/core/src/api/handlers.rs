//! Request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::{info_span, warn};
use uuid::Uuid;

use super::dto::{ApiResponse, ClassifyRequest, HealthResponse};
use crate::classifier::{ClassificationResult, TaskClassifier};
use crate::error::AppError;

pub const DESCRIPTION_REQUIRED: &str = "Description is required";

/// Shared handler state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub classifier: Arc<TaskClassifier>,
}

impl AppState {
    pub fn new(classifier: TaskClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Previews the enrichment of a description without creating a task.
pub async fn classify_description(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ClassificationResult>>, AppError> {
    let request_id = Uuid::new_v4();

    info_span!("classify", %request_id).in_scope(|| {
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                warn!(%rejection, "Unreadable classify body");
                ClassifyRequest::default()
            }
        };

        let Some(description) = request.description() else {
            warn!("Rejected classify request without description");
            return Err(AppError::Validation(DESCRIPTION_REQUIRED.to_string()));
        };

        let result = state.classifier.classify(description);
        Ok(Json(ApiResponse::ok(result)))
    })
}
