//! Request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/tasks/classify`.
///
/// `description` is kept as raw JSON so that a missing field, `null` and a
/// non-string value all surface as the same validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub description: Option<Value>,
}

impl ClassifyRequest {
    /// The description, if it is a string that is not blank after trimming.
    pub fn description(&self) -> Option<&str> {
        match &self.description {
            Some(Value::String(text)) if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// Failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
}

impl ErrorBody {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: "Validation error".to_string(),
            errors: Some(vec![ErrorDetail {
                message: message.into(),
            }]),
        }
    }

    pub fn internal() -> Self {
        Self {
            success: false,
            message: "Internal server error".to_string(),
            errors: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_description_accessor() {
        let parse = |body: Value| serde_json::from_value::<ClassifyRequest>(body).unwrap();

        assert_eq!(parse(json!({ "description": "Fix it" })).description(), Some("Fix it"));
        assert_eq!(parse(json!({ "description": "   " })).description(), None);
        assert_eq!(parse(json!({ "description": 42 })).description(), None);
        assert_eq!(parse(json!({ "description": null })).description(), None);
        assert_eq!(parse(json!({})).description(), None);
    }

    #[test]
    fn test_validation_body_shape() {
        let body = serde_json::to_value(ErrorBody::validation("Description is required")).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Validation error",
                "errors": [{ "message": "Description is required" }]
            })
        );
    }

    #[test]
    fn test_internal_body_omits_errors() {
        let body = serde_json::to_value(ErrorBody::internal()).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "Internal server error" }));
    }
}
