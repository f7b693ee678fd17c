//! Error types and their JSON responses.
//!
//! Validation failures follow the `{"detail": [...]}` shape clients of this API
//! already parse; everything else uses a plain `{"detail": "..."}` string.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body did not match the expected schema.
    #[error("Validation error ({kind}): {message}")]
    Validation { kind: &'static str, message: String },

    /// Body could not be read at all; keeps the status axum chose.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Not found")]
    NotFound,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::Validation {
                kind: "invalid_body",
                message: err.body_text(),
            },
            JsonRejection::JsonSyntaxError(err) => AppError::Validation {
                kind: "json_invalid",
                message: err.body_text(),
            },
            // A body that is not declared as JSON cannot match the object schema
            JsonRejection::MissingJsonContentType(err) => AppError::Validation {
                kind: "model_attributes_type",
                message: err.body_text(),
            },
            other => AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected { status, .. } => *status,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Validation { kind, message } => {
                tracing::debug!(kind, message = %message, "Rejected request body");
                json!({
                    "detail": [{
                        "loc": ["body"],
                        "msg": message,
                        "type": kind,
                    }]
                })
            }
            AppError::Rejected { message, .. } => {
                tracing::warn!(status = status.as_u16(), message = %message, "Failed to read request body");
                json!({ "detail": message })
            }
            AppError::NotFound => json!({ "detail": "Not Found" }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = AppError::Validation {
            kind: "invalid_body",
            message: "missing field `text`".to_string(),
        };
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rejected_keeps_original_status() {
        let err = AppError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = AppError::Validation {
            kind: "json_invalid",
            message: "expected value".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
