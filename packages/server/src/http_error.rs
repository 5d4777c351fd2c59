//! HTTP error handling
//!
//! Provides a consistent JSON error payload with a human-readable message
//! and a machine-readable code, mapped to a status class.

use arbor_core::services::TreeServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// JSON error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Optional detailed error information for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpError {
    /// Create a new HTTP error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Create a new HTTP error with details
    pub fn with_details(
        message: impl Into<String>,
        code: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: Some(details.into()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "NODE_NOT_FOUND" | "PARENT_NOT_FOUND" => StatusCode::NOT_FOUND,
            "VALIDATION_ERROR" | "CIRCULAR_REFERENCE" | "ROOT_PROTECTED" => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

impl From<TreeServiceError> for HttpError {
    fn from(err: TreeServiceError) -> Self {
        match err {
            TreeServiceError::NodeNotFound { .. } => HttpError::new(err.to_string(), "NODE_NOT_FOUND"),
            TreeServiceError::ParentNotFound { .. } => {
                HttpError::new(err.to_string(), "PARENT_NOT_FOUND")
            }
            TreeServiceError::Validation(_) => HttpError::new(err.to_string(), "VALIDATION_ERROR"),
            TreeServiceError::CircularReference { .. } => {
                HttpError::new(err.to_string(), "CIRCULAR_REFERENCE")
            }
            TreeServiceError::RootProtected { .. } => {
                HttpError::new(err.to_string(), "ROOT_PROTECTED")
            }
            TreeServiceError::Store(source) => HttpError::with_details(
                "Store operation failed",
                "STORE_ERROR",
                format!("{:?}", source),
            ),
        }
    }
}
