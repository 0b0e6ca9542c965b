//! Application error type and its JSON error bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::store::StoreError;

/// Error body for authentication failures: `{"message": ...}`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body for server failures: `{"error": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Store failure: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Check if this error represents an auth failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Unauthorized => (
                status,
                Json(MessageBody {
                    message: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            AppError::Store(e) => {
                tracing::error!(error = %e, "Store error");
                server_error(status, &e.to_string())
            }
            AppError::Serialization(e) => {
                tracing::error!(error = %e, "Serialization error");
                server_error(status, &e.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                server_error(status, msg)
            }
        }
    }
}

fn server_error(status: StatusCode, detail: &str) -> Response {
    let body = ErrorBody {
        error: format!("Unexpected server error: {detail}"),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_401() {
        let err = AppError::Unauthorized;
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = AppError::Store(StoreError::Unavailable("connection refused".to_string()));
        assert!(!err.is_unauthorized());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn app_error_display() {
        let err = AppError::Store(StoreError::Unavailable("timeout".to_string()));
        assert_eq!(err.to_string(), "Store failure: Store unavailable: timeout");
    }

    #[test]
    fn app_error_from_store_error() {
        let err: AppError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, AppError::Store(StoreError::Database(_))));
    }

    #[test]
    fn error_body_shape() {
        let json = serde_json::to_value(ErrorBody {
            error: "Unexpected server error: boom".to_string(),
        })
        .unwrap();
        assert_eq!(json["error"], "Unexpected server error: boom");
    }
}
