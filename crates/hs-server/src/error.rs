//! Server error types and HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hs_sections::{StoreError, StoreErrorKind};
use serde_json::json;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// The owner type path segment is not a known kind.
    #[error("Unknown owner type: {0}")]
    UnknownOwnerType(String),
    /// Section store read failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownOwnerType(_) => StatusCode::NOT_FOUND,
            Self::Store(err) => match err.kind() {
                StoreErrorKind::NotFound => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_owner_type_is_not_found() {
        let response = ServerError::UnknownOwnerType("widget".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_is_internal_error() {
        let err = StoreError::new(StoreErrorKind::Unavailable).with_backend("SQLite");
        let response = ServerError::Store(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
