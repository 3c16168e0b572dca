//! VN Engine: API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;
use vnengine_core::error::{NavigationError, SetupError};
use vnengine_story::application::manifest::ManifestError;

/// Startup errors for the play server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story manifest could not be loaded.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// The story failed the play-start check.
    #[error("story is not playable: {0}")]
    Setup(#[from] SetupError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Request failures, rendered as JSON error bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No live session has this id.
    #[error("session {0} not found")]
    SessionNotFound(Uuid),

    /// The requested save slot name is not usable.
    #[error("invalid save slot {0:?}: use 1-64 ASCII letters, digits, '-' or '_'")]
    InvalidSlot(String),

    /// Another live session already plays in this save slot.
    #[error("save slot {0:?} is in use by another session")]
    SlotInUse(String),

    /// The navigator rejected the input.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Server-side failure unrelated to the request.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::SessionNotFound(_) => (StatusCode::NOT_FOUND, "session_not_found"),
            Self::InvalidSlot(_) => (StatusCode::BAD_REQUEST, "invalid_slot"),
            Self::SlotInUse(_) => (StatusCode::CONFLICT, "slot_in_use"),
            Self::Navigation(NavigationError::SessionEnded) => {
                (StatusCode::CONFLICT, "session_ended")
            }
            Self::Navigation(_) => (StatusCode::CONFLICT, "invalid_input"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ApiError) -> StatusCode {
        let response = err.into_response();
        response.status()
    }

    #[test]
    fn test_session_not_found_maps_to_404() {
        assert_eq!(
            status_of(ApiError::SessionNotFound(Uuid::new_v4())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_invalid_slot_maps_to_400() {
        assert_eq!(
            status_of(ApiError::InvalidSlot("../etc".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_slot_in_use_maps_to_409() {
        assert_eq!(
            status_of(ApiError::SlotInUse("default".into())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_navigation_errors_map_to_409() {
        assert_eq!(
            status_of(ApiError::Navigation(NavigationError::LanguageOutOfRange {
                index: 3,
                available: 2,
            })),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ApiError::Navigation(NavigationError::SessionEnded)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_internal_maps_to_500() {
        assert_eq!(
            status_of(ApiError::Internal("lock poisoned".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_config_message() {
        let err = AppError::Config("STORY_PATH must be set".into());

        assert_eq!(err.to_string(), "configuration error: STORY_PATH must be set");
    }
}
