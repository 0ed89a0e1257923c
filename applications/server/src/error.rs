/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use noor_core::CoreError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Content API unreachable or answered with garbage
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Transport failure while proxying audio
    #[error("Error fetching audio file: {0}")]
    AudioFetch(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Core(ref e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ServerError::Upstream(msg) => {
                tracing::warn!("Upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            ServerError::AudioFetch(detail) => {
                tracing::error!("Audio proxy error: {}", detail);
                let body = Json(json!({
                    "error": "Error fetching audio file.",
                    "detail": detail,
                }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServerError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServerError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ServerError::Core(CoreError::InvalidSurah(115)), StatusCode::BAD_REQUEST),
            (ServerError::Upstream("x".into()), StatusCode::BAD_GATEWAY),
            (ServerError::AudioFetch("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServerError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServerError::Config("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
