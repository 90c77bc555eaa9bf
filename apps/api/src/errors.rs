use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// No variant is ever retried. Each failure ends its request and the user
/// re-triggers explicitly.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local precondition failed before any provider call.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The provider answered, but not with the structured payload we asked for.
    #[error("Provider response error: {0}")]
    ProviderResponse(String),

    /// The provider could not be reached or refused the call.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The human-readable message shown to the user, without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::ProviderResponse(msg)
            | AppError::Transport(msg) => msg.clone(),
            AppError::Internal(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => AppError::ProviderResponse(format!(
                "The AI returned a response that could not be understood: {e}"
            )),
            LlmError::EmptyContent => {
                AppError::ProviderResponse("The AI returned an empty response.".to_string())
            }
            other => AppError::Transport(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::ProviderResponse(msg) => {
                tracing::error!("Provider response error: {msg}");
                (StatusCode::BAD_GATEWAY, "PROVIDER_RESPONSE_ERROR")
            }
            AppError::Transport(msg) => {
                tracing::error!("Transport error: {msg}");
                (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_drops_prefix() {
        let err = AppError::ProviderResponse("The AI returned junk".to_string());
        assert_eq!(err.user_message(), "The AI returned junk");
        assert_eq!(err.to_string(), "Provider response error: The AI returned junk");
    }

    #[test]
    fn test_llm_errors_map_to_taxonomy() {
        let api = LlmError::Api {
            status: 500,
            message: "overloaded".to_string(),
        };
        assert!(matches!(AppError::from(api), AppError::Transport(_)));
        assert!(matches!(
            AppError::from(LlmError::EmptyContent),
            AppError::ProviderResponse(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        let resp = AppError::Validation("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = AppError::Transport("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let resp = AppError::NotFound("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
