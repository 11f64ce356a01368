//! Chat error type with Axum `IntoResponse` support.
//!
//! Every error is answered with HTTP 200 and a normal `{"response": ...}`
//! body; the chat client only ever sees a human-readable message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ec_diagnostics::DiagnosisError;
use ec_diagnostics::reply::FALLBACK_INSTRUCTIONS;

use crate::routes::chat::ChatResponse;

/// Chat request failure.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("request has no message text")]
    MissingField,

    #[error(transparent)]
    Diagnosis(#[from] DiagnosisError),
}

impl ChatError {
    /// Text returned to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ChatError::MalformedRequest(_) | ChatError::MissingField => FALLBACK_INSTRUCTIONS,
            ChatError::Diagnosis(err) => err.user_message(),
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match &self {
            ChatError::MalformedRequest(_)
            | ChatError::MissingField
            | ChatError::Diagnosis(DiagnosisError::OutOfRange(_)) => {
                tracing::warn!(error = %self, "chat request rejected");
            }
            ChatError::Diagnosis(_) => {
                tracing::debug!(error = %self, "chat request incomplete");
            }
        }

        let body = ChatResponse {
            response: self.user_message().to_string(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Convenience alias.
pub type ChatResult<T> = Result<T, ChatError>;
