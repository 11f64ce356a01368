//! Chat endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ec_diagnostics::diagnose_message;
use serde::{Deserialize, Serialize};

use crate::error::{ChatError, ChatResult};
use crate::state::AppState;

/// Request body: free text carrying RPM and coolant temperature.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Response body: plain text, one line per reply field.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /chat: diagnose the engine readings in a chat message.
///
/// Always answers 200; rejected or incomplete requests get a prompt
/// instead of a diagnosis (see [`ChatError`]).
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ChatResult<Json<ChatResponse>> {
    let Json(req) =
        payload.map_err(|rejection| ChatError::MalformedRequest(rejection.body_text()))?;
    let message = req.message.ok_or(ChatError::MissingField)?;

    let diagnosis = diagnose_message(&state.table, &message)?;

    Ok(Json(ChatResponse {
        response: diagnosis.to_string(),
    }))
}
