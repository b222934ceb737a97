//! POST /api/chat

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use fizzbit_types::api::{ChatRequest, ChatSuccess};

use crate::http::error::AppError;
use crate::state::AppState;

/// Forward one message through the gateway.
///
/// A body that is not valid JSON is handled like a missing message, so it
/// gets the same 400 as an empty one.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatSuccess>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable chat request body");
            ChatRequest::default()
        }
    };

    let reply = state.gateway.exchange(request.message_str()).await?;
    Ok(Json(ChatSuccess::new(reply)))
}
