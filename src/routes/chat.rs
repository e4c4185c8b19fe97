use axum::{Json, body::Bytes, extract::State};
use tracing::info;

use crate::{
    message::{Endpoint, Envelope},
    services::chatbot::answer,
    state::SharedState,
};

/// Shared body of `/chat` and `/ask`. Always answers 200; failures are
/// carried in the envelope's `success` flag.
pub async fn handle_chat_style_request(
    state: &SharedState,
    endpoint: Endpoint,
    body: &[u8],
) -> Json<Envelope> {
    info!(field = endpoint.field, bytes = body.len(), "chat-style request");

    let result = answer(
        state.client.as_ref(),
        &state.completion,
        body,
        endpoint.field,
    )
    .await;

    Json(Envelope::wrap(endpoint.shape, result))
}

pub async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> Json<Envelope> {
    handle_chat_style_request(&state, Endpoint::CHAT, &body).await
}

pub async fn ask_handler(State(state): State<SharedState>, body: Bytes) -> Json<Envelope> {
    handle_chat_style_request(&state, Endpoint::ASK, &body).await
}
