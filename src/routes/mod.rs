// src/routes/mod.rs
pub mod chat;
pub mod home;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chat::{ask_handler, chat_handler};
use home::home_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    // Prompts of any size are forwarded; no 413 before the envelope is built.
    let chat_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/ask", post(ask_handler))
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .route("/", get(home_handler))
        .merge(chat_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
