#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chat_gateway::config::CompletionSettings;
use chat_gateway::routes::create_router;
use chat_gateway::services::completion::{ChatClient, CompletionError, CompletionRequest};
use chat_gateway::state::AppState;

/// Completion client that counts calls and replays a canned outcome.
pub struct MockClient {
    calls: AtomicUsize,
    outcome: Result<String, (u16, String)>,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(text.to_string()),
            last_request: Mutex::new(None),
        })
    }

    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Err((status, body.to_string())),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for MockClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err((status, body)) => Err(CompletionError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

pub fn app(client: Arc<MockClient>, static_dir: &Path) -> Router {
    let state = Arc::new(AppState::new(client, CompletionSettings::default(), static_dir));
    create_router().with_state(state)
}
