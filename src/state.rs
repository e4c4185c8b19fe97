// src/state.rs
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CompletionSettings;
use crate::services::completion::ChatClient;

pub type SharedState = Arc<AppState>;

/// Built once at startup and only read afterwards.
pub struct AppState {
    pub client: Arc<dyn ChatClient>,
    pub completion: CompletionSettings,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(
        client: Arc<dyn ChatClient>,
        completion: CompletionSettings,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client,
            completion,
            static_dir: static_dir.into(),
        }
    }
}
