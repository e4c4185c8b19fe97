use std::io::ErrorKind;
use std::path::Path;

use axum::{extract::State, response::Html};
use tracing::{debug, warn};

use crate::{error::AppError, state::SharedState};

/// Chat pages tried in order; the first readable one wins.
pub const PAGE_CANDIDATES: [&str; 4] = ["c4cH.html", "c4c.html", "c4cM.html", "index.html"];

pub async fn find_page(dir: &Path) -> Option<String> {
    for name in PAGE_CANDIDATES {
        let path = dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                debug!(page = %path.display(), "serving chat page");
                return Some(content);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                warn!(page = %path.display(), error = %e, "failed to read chat page, trying next")
            }
        }
    }
    None
}

pub async fn home_handler(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    find_page(&state.static_dir)
        .await
        .map(Html)
        .ok_or(AppError::PageNotFound)
}
