// src/error.rs
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

pub const PAGE_NOT_FOUND_HTML: &str = "<h1>HTML 파일을 찾을 수 없습니다.</h1>";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no chat page found")]
    PageNotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::PageNotFound => {
                (StatusCode::NOT_FOUND, Html(PAGE_NOT_FOUND_HTML)).into_response()
            }
        }
    }
}
