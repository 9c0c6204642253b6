use crate::wordpress::WordPressError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors a handler can bubble up with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    WordPress(#[from] WordPressError),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::WordPress(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::WordPress(WordPressError::Revalidation { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::WordPress(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
