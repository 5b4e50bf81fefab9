use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // 404 carries no body; callers get nothing beyond the status.
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::Database(e) => {
                // Log the real cause, hand the caller a generic 500.
                tracing::error!("store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while processing the request",
                )
                    .into_response()
            }
        }
    }
}
