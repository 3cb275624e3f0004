//! Error types for the blog service.
//!
//! Errors that escape a handler are converted to HTML error pages via
//! the `ResponseError` impl. Form validation failures never become an
//! `AppError`; handlers re-render the page with field errors instead.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// No published post matches the requested identifier or date+slug.
    #[error("not found")]
    NotFound,

    /// Wrong HTTP verb on a POST-only route.
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Outbound email transport failure. Caught inside the share handler;
    /// never escapes as an HTTP error.
    #[error("email transport error: {0}")]
    Mail(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Mail(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let title = match self {
            AppError::NotFound => "Page not found",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::Validation(_) => "Bad request",
            _ => "Server error",
        };

        if status.is_server_error() {
            tracing::error!(%status, "request failed: {}", self);
        }

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(crate::render::error_page(status.as_u16(), title))
    }
}
