use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use wildpreserve_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for the store.
/// Implements [`IntoResponse`] to produce a rendered HTML error page, which
/// is what a browser submitting these forms expects to see.
///
/// Validation failures never pass through here: handlers deal with them by
/// re-rendering the originating form. Store failures always do, unmodified
/// and unretried.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wildpreserve_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),

            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (Postgres error code 23503) map to 409: some
///   other record still references the one being changed or removed.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Record not found".to_string()),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23503") {
                return (
                    StatusCode::CONFLICT,
                    "The record is still referenced by other records".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}
