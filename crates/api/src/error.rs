use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tutorials_core::error::CoreError;
use tutorials_db::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`]: not-found maps to 404 and every
/// other failure to 500, both as a bare status with no body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tutorials_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the record store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::warn!(entity, id, "Entity not found");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Store(err) => classify_store_error(err).into_response(),
        }
    }
}

/// Classify a store error into an HTTP status.
///
/// - `MissingRow` and sqlx `RowNotFound` map to 404.
/// - Everything else maps to 500; the cause is logged, never returned.
fn classify_store_error(err: &StoreError) -> StatusCode {
    match err {
        StoreError::MissingRow(id) => {
            tracing::warn!(id, "Tutorial vanished before save");
            StatusCode::NOT_FOUND
        }
        StoreError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
        StoreError::Database(other) => {
            tracing::error!(error = %other, "Database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
