//! Shared response helpers for API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `200` with the JSON array, or a bodyless `204 No Content` when `items`
/// is empty.
///
/// List endpoints distinguish "nothing matched" from "here is a list" at the
/// status-code level, so clients must handle 204 explicitly.
pub fn list_or_no_content<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(items)).into_response()
    }
}
