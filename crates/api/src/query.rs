//! Query parameter types for API handlers.

use serde::Deserialize;

/// Optional title filter for `GET /tutorials` (`?title=`).
///
/// An absent parameter lists everything; a present one, even empty, goes
/// through the case-insensitive substring filter.
#[derive(Debug, Deserialize)]
pub struct TitleFilterParams {
    pub title: Option<String>,
}
