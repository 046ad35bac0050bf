pub mod health;
pub mod tutorial;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tutorials                 list (?title=), create, delete all
/// /tutorials/published       list published
/// /tutorials/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tutorials", tutorial::router())
}
