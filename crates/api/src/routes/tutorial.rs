//! Route definitions for tutorials.

use axum::routing::get;
use axum::Router;

use crate::handlers::tutorial;
use crate::state::AppState;

/// Tutorial routes mounted at `/tutorials`.
///
/// ```text
/// GET    /            -> list_tutorials
/// POST   /            -> create_tutorial
/// DELETE /            -> delete_all_tutorials
/// GET    /published   -> list_published
/// GET    /{id}        -> get_tutorial
/// PUT    /{id}        -> update_tutorial
/// DELETE /{id}        -> delete_tutorial
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(tutorial::list_tutorials)
                .post(tutorial::create_tutorial)
                .delete(tutorial::delete_all_tutorials),
        )
        .route("/published", get(tutorial::list_published))
        .route(
            "/{id}",
            get(tutorial::get_tutorial)
                .put(tutorial::update_tutorial)
                .delete(tutorial::delete_tutorial),
        )
}
