//! Handlers for tutorial CRUD and filtering.
//!
//! Each handler is a single store call (or one find-then-save pair for
//! updates). Store failures surface as [`AppError`] and are turned into bare
//! status codes at the response boundary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tutorials_core::error::CoreError;
use tutorials_core::tutorial::ENTITY;
use tutorials_core::types::DbId;
use tutorials_db::models::tutorial::{CreateTutorial, TutorialRecord, UpdateTutorial};

use crate::error::{AppError, AppResult};
use crate::query::TitleFilterParams;
use crate::response::list_or_no_content;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/tutorials
///
/// List all tutorials, or those whose title contains `?title=` ignoring case.
/// Responds 204 when nothing matches.
pub async fn list_tutorials(
    State(state): State<AppState>,
    Query(params): Query<TitleFilterParams>,
) -> AppResult<Response> {
    tracing::info!(title = ?params.title, "Listing tutorials");

    let tutorials = match params.title.as_deref() {
        None => state.store.find_all().await?,
        Some(fragment) => {
            state
                .store
                .find_by_title_containing_ignore_case(fragment)
                .await?
        }
    };

    if tutorials.is_empty() {
        tracing::warn!(title = ?params.title, "No tutorials found");
    } else {
        tracing::info!(count = tutorials.len(), "Returning tutorials");
    }

    Ok(list_or_no_content(tutorials))
}

/// GET /api/tutorials/{id}
pub async fn get_tutorial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(id, "Fetching tutorial");

    let tutorial = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(tutorial))
}

/// GET /api/tutorials/published
///
/// List published tutorials. Responds 204 when there are none.
pub async fn list_published(State(state): State<AppState>) -> AppResult<Response> {
    tracing::info!("Fetching published tutorials");

    let tutorials = state.store.find_by_published(true).await?;

    if tutorials.is_empty() {
        tracing::warn!("No published tutorials found");
    }

    Ok(list_or_no_content(tutorials))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /api/tutorials
///
/// Create a tutorial. New tutorials always start unpublished, whatever the
/// client sent.
pub async fn create_tutorial(
    State(state): State<AppState>,
    Json(input): Json<CreateTutorial>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(title = %input.title, "Creating tutorial");

    let tutorial = state
        .store
        .save(TutorialRecord::new(input.title, input.description, false))
        .await?;

    tracing::debug!(id = tutorial.id, "Tutorial created");

    Ok((StatusCode::CREATED, Json(tutorial)))
}

/// PUT /api/tutorials/{id}
///
/// Overwrite title, description and published. Omitted `description` and
/// `published` reset to `null` and `false`.
pub async fn update_tutorial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTutorial>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(id, "Updating tutorial");

    let existing = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    let mut record = TutorialRecord::from(existing);
    record.overwrite(input);
    let tutorial = state.store.save(record).await?;

    tracing::debug!(id, "Tutorial updated");

    Ok(Json(tutorial))
}

/// DELETE /api/tutorials/{id}
///
/// Deleting an id that does not exist still responds 204.
pub async fn delete_tutorial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(id, "Deleting tutorial");

    state.store.delete_by_id(id).await?;

    tracing::debug!(id, "Tutorial deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/tutorials
pub async fn delete_all_tutorials(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    tracing::info!("Deleting all tutorials");

    state.store.delete_all().await?;

    tracing::debug!("All tutorials deleted");

    Ok(StatusCode::NO_CONTENT)
}
