//! The record store capability consumed by the API layer.

mod memory;
mod postgres;

pub use memory::MemoryTutorialStore;
pub use postgres::PgTutorialStore;

use async_trait::async_trait;
use tutorials_core::types::DbId;

use crate::models::tutorial::{Tutorial, TutorialRecord};

/// Errors raised by a [`TutorialStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// `save` was asked to overwrite a row that no longer exists.
    #[error("Tutorial with id {0} does not exist")]
    MissingRow(DbId),
}

/// Persistence operations over tutorial records.
///
/// List operations return rows ordered by id ascending. Every call is a
/// single attempt; callers do not retry.
#[async_trait]
pub trait TutorialStore: Send + Sync {
    /// Every stored tutorial.
    async fn find_all(&self) -> Result<Vec<Tutorial>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Tutorial>, StoreError>;

    /// Tutorials whose title contains `fragment` as a literal substring after
    /// Unicode lower-casing both sides. An empty fragment matches every row.
    async fn find_by_title_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Tutorial>, StoreError>;

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, StoreError>;

    /// Insert when `record.id` is `None`, otherwise overwrite the matching
    /// row. Returns the persisted representation.
    async fn save(&self, record: TutorialRecord) -> Result<Tutorial, StoreError>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, StoreError>;

    /// Remove a row. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError>;

    async fn delete_all(&self) -> Result<(), StoreError>;

    /// Cheap liveness probe.
    async fn health_check(&self) -> Result<(), StoreError>;
}
