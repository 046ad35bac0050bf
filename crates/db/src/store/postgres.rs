use async_trait::async_trait;
use tutorials_core::types::DbId;

use super::{StoreError, TutorialStore};
use crate::models::tutorial::{Tutorial, TutorialRecord};
use crate::repositories::TutorialRepo;
use crate::DbPool;

/// [`TutorialStore`] backed by the `tutorials` table.
#[derive(Clone)]
pub struct PgTutorialStore {
    pool: DbPool,
}

impl PgTutorialStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutorialStore for PgTutorialStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, StoreError> {
        Ok(TutorialRepo::list_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Tutorial>, StoreError> {
        Ok(TutorialRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_title_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Tutorial>, StoreError> {
        Ok(TutorialRepo::find_by_title_containing_ignore_case(&self.pool, fragment).await?)
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, StoreError> {
        Ok(TutorialRepo::find_by_published(&self.pool, published).await?)
    }

    async fn save(&self, record: TutorialRecord) -> Result<Tutorial, StoreError> {
        match record.id {
            None => Ok(TutorialRepo::create(&self.pool, &record).await?),
            Some(id) => TutorialRepo::update(&self.pool, id, &record)
                .await?
                .ok_or(StoreError::MissingRow(id)),
        }
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(TutorialRepo::exists(&self.pool, id).await?)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        let deleted = TutorialRepo::delete(&self.pool, id).await?;
        if !deleted {
            tracing::debug!(id, "Delete of absent tutorial ignored");
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let removed = TutorialRepo::delete_all(&self.pool).await?;
        tracing::debug!(removed, "Deleted all tutorials");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
