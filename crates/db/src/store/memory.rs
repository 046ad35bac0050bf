use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tutorials_core::tutorial::title_contains_ignore_case;
use tutorials_core::types::DbId;

use super::{StoreError, TutorialStore};
use crate::models::tutorial::{Tutorial, TutorialRecord};

/// [`TutorialStore`] that keeps rows in process memory.
///
/// Ids come from a monotonically increasing sequence starting at 1 and are
/// never reused, even after `delete_all`. Rows are lost when the process
/// exits.
#[derive(Default)]
pub struct MemoryTutorialStore {
    inner: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    last_id: DbId,
    rows: BTreeMap<DbId, Tutorial>,
}

impl MemoryTutorialStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }

    async fn filtered(&self, keep: impl Fn(&Tutorial) -> bool) -> Vec<Tutorial> {
        self.inner
            .read()
            .await
            .rows
            .values()
            .filter(|t| keep(*t))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TutorialStore for MemoryTutorialStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, StoreError> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Tutorial>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_by_title_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Tutorial>, StoreError> {
        Ok(self
            .filtered(|t| title_contains_ignore_case(&t.title, fragment))
            .await)
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, StoreError> {
        Ok(self.filtered(|t| t.published == published).await)
    }

    async fn save(&self, record: TutorialRecord) -> Result<Tutorial, StoreError> {
        let mut table = self.inner.write().await;

        let id = match record.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => return Err(StoreError::MissingRow(id)),
            None => {
                table.last_id += 1;
                table.last_id
            }
        };

        let row = Tutorial {
            id,
            title: record.title,
            description: record.description,
            published: record.published,
        };
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.inner.write().await.rows.clear();
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
