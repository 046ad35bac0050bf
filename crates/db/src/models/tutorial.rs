//! Tutorial entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorials_core::types::DbId;

/// A row from the `tutorials` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
}

/// A tutorial about to be saved.
///
/// `id == None` means insert; `Some(id)` overwrites the existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialRecord {
    pub id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
}

impl TutorialRecord {
    /// An unsaved record; the store assigns the id.
    pub fn new(title: String, description: Option<String>, published: bool) -> Self {
        Self {
            id: None,
            title,
            description,
            published,
        }
    }

    /// Replace every mutable field with the values from an update body.
    pub fn overwrite(&mut self, input: UpdateTutorial) {
        self.title = input.title;
        self.description = input.description;
        self.published = input.published;
    }
}

impl From<Tutorial> for TutorialRecord {
    fn from(t: Tutorial) -> Self {
        Self {
            id: Some(t.id),
            title: t.title,
            description: t.description,
            published: t.published,
        }
    }
}

/// DTO for creating a tutorial. Any `published` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTutorial {
    pub title: String,
    pub description: Option<String>,
}

/// DTO for a full update. Missing `description` clears to `null`, missing
/// `published` clears to `false`; `title` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTutorial {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}
