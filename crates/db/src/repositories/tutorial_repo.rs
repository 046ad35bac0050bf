//! Repository for the `tutorials` table.

use sqlx::PgPool;
use tutorials_core::types::DbId;

use crate::models::tutorial::{Tutorial, TutorialRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, published";

/// Provides CRUD and filter queries for tutorials.
pub struct TutorialRepo;

impl TutorialRepo {
    /// Insert a new tutorial, returning the created row. Any id on `input`
    /// is ignored; the sequence assigns one.
    pub async fn create(pool: &PgPool, input: &TutorialRecord) -> Result<Tutorial, sqlx::Error> {
        let query = format!(
            "INSERT INTO tutorials (title, description, published) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a tutorial by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tutorial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutorials WHERE id = $1");
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every tutorial, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Tutorial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutorials ORDER BY id");
        sqlx::query_as::<_, Tutorial>(&query).fetch_all(pool).await
    }

    /// Tutorials whose title contains `fragment`, ignoring case.
    ///
    /// Uses `strpos` rather than `ILIKE` so `%` and `_` in the fragment are
    /// matched literally. `lower()` folds per the database collation; the `C`
    /// locale folds ASCII letters only.
    pub async fn find_by_title_containing_ignore_case(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<Tutorial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tutorials \
             WHERE strpos(lower(title), lower($1)) > 0 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(fragment)
            .fetch_all(pool)
            .await
    }

    /// Tutorials with the given published flag, ordered by id.
    pub async fn find_by_published(
        pool: &PgPool,
        published: bool,
    ) -> Result<Vec<Tutorial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutorials WHERE published = $1 ORDER BY id");
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(published)
            .fetch_all(pool)
            .await
    }

    /// Overwrite title, description and published on an existing row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TutorialRecord,
    ) -> Result<Option<Tutorial>, sqlx::Error> {
        let query = format!(
            "UPDATE tutorials SET \
                title = $2, \
                description = $3, \
                published = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Whether a row with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM tutorials WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Delete a tutorial by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tutorials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every tutorial. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tutorials").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
