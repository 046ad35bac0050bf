//! Tutorial naming and title matching.

/// Entity name used in `CoreError::NotFound`.
pub const ENTITY: &str = "Tutorial";

/// Case-insensitive literal substring test used by title filtering.
///
/// Both sides are folded with Unicode lower-casing before comparison. The
/// fragment is matched literally (no wildcards), and an empty fragment
/// matches every title.
///
/// The PostgreSQL store applies the same rule with
/// `strpos(lower(title), lower($1)) > 0`, but `lower()` folds according to
/// the database collation: under a UTF-8 or ICU collation it agrees with
/// this function, while under the `C` locale only ASCII letters are folded.
pub fn title_contains_ignore_case(title: &str, fragment: &str) -> bool {
    title.to_lowercase().contains(&fragment.to_lowercase())
}
