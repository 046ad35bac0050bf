//! Domain rules for tutorial records.
//!
//! No I/O lives here: only the id type, the domain error enum and the title
//! matching rule shared by every store backend.

pub mod error;
pub mod tutorial;
pub mod types;
