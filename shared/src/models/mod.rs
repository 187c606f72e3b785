//! Data models
//!
//! Shared between the fabricator and other tooling around the same store
//! files. Serialized field order on [`Issue`] is part of the store format
//! and must not be reordered.

pub mod issue;
pub mod store;
pub mod user;

// Re-exports
pub use issue::*;
pub use store::*;
pub use user::*;
