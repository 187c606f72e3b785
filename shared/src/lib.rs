//! Shared types for the civic issue data tooling
//!
//! Data models and JSON document shapes used by the fabricator and any
//! other tooling that reads or writes the same store files.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Comment, Issue, IssueCategory, IssuePriority, IssueStatus, IssuesDocument,
    StatusHistoryEntry, UserRecord, UsersDocument,
};
