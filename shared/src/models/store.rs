//! Store document shapes
//!
//! Top-level layout of the two JSON store files. Existing issue entries
//! are kept as raw values so that a rewrite of the store never re-shapes
//! records this tool did not create.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::UserRecord;

/// `users.json`: `{ "users": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersDocument {
    pub users: Vec<UserRecord>,
}

/// `issues.json`: `{ "issues": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssuesDocument {
    pub issues: Vec<Value>,
}

impl IssuesDocument {
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
