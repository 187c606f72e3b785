//! User Model

use serde::{Deserialize, Serialize};

/// A row from the user roster (`users.json`).
///
/// The roster carries more fields (name, email, password hash, ...) but
/// the data tooling only consumes the id; everything else is ignored on
/// read and never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
}
