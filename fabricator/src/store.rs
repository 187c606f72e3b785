//! JSON store I/O
//!
//! The stores are plain JSON documents owned by the issue tracker's API
//! server; this tool does a full-file read-modify-write. The rewrite goes
//! through a temp file in the same directory and renames over the target,
//! so a failed run never truncates the issue store.

use std::fs;
use std::path::Path;

use shared::{IssuesDocument, UserRecord, UsersDocument};

use crate::utils::{AppResult, SeedError};

/// Load the user roster.
///
/// Fails fast on a missing or malformed file and on an empty roster,
/// since generation draws reporters uniformly from it.
pub fn load_users(path: &Path) -> AppResult<Vec<UserRecord>> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: UsersDocument = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if doc.users.is_empty() {
        return Err(SeedError::EmptyRoster {
            path: path.to_path_buf(),
        });
    }
    Ok(doc.users)
}

/// Load the issue store.
///
/// A missing file is an empty store (the API server initializes data
/// files with empty collections, so a fresh checkout simply has none
/// yet); a present-but-malformed file is a hard error.
pub fn load_issues(path: &Path) -> AppResult<IssuesDocument> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("issue store {} not found, starting empty", path.display());
            return Ok(IssuesDocument::default());
        }
        Err(source) => {
            return Err(SeedError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrite the issue store atomically (temp file + rename).
pub fn save_issues(path: &Path, doc: &IssuesDocument) -> AppResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let write_err = |source: std::io::Error| SeedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let pretty = serde_json::to_vec_pretty(doc).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    fs::write(tmp.path(), &pretty).map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
