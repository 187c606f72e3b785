use std::path::PathBuf;

/// Fabricator configuration
///
/// # Environment variables
///
/// Every knob can be overridden via environment variable:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATA_DIR | data | Directory holding the JSON stores |
/// | USERS_FILE | `<DATA_DIR>/users.json` | User roster (read-only) |
/// | ISSUES_FILE | `<DATA_DIR>/issues.json` | Issue store (read + rewritten) |
/// | ISSUE_COUNT | 200 | Issues to fabricate per run |
/// | DUPLICATE_GROUPS | 15 | Duplicate-report clusters seeded per run |
/// | DUPLICATE_WINDOW | 40 | Leading batch indices stamped from clusters |
/// | SEED | (entropy) | RNG seed for reproducible runs |
/// | LOG_LEVEL | info | Tracing level |
///
/// # Example
///
/// ```ignore
/// DATA_DIR=server/src/data SEED=42 cargo run -p fabricator
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// User roster file
    pub users_file: PathBuf,
    /// Issue store file
    pub issues_file: PathBuf,
    /// Number of issues to fabricate
    pub issue_count: usize,
    /// Number of duplicate-report clusters
    pub duplicate_groups: usize,
    /// Batch prefix length drawn from the clusters
    pub duplicate_window: usize,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Tracing level: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into());
        let data_dir = PathBuf::from(data_dir);

        Self {
            users_file: std::env::var("USERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("users.json")),
            issues_file: std::env::var("ISSUES_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("issues.json")),
            issue_count: std::env::var("ISSUE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            duplicate_groups: std::env::var("DUPLICATE_GROUPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            duplicate_window: std::env::var("DUPLICATE_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(40),
            seed: std::env::var("SEED").ok().and_then(|v| v.parse().ok()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}
