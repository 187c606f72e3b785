//! # fabricator
//!
//! One-shot seeding tool for the civic issue tracker's JSON stores.
//!
//! Reads the user roster and the existing issue store, fabricates a batch
//! of plausible issue reports (a slice of which form duplicate-report
//! clusters around shared incidents), and rewrites the issue store with
//! the batch appended after the untouched existing records.
//!
//! ## Module structure
//!
//! ```text
//! fabricator/src/
//! ├── app.rs        # environment setup + run orchestration
//! ├── config.rs     # env-var configuration
//! ├── catalog.rs    # fixed description templates, streets, weights
//! ├── generator.rs  # batch generation engine
//! ├── store.rs      # JSON store I/O (atomic rewrite)
//! ├── summary.rs    # end-of-run counters
//! └── utils/        # error type, logger
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod store;
pub mod summary;
pub mod utils;

// Re-export public types
pub use app::{run, setup_environment};
pub use config::Config;
pub use generator::{BatchOptions, fabricate_batch};
pub use summary::RunSummary;
pub use utils::{AppResult, SeedError};
pub use utils::logger::init_logger;
