//! Run orchestration
//!
//! Wires config, stores, and the generation engine into the one-shot
//! batch run: load roster and store, fabricate, append, rewrite.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::generator::{BatchOptions, fabricate_batch};
use crate::store;
use crate::summary::RunSummary;
use crate::utils::{AppResult, SeedError};
use crate::utils::logger::init_logger;

/// Set up environment (dotenv, logging) and load configuration
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(Some(&config.log_level));
    config
}

/// Execute one seeding run against the configured stores.
pub fn run(config: &Config) -> AppResult<RunSummary> {
    let users = store::load_users(&config.users_file)?;
    let mut doc = store::load_issues(&config.issues_file)?;
    let existing_count = doc.len();
    tracing::info!(
        "existing issues: {} | available users: {}",
        existing_count,
        users.len()
    );

    let mut rng = match config.seed {
        Some(seed) => {
            tracing::info!("seeded run (SEED={seed})");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let opts = BatchOptions {
        count: config.issue_count,
        duplicate_groups: config.duplicate_groups,
        duplicate_window: config.duplicate_window,
    };
    let batch = fabricate_batch(&mut rng, &users, Utc::now(), &opts);
    let summary = RunSummary::from_batch(&batch);

    // Strict concatenation: existing records are re-emitted as read, the
    // batch goes after them.
    for issue in &batch {
        let value = serde_json::to_value(issue).map_err(|source| SeedError::Parse {
            path: config.issues_file.clone(),
            source,
        })?;
        doc.issues.push(value);
    }
    store::save_issues(&config.issues_file, &doc)?;

    summary.log(existing_count, doc.len());
    Ok(summary)
}
