//! Logging Infrastructure
//!
//! Compact tracing setup for a one-shot CLI run.

/// Initialize the logger
pub fn init_logger(log_level: Option<&str>) {
    let level = log_level.unwrap_or("info");

    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
