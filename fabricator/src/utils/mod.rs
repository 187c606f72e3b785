//! Utility modules
//!
//! - [`SeedError`] / [`AppResult`] - error type for store I/O and preconditions
//! - [`logger`] - tracing subscriber setup

pub mod error;
pub mod logger;

pub use error::{AppResult, SeedError};
