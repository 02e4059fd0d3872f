//! CLI command implementations, one module per lesson group.

pub mod asynchronous;
pub mod config;
pub mod guards;
pub mod oop;
pub mod records;
pub mod stack;
pub mod unions;
pub mod version;

use std::future::Future;
use std::path::Path;

use anyhow::{Context, Result};
use groundwork_async::Timings;
use groundwork_config::GroundworkConfig;

/// Loads the merged configuration for `project`.
pub fn load_config(project: &Path) -> Result<GroundworkConfig> {
    GroundworkConfig::load_from_dir(project)
        .with_context(|| format!("Failed to load configuration from {}", project.display()))
}

/// Converts configured milliseconds into lesson timings.
pub fn timings(config: &GroundworkConfig) -> Timings {
    let timing = &config.timing;
    Timings {
        fetch: timing.fetch_delay(),
        settle: timing.settle_delay(),
        user: timing.user_delay(),
        posts: timing.posts_delay(),
        risky: timing.risky_delay(),
        timeout: timing.timeout(),
    }
}

/// Runs `future` to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;
    Ok(runtime.block_on(future))
}
