use anyhow::Context;
use fabricator::{run, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging) + configuration
    let config = setup_environment();

    tracing::info!("🏙️ issue fabricator starting...");
    tracing::debug!(?config, "effective configuration");

    // 2. One-shot seeding run
    run(&config).context("seeding run failed")?;

    Ok(())
}
