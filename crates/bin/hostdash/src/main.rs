//! # hostdash — host-management dashboard snapshot
//!
//! Reads the configuration, installs the `tracing` subscriber, loads the
//! dashboard once and prints it to stdout. Diagnostics go to stderr.

use hostdash::config::Config;
use hostdash::render::PageText;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(base_url = %config.api.base_url, "loading dashboard");
    let page = hostdash::snapshot(&config).await?;
    print!("{}", PageText(&page));

    Ok(())
}
