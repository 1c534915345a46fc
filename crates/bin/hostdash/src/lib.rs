//! # hostdash
//!
//! Composition root that wires the reqwest adapter into the dashboard service
//! and takes one snapshot of the host-management API.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the HTTP adapter and the application service
//! - Run both loaders once and render the resulting page as text
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod render;

use hostdash_adapter_http_reqwest::ClientError;
use hostdash_app::page::Dashboard;
use hostdash_app::services::DashboardService;

use crate::config::Config;

/// Load the alive hosts, their descriptors and the logs once.
///
/// Load failures end up in the returned page; only a client that cannot be
/// built is an error.
///
/// # Errors
///
/// Returns [`ClientError`] if the HTTP adapter cannot be constructed.
pub async fn snapshot(config: &Config) -> Result<Dashboard, ClientError> {
    let client = config.client_config().build()?;
    let service = DashboardService::new(client);

    let mut page = Dashboard::new();
    service.load(&config.endpoints(), &mut page).await;
    tracing::info!(
        hosts = page.hosts().len(),
        log_items = page.logs().items().len(),
        "dashboard loaded"
    );
    Ok(page)
}
