//! # robohubd — robohub daemon
//!
//! Composition root that wires the RoboVac integration together and runs
//! it.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise tracing
//! - Run setup for each configured vacuum, retrying while the device
//!   signals not-ready
//! - Spawn one poller per registered entity
//! - Tear down pollers and the handle registry on shutdown
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use robohub_adapter_robovac::{RobovacConfig, RobovacVacuum, setup};
use robohub_adapter_virtual::{VirtualBackend, VirtualRobovac};
use robohub_app::services::{HandleRegistry, Poller};
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    if config.vacuums.is_empty() {
        tracing::warn!("no vacuums configured; add a [[vacuum]] section to robohub.toml");
    }

    // The shipped backend is the simulated one; a vendor-backed
    // implementation of the same ports slots in here.
    let backend = VirtualBackend::new();
    let registry = Arc::new(HandleRegistry::new());

    let mut pollers = Vec::new();
    for vacuum_config in &config.vacuums {
        let entity = setup_with_retry(vacuum_config, &backend, &registry, &config).await?;
        tracing::info!(
            id = %entity.id(),
            name = entity.name(),
            status = entity.status().unwrap_or("unknown"),
            "vacuum entity registered"
        );
        pollers.push(Poller::spawn(Arc::new(entity), config.poll_interval()));
    }

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");

    for poller in pollers {
        poller.stop();
    }
    registry.clear();

    Ok(())
}

/// Run setup, sleeping and retrying while the device reports not-ready.
async fn setup_with_retry(
    vacuum_config: &RobovacConfig,
    backend: &VirtualBackend,
    registry: &HandleRegistry<VirtualRobovac>,
    config: &Config,
) -> anyhow::Result<RobovacVacuum<VirtualRobovac>> {
    loop {
        match setup(vacuum_config, backend, registry).await {
            Ok(entity) => return Ok(entity),
            Err(err) if err.is_not_ready() => {
                tracing::warn!(
                    address = %vacuum_config.ip_address,
                    error = %err,
                    retry_secs = config.setup.retry_secs,
                    "vacuum not ready; will retry"
                );
                tokio::time::sleep(config.retry_delay()).await;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
