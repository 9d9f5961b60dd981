//! # robohub-adapter-robovac
//!
//! Eufy RoboVac integration — turns one configured vacuum into a robohub
//! entity.
//!
//! ## How it works
//!
//! The vendor library (behind the [`VacuumBackend`] and
//! [`VacuumClient`](robohub_app::ports::VacuumClient) ports) owns the
//! protocol, authentication, and transport. This adapter only:
//!
//! 1. validates the device configuration,
//! 2. derives the local control code and opens the device handle,
//! 3. attempts one time-boxed connect — failure signals "not ready" so
//!    the host retries setup later,
//! 4. records the live handle and returns a [`RobovacVacuum`] entity
//!    that has already run its first poll.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `robohub-app` and `robohub-domain`.

mod config;
mod entity;
mod error;
#[cfg(test)]
mod test_client;

pub use config::{DEFAULT_NAME, RobovacConfig};
pub use entity::RobovacVacuum;
pub use error::RobovacError;

use std::time::Duration;

use robohub_app::handle::DeviceHandle;
use robohub_app::ports::{VacuumBackend, VacuumClient};
use robohub_app::services::HandleRegistry;
use robohub_domain::error::DeviceError;

/// Time box for the initial connect attempt.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(9);

/// Set up one RoboVac: connect, record its handle, and return the entity
/// with an initial poll already applied.
///
/// Exactly one of two things happens: the entity is returned (and its
/// handle registered under the device's IP address), or an error is
/// returned and nothing is registered.
///
/// # Errors
///
/// Returns [`RobovacError::Config`] for invalid configuration, a
/// not-ready error ([`RobovacError::is_not_ready`]) when the device does
/// not answer within [`CONNECT_TIMEOUT`] or refuses the connection at the
/// OS level, and the underlying [`RobovacError::Device`] for any other
/// vendor-library failure.
pub async fn setup<B>(
    config: &RobovacConfig,
    backend: &B,
    registry: &HandleRegistry<B::Client>,
) -> Result<RobovacVacuum<B::Client>, RobovacError>
where
    B: VacuumBackend,
{
    config.validate()?;

    let address = config.ip_address.clone();
    let local_code = backend.derive_local_code(&config.username, &config.password, &address)?;
    let client = backend.open(&address, local_code)?;
    let handle = DeviceHandle::new(client);

    tracing::debug!(address = %address, "initializing communication with vacuum");

    let connect = handle.call(|client| client.connect());
    match tokio::time::timeout(CONNECT_TIMEOUT, connect).await {
        Ok(Ok(())) => {}
        Ok(Err(DeviceError::Io(source))) => {
            return Err(RobovacError::Unreachable { address, source });
        }
        Ok(Err(err)) => return Err(RobovacError::Device(err)),
        Err(_elapsed) => return Err(RobovacError::ConnectTimeout { address }),
    }

    tracing::info!(address = %address, name = %config.name, "vacuum connected");

    registry.insert(address, handle.clone());

    let entity = RobovacVacuum::new(config.name.clone(), handle);
    entity.update().await;
    Ok(entity)
}
