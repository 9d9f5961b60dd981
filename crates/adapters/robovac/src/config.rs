//! RoboVac integration configuration.

use serde::Deserialize;

use robohub_domain::error::ValidationError;

/// Default display name for a configured vacuum.
pub const DEFAULT_NAME: &str = "RoboVac";

/// Configuration for one RoboVac device.
#[derive(Debug, Clone, Deserialize)]
pub struct RobovacConfig {
    /// Display name for the entity.
    #[serde(default = "default_name")]
    pub name: String,
    /// IP address of the vacuum on the local network.
    pub ip_address: String,
    /// Vendor account username.
    pub username: String,
    /// Vendor account password.
    pub password: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl RobovacConfig {
    /// Check the invariants the rest of the integration relies on.
    ///
    /// Runs once at load time; address, username, and password must be
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ip_address.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "ip_address" });
        }
        if self.username.is_empty() {
            return Err(ValidationError::EmptyField { field: "username" });
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyField { field: "password" });
        }
        Ok(())
    }
}
