//! RoboVac adapter error types.

use robohub_domain::error::{DeviceError, ValidationError};

/// Errors specific to the RoboVac adapter.
#[derive(Debug, thiserror::Error)]
pub enum RobovacError {
    /// The device did not answer within the connect time box.
    #[error("connection to {address} timed out")]
    ConnectTimeout {
        /// IP address of the unresponsive device.
        address: String,
    },

    /// An OS-level failure while opening the control connection.
    #[error("could not reach {address}")]
    Unreachable {
        /// IP address of the unreachable device.
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The device configuration is invalid.
    #[error("invalid RoboVac configuration")]
    Config(#[from] ValidationError),

    /// The vendor library failed outside the connect path.
    #[error("device error")]
    Device(#[from] DeviceError),
}

impl RobovacError {
    /// Whether setup should be retried later rather than treated as fatal.
    ///
    /// True for the connect time-out and OS-level connection failures;
    /// the host reacts by scheduling another setup attempt.
    #[must_use]
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::ConnectTimeout { .. } | Self::Unreachable { .. })
    }
}
