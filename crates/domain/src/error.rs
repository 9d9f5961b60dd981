//! Common error types used across the workspace.

use std::error::Error as StdError;

/// Violations of configuration or input invariants.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A required string field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A numeric field must be strictly positive.
    #[error("{field} must be greater than zero")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Failures surfaced by the vendor device-control library.
///
/// The library is a black box; its failures are classified only as far
/// as the integration needs to react to them.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// An OS-level I/O failure while talking to the device.
    #[error("device I/O failed")]
    Io(#[from] std::io::Error),

    /// The device rejected the derived local code.
    #[error("device rejected credentials: {0}")]
    Auth(String),

    /// Any other failure reported by the library, kept opaque.
    #[error("device call failed")]
    Other(#[source] Box<dyn StdError + Send + Sync>),
}

impl DeviceError {
    /// Wrap an arbitrary library error.
    pub fn other<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Other(Box::new(err))
    }

    /// Whether this is an OS-level connection failure.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
