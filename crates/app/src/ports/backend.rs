//! Vacuum backend port — the vendor library's entry points.

use std::fmt;

use robohub_domain::error::DeviceError;

use super::client::VacuumClient;

/// Vendor-specific token authorising local-network control of a device.
///
/// Derived from account credentials and the device address by the vendor
/// library; opaque to everything else. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct LocalCode(String);

impl LocalCode {
    /// Wrap a derived code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw token, for handing back to the vendor library.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LocalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LocalCode(..)")
    }
}

/// Entry points of the vendor device-control library.
///
/// One backend produces clients for any number of devices. The shipped
/// implementation is the simulated one in `robohub-adapter-virtual`; a
/// vendor-backed implementation satisfies the same contract.
pub trait VacuumBackend {
    /// Client type this backend constructs.
    type Client: VacuumClient;

    /// Derive the local control code for a device.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] when the library cannot derive a code
    /// for the given credentials.
    fn derive_local_code(
        &self,
        username: &str,
        password: &str,
        address: &str,
    ) -> Result<LocalCode, DeviceError>;

    /// Construct a client for the device at `address`.
    ///
    /// Construction is cheap; no I/O happens until
    /// [`VacuumClient::connect`] runs.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] when the library rejects the address or
    /// code outright.
    fn open(&self, address: &str, local_code: LocalCode) -> Result<Self::Client, DeviceError>;
}
