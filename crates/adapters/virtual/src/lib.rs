//! # robohub-adapter-virtual
//!
//! Simulated RoboVac backend for testing and demonstration purposes.
//!
//! Implements the vendor-library ports with an in-memory device: command
//! methods move the simulated vacuum through its mode transitions, and
//! `get_status` snapshots it. The daemon wires this backend by default;
//! a vendor-backed implementation of the same ports slots into its place.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `robohub-app` and `robohub-domain`.

mod device;

pub use device::VirtualRobovac;

use robohub_app::ports::{LocalCode, VacuumBackend};
use robohub_domain::error::DeviceError;

/// Backend that fabricates [`VirtualRobovac`] clients.
#[derive(Debug, Clone, Default)]
pub struct VirtualBackend {
    offline: bool,
}

impl VirtualBackend {
    /// A backend whose devices answer normally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose devices never answer, for exercising setup
    /// retries.
    #[must_use]
    pub fn offline() -> Self {
        Self { offline: true }
    }
}

impl VacuumBackend for VirtualBackend {
    type Client = VirtualRobovac;

    fn derive_local_code(
        &self,
        _username: &str,
        _password: &str,
        address: &str,
    ) -> Result<LocalCode, DeviceError> {
        // Obviously fake; real derivation is the vendor library's job.
        Ok(LocalCode::new(format!("virtual-local-code-{address}")))
    }

    fn open(&self, address: &str, _local_code: LocalCode) -> Result<VirtualRobovac, DeviceError> {
        Ok(if self.offline {
            VirtualRobovac::offline(address)
        } else {
            VirtualRobovac::docked(address)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robohub_app::ports::VacuumClient;

    #[test]
    fn should_open_a_reachable_client_by_default() {
        let backend = VirtualBackend::new();
        let code = backend
            .derive_local_code("user", "pass", "10.0.0.2")
            .unwrap();
        let mut client = backend.open("10.0.0.2", code).unwrap();
        assert!(client.connect().is_ok());
    }

    #[test]
    fn should_open_an_unreachable_client_when_offline() {
        let backend = VirtualBackend::offline();
        let code = backend
            .derive_local_code("user", "pass", "10.0.0.2")
            .unwrap();
        let mut client = backend.open("10.0.0.2", code).unwrap();
        let err = client.connect().unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn should_derive_a_code_bound_to_the_address() {
        let backend = VirtualBackend::new();
        let code = backend
            .derive_local_code("user", "pass", "10.0.0.2")
            .unwrap();
        assert_eq!(code.expose(), "virtual-local-code-10.0.0.2");
    }
}
