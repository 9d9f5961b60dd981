//! Host-platform services provided to integrations.

pub mod poller;
pub mod registry;

pub use poller::Poller;
pub use registry::HandleRegistry;
