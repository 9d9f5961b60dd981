//! # robohub-app
//!
//! Application layer — **port definitions** (traits) and the services the
//! host platform provides to device integrations.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement (driven/outbound ports):
//!   - `VacuumClient` — the vendor device-control library surface
//!   - `VacuumBackend` — credential derivation and client construction
//! - Define **driving/inbound ports**:
//!   - `PolledEntity` — what the polling scheduler calls into
//! - Provide host-platform services:
//!   - `DeviceHandle` — shared live client plus blocking-call offload
//!   - `HandleRegistry` — lifecycle-owned address → handle map
//!   - `Poller` — fixed-interval update scheduler
//!
//! ## Dependency rule
//! Depends on `robohub-domain` only (plus `tokio` for task primitives).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod handle;
pub mod ports;
pub mod services;
