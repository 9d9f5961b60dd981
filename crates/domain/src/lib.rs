//! # robohub-domain
//!
//! Pure domain model for the robohub home automation system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **vacuum model**: operating modes, fan speeds, supported
//!   features, polled status snapshots, and the cached entity state the
//!   platform reads between polls
//! - Contain all invariant enforcement and domain logic (status
//!   derivation, activity membership, snapshot application)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod attribute;
pub mod error;
pub mod id;
pub mod time;
pub mod vacuum;
