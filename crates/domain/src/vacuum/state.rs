//! Cached entity state derived from the latest status snapshot.

use std::collections::HashMap;

use crate::attribute::AttributeValue;
use crate::time::Timestamp;

use super::{FanSpeed, StatusSnapshot};

/// Attribute key under which a non-zero device error code is exposed.
pub const ATTR_ERROR: &str = "error";

/// Display state the platform reads between polls.
///
/// Mutated only by [`VacuumState::apply`] and
/// [`VacuumState::mark_unavailable`]; reads never touch the device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacuumState {
    /// Whether the last poll succeeded.
    pub available: bool,
    /// Battery charge in percent; unset before the first successful poll.
    pub battery_level: Option<u8>,
    /// Human-readable status label.
    pub status: Option<&'static str>,
    /// Whether the vacuum counts as switched on.
    pub is_on: bool,
    /// Last reported fan speed, when it was one of the supported settings.
    pub fan_speed: Option<FanSpeed>,
    /// Extra attributes; holds [`ATTR_ERROR`] while a fault is active.
    pub attributes: HashMap<String, AttributeValue>,
    /// When the last successful poll happened.
    pub last_updated: Option<Timestamp>,
}

impl VacuumState {
    /// Fold a fresh snapshot into the cached state.
    ///
    /// The `error` attribute tracks the snapshot exactly: set while
    /// `error_code` is non-zero, removed once the device reports clean.
    pub fn apply(&mut self, snapshot: &StatusSnapshot, at: Timestamp) {
        self.available = true;
        self.battery_level = Some(snapshot.battery_capacity);
        self.status = Some(snapshot.status_label());
        self.is_on = snapshot.is_active();

        if snapshot.error_code == 0 {
            self.attributes.remove(ATTR_ERROR);
        } else {
            self.attributes.insert(
                ATTR_ERROR.to_string(),
                AttributeValue::Int(i64::from(snapshot.error_code)),
            );
        }

        self.fan_speed = FanSpeed::from_ident(&snapshot.speed);
        self.last_updated = Some(at);
    }

    /// Record a failed poll. Cached readings keep their previous values.
    pub fn mark_unavailable(&mut self) {
        self.available = false;
    }

    /// Look up an extra attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}
