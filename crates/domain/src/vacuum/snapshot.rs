//! Polled status snapshot.

use super::Mode;

/// Raw charger status value meaning "docked and charging".
pub const CHARGER_ACTIVE: u8 = 1;

/// One polled reading of device status.
///
/// Produced fresh by every poll; the entity keeps only the most recent
/// one. Fields mirror what the vendor library reports, raw values
/// included, so nothing is lost between the wire and the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Battery charge, in percent.
    pub battery_capacity: u8,
    /// Raw operating mode (see [`Mode::from_raw`]).
    pub mode: u8,
    /// Charger status; [`CHARGER_ACTIVE`] means charging.
    pub charger_status: u8,
    /// Device error code; zero means no error.
    pub error_code: u32,
    /// Fan speed identifier as reported by the device.
    pub speed: String,
}

impl StatusSnapshot {
    /// Whether the vacuum is docked and charging.
    #[must_use]
    pub fn is_charging(&self) -> bool {
        self.charger_status == CHARGER_ACTIVE
    }

    /// The operating mode.
    #[must_use]
    pub fn operating_mode(&self) -> Mode {
        Mode::from_raw(self.mode)
    }

    /// Human-readable status.
    ///
    /// Charging takes precedence over whatever mode the device reports.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_charging() {
            "Charging"
        } else {
            self.operating_mode().label()
        }
    }

    /// Whether the vacuum counts as switched on.
    ///
    /// Activity follows the mode alone; a vacuum reported as charging
    /// mid-clean would still count as on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.operating_mode().is_cleaning()
    }
}
