//! Operating mode reported by the vacuum.

use std::fmt;

/// Activity the vacuum is currently engaged in.
///
/// The device reports this as a small integer; values outside the known
/// set map to [`Mode::Unknown`] so a firmware surprise never aborts a
/// poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Stopped,
    SpotCleaning,
    Cleaning,
    Returning,
    EdgeCleaning,
    SingleRoom,
    Unknown(u8),
}

impl Mode {
    /// Map a raw wire value onto a mode.
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Stopped,
            1 => Self::SpotCleaning,
            2 => Self::Cleaning,
            3 => Self::Returning,
            4 => Self::EdgeCleaning,
            5 => Self::SingleRoom,
            other => Self::Unknown(other),
        }
    }

    /// The raw wire value.
    #[must_use]
    pub fn as_raw(self) -> u8 {
        match self {
            Self::Stopped => 0,
            Self::SpotCleaning => 1,
            Self::Cleaning => 2,
            Self::Returning => 3,
            Self::EdgeCleaning => 4,
            Self::SingleRoom => 5,
            Self::Unknown(other) => other,
        }
    }

    /// Human-readable status label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::SpotCleaning => "Spot cleaning",
            Self::Cleaning => "Cleaning",
            Self::Returning => "Returning to charging base",
            Self::EdgeCleaning => "Edge cleaning",
            Self::SingleRoom => "Cleaning single room",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Whether this mode counts as actively cleaning.
    #[must_use]
    pub fn is_cleaning(self) -> bool {
        matches!(
            self,
            Self::SpotCleaning | Self::Cleaning | Self::EdgeCleaning | Self::SingleRoom
        )
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
