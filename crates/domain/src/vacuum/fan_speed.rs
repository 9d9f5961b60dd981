//! Fan speed settings supported by the device.

use std::fmt;

/// Fan speed setting.
///
/// The device understands exactly two settings, addressed on the wire by
/// the identifiers `"0"` (normal) and `"1"` (max).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanSpeed {
    Normal,
    Max,
}

impl FanSpeed {
    /// Every supported speed, in listing order.
    pub const ALL: [Self; 2] = [Self::Normal, Self::Max];

    /// The wire identifier for this speed.
    #[must_use]
    pub fn as_ident(self) -> &'static str {
        match self {
            Self::Normal => "0",
            Self::Max => "1",
        }
    }

    /// Parse a user- or device-supplied identifier.
    ///
    /// Surrounding whitespace and letter case are ignored; anything that
    /// is not one of the supported identifiers yields `None`.
    #[must_use]
    pub fn from_ident(ident: &str) -> Option<Self> {
        let ident = ident.trim();
        Self::ALL
            .into_iter()
            .find(|speed| ident.eq_ignore_ascii_case(speed.as_ident()))
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ident())
    }
}
