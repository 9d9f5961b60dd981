//! Vacuum domain model — operating modes, fan speeds, supported
//! features, polled status snapshots, and the cached entity state
//! derived from them.

mod fan_speed;
mod features;
mod mode;
mod snapshot;
mod state;

pub use fan_speed::FanSpeed;
pub use features::Features;
pub use mode::Mode;
pub use snapshot::{CHARGER_ACTIVE, StatusSnapshot};
pub use state::{ATTR_ERROR, VacuumState};
