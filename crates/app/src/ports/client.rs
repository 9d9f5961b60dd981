//! Vacuum client port — the vendor device-control library surface.

use robohub_domain::error::DeviceError;
use robohub_domain::vacuum::StatusSnapshot;

/// Handle to one vacuum, as exposed by the vendor library.
///
/// Every method blocks on device I/O; callers must route calls through
/// [`DeviceHandle::call`](crate::handle::DeviceHandle::call) so the event
/// loop stays responsive. The protocol, authentication, and transport
/// behind these methods are entirely the library's business.
pub trait VacuumClient: Send + 'static {
    /// Open the control connection to the device.
    fn connect(&mut self) -> Result<(), DeviceError>;

    /// Fetch a fresh status snapshot.
    fn get_status(&mut self) -> Result<StatusSnapshot, DeviceError>;

    /// Begin a full automatic clean.
    fn start_auto_clean(&mut self) -> Result<(), DeviceError>;

    /// Halt the current activity in place.
    fn stop(&mut self) -> Result<(), DeviceError>;

    /// Send the vacuum back to its charging base.
    fn go_home(&mut self) -> Result<(), DeviceError>;

    /// Make the vacuum chirp so it can be found.
    fn start_find_me(&mut self) -> Result<(), DeviceError>;

    /// Switch the fan to the normal setting.
    fn use_normal_speed(&mut self) -> Result<(), DeviceError>;

    /// Switch the fan to the max setting.
    fn use_max_speed(&mut self) -> Result<(), DeviceError>;
}
