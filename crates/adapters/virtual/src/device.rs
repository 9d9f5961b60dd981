//! Simulated RoboVac device.

use robohub_app::ports::VacuumClient;
use robohub_domain::error::DeviceError;
use robohub_domain::vacuum::{CHARGER_ACTIVE, FanSpeed, Mode, StatusSnapshot};

/// In-memory stand-in for a RoboVac.
///
/// Command methods mutate the simulated device the way the real one
/// reacts; `get_status` snapshots the current state and then advances the
/// simulation one step (battery drain while cleaning, charge while
/// docked, arrival after returning).
#[derive(Debug)]
pub struct VirtualRobovac {
    address: String,
    reachable: bool,
    connected: bool,
    mode: Mode,
    charging: bool,
    battery_capacity: u8,
    error_code: u32,
    speed: FanSpeed,
}

impl VirtualRobovac {
    /// A vacuum sitting on its base, fully charged.
    #[must_use]
    pub fn docked(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            reachable: true,
            connected: false,
            mode: Mode::Stopped,
            charging: true,
            battery_capacity: 100,
            error_code: 0,
            speed: FanSpeed::Normal,
        }
    }

    /// A vacuum that never answers its control connection.
    #[must_use]
    pub fn offline(address: impl Into<String>) -> Self {
        Self {
            reachable: false,
            ..Self::docked(address)
        }
    }

    /// Inject a device fault code, as a real unit would report after
    /// getting stuck.
    pub fn set_error_code(&mut self, error_code: u32) {
        self.error_code = error_code;
    }

    fn ensure_connected(&self) -> Result<(), DeviceError> {
        if self.connected {
            Ok(())
        } else {
            Err(DeviceError::other(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "not connected",
            )))
        }
    }

    fn step(&mut self) {
        if self.charging {
            self.battery_capacity = self.battery_capacity.saturating_add(1).min(100);
        } else if self.mode.is_cleaning() {
            self.battery_capacity = self.battery_capacity.saturating_sub(1).max(1);
        }

        if self.mode == Mode::Returning {
            self.mode = Mode::Stopped;
            self.charging = true;
        }
    }
}

impl VacuumClient for VirtualRobovac {
    fn connect(&mut self) -> Result<(), DeviceError> {
        if !self.reachable {
            return Err(DeviceError::Io(std::io::Error::new(
                std::io::ErrorKind::HostUnreachable,
                format!("no route to {}", self.address),
            )));
        }
        self.connected = true;
        tracing::debug!(address = %self.address, "virtual vacuum connected");
        Ok(())
    }

    fn get_status(&mut self) -> Result<StatusSnapshot, DeviceError> {
        self.ensure_connected()?;
        let snapshot = StatusSnapshot {
            battery_capacity: self.battery_capacity,
            mode: self.mode.as_raw(),
            charger_status: if self.charging { CHARGER_ACTIVE } else { 0 },
            error_code: self.error_code,
            speed: self.speed.as_ident().to_string(),
        };
        self.step();
        Ok(snapshot)
    }

    fn start_auto_clean(&mut self) -> Result<(), DeviceError> {
        self.ensure_connected()?;
        self.mode = Mode::Cleaning;
        self.charging = false;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DeviceError> {
        self.ensure_connected()?;
        self.mode = Mode::Stopped;
        Ok(())
    }

    fn go_home(&mut self) -> Result<(), DeviceError> {
        self.ensure_connected()?;
        self.mode = Mode::Returning;
        self.charging = false;
        Ok(())
    }

    fn start_find_me(&mut self) -> Result<(), DeviceError> {
        self.ensure_connected()?;
        tracing::debug!(address = %self.address, "virtual vacuum chirps");
        Ok(())
    }

    fn use_normal_speed(&mut self) -> Result<(), DeviceError> {
        self.ensure_connected()?;
        self.speed = FanSpeed::Normal;
        Ok(())
    }

    fn use_max_speed(&mut self) -> Result<(), DeviceError> {
        self.ensure_connected()?;
        self.speed = FanSpeed::Max;
        Ok(())
    }
}
