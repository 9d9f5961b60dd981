//! Scripted vacuum client and backend used by the unit tests.

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use robohub_app::ports::{LocalCode, VacuumBackend, VacuumClient};
use robohub_domain::error::DeviceError;
use robohub_domain::vacuum::StatusSnapshot;

/// How a scripted `connect` behaves.
enum ConnectBehaviour {
    Accept,
    Refuse,
    /// Block until the paired sender is dropped or signalled.
    Gate(Receiver<()>),
}

/// Shared script and call log, kept by the test while the client moves
/// into the device handle.
pub struct FakeState {
    calls: Mutex<Vec<&'static str>>,
    connect: Mutex<ConnectBehaviour>,
    status: Mutex<Option<StatusSnapshot>>,
    commands_fail: Mutex<bool>,
}

impl FakeState {
    /// A reachable device reporting `snapshot` on every poll.
    pub fn online(snapshot: StatusSnapshot) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            connect: Mutex::new(ConnectBehaviour::Accept),
            status: Mutex::new(Some(snapshot)),
            commands_fail: Mutex::new(false),
        })
    }

    /// A device that refuses its control connection.
    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            connect: Mutex::new(ConnectBehaviour::Refuse),
            status: Mutex::new(None),
            commands_fail: Mutex::new(false),
        })
    }

    /// A device whose `connect` hangs until `gate` is released.
    pub fn hanging(gate: Receiver<()>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            connect: Mutex::new(ConnectBehaviour::Gate(gate)),
            status: Mutex::new(None),
            commands_fail: Mutex::new(false),
        })
    }

    /// Every device method called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        lock(&self.calls).clone()
    }

    /// Reset the call log.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Make subsequent polls fail.
    pub fn fail_status(&self) {
        *lock(&self.status) = None;
    }

    /// Change the snapshot subsequent polls report.
    pub fn set_status(&self, snapshot: StatusSnapshot) {
        *lock(&self.status) = Some(snapshot);
    }

    /// Make subsequent command calls fail.
    pub fn fail_commands(&self) {
        *lock(&self.commands_fail) = true;
    }

    fn record(&self, call: &'static str) -> Result<(), DeviceError> {
        lock(&self.calls).push(call);
        if *lock(&self.commands_fail) {
            Err(DeviceError::other(std::io::Error::other(
                "scripted command failure",
            )))
        } else {
            Ok(())
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Client half of the script; every method defers to [`FakeState`].
pub struct FakeVacuum {
    state: Arc<FakeState>,
}

impl FakeVacuum {
    pub fn new(state: &Arc<FakeState>) -> Self {
        Self {
            state: Arc::clone(state),
        }
    }
}

impl VacuumClient for FakeVacuum {
    fn connect(&mut self) -> Result<(), DeviceError> {
        lock(&self.state.calls).push("connect");
        let behaviour = std::mem::replace(&mut *lock(&self.state.connect), ConnectBehaviour::Accept);
        match behaviour {
            ConnectBehaviour::Accept => Ok(()),
            ConnectBehaviour::Refuse => Err(DeviceError::Io(std::io::Error::from(
                std::io::ErrorKind::ConnectionRefused,
            ))),
            ConnectBehaviour::Gate(gate) => {
                let _ = gate.recv();
                Ok(())
            }
        }
    }

    fn get_status(&mut self) -> Result<StatusSnapshot, DeviceError> {
        lock(&self.state.calls).push("get_status");
        lock(&self.state.status).clone().ok_or_else(|| {
            DeviceError::other(std::io::Error::other("scripted status failure"))
        })
    }

    fn start_auto_clean(&mut self) -> Result<(), DeviceError> {
        self.state.record("start_auto_clean")
    }

    fn stop(&mut self) -> Result<(), DeviceError> {
        self.state.record("stop")
    }

    fn go_home(&mut self) -> Result<(), DeviceError> {
        self.state.record("go_home")
    }

    fn start_find_me(&mut self) -> Result<(), DeviceError> {
        self.state.record("start_find_me")
    }

    fn use_normal_speed(&mut self) -> Result<(), DeviceError> {
        self.state.record("use_normal_speed")
    }

    fn use_max_speed(&mut self) -> Result<(), DeviceError> {
        self.state.record("use_max_speed")
    }
}

/// Backend half of the script.
pub struct FakeBackend {
    state: Arc<FakeState>,
}

impl FakeBackend {
    pub fn new(state: &Arc<FakeState>) -> Self {
        Self {
            state: Arc::clone(state),
        }
    }
}

impl VacuumBackend for FakeBackend {
    type Client = FakeVacuum;

    fn derive_local_code(
        &self,
        username: &str,
        _password: &str,
        address: &str,
    ) -> Result<LocalCode, DeviceError> {
        Ok(LocalCode::new(format!("fake-{username}-{address}")))
    }

    fn open(&self, _address: &str, _local_code: LocalCode) -> Result<FakeVacuum, DeviceError> {
        Ok(FakeVacuum::new(&self.state))
    }
}
