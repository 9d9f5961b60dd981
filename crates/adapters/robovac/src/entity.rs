//! The RoboVac entity adapter.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use robohub_app::handle::DeviceHandle;
use robohub_app::ports::{PolledEntity, VacuumClient};
use robohub_domain::attribute::AttributeValue;
use robohub_domain::error::DeviceError;
use robohub_domain::id::EntityId;
use robohub_domain::time::now;
use robohub_domain::vacuum::{FanSpeed, Features, VacuumState};

/// Entity adapter for one RoboVac.
///
/// Properties are pure reads of state cached by the last poll; actions
/// forward to the device handle and adjust the local on/off flag. No
/// confirmation is awaited from the device beyond the call completing.
pub struct RobovacVacuum<C> {
    id: EntityId,
    name: String,
    handle: DeviceHandle<C>,
    state: Mutex<VacuumState>,
}

impl<C> std::fmt::Debug for RobovacVacuum<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobovacVacuum")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<C: VacuumClient> RobovacVacuum<C> {
    /// Wrap a connected device handle.
    #[must_use]
    pub fn new(name: String, handle: DeviceHandle<C>) -> Self {
        Self {
            id: EntityId::new(),
            name,
            handle,
            state: Mutex::new(VacuumState::default()),
        }
    }

    /// Entity identifier assigned at construction.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Feature flags this entity supports.
    #[must_use]
    pub fn supported_features(&self) -> Features {
        Features::ROBOVAC
    }

    /// Fan speeds the device understands.
    #[must_use]
    pub fn fan_speed_list(&self) -> &'static [FanSpeed] {
        &FanSpeed::ALL
    }

    /// Last reported fan speed.
    #[must_use]
    pub fn fan_speed(&self) -> Option<FanSpeed> {
        self.lock_state().fan_speed
    }

    /// Battery charge in percent; `None` before the first successful poll.
    #[must_use]
    pub fn battery_level(&self) -> Option<u8> {
        self.lock_state().battery_level
    }

    /// Human-readable status label.
    #[must_use]
    pub fn status(&self) -> Option<&'static str> {
        self.lock_state().status
    }

    /// Whether the vacuum counts as switched on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.lock_state().is_on
    }

    /// Whether the last poll succeeded.
    #[must_use]
    pub fn available(&self) -> bool {
        self.lock_state().available
    }

    /// Extra state attributes (the `error` key while a fault is active).
    #[must_use]
    pub fn state_attributes(&self) -> HashMap<String, AttributeValue> {
        self.lock_state().attributes.clone()
    }

    /// Snapshot of the full cached state.
    #[must_use]
    pub fn state(&self) -> VacuumState {
        self.lock_state().clone()
    }

    /// Start a full clean and mark the entity on.
    pub async fn turn_on(&self) {
        if self.command("start_auto_clean", |c| c.start_auto_clean()).await {
            self.lock_state().is_on = true;
        }
    }

    /// Stop, then send the vacuum back to its base.
    pub async fn turn_off(&self) {
        self.stop().await;
        self.return_to_base().await;
    }

    /// Halt the current activity in place.
    pub async fn stop(&self) {
        if self.command("stop", |c| c.stop()).await {
            self.lock_state().is_on = false;
        }
    }

    /// Start a full clean, leaving the on flag cleared.
    pub async fn start(&self) {
        if self.command("start_auto_clean", |c| c.start_auto_clean()).await {
            self.lock_state().is_on = false;
        }
    }

    /// Send the vacuum back to its charging base.
    pub async fn return_to_base(&self) {
        if self.command("go_home", |c| c.go_home()).await {
            self.lock_state().is_on = false;
        }
    }

    /// Make the vacuum chirp so it can be found.
    pub async fn locate(&self) {
        self.command("start_find_me", |c| c.start_find_me()).await;
    }

    /// Change the fan speed.
    ///
    /// Unsupported identifiers are logged and ignored: no device call is
    /// made and the cached speed keeps its previous value. The cache
    /// itself only changes on the next poll.
    pub async fn set_fan_speed(&self, value: &str) {
        let Some(speed) = FanSpeed::from_ident(value) else {
            tracing::error!(value, "no such fan speed available");
            return;
        };

        tracing::debug!(speed = %speed, "setting fan speed");
        match speed {
            FanSpeed::Normal => {
                self.command("use_normal_speed", |c| c.use_normal_speed()).await;
            }
            FanSpeed::Max => {
                self.command("use_max_speed", |c| c.use_max_speed()).await;
            }
        }
    }

    /// Fetch a fresh snapshot and fold it into the cached state.
    ///
    /// Failures are logged and flip the entity to unavailable; they never
    /// reach the scheduler.
    pub async fn update(&self) {
        match self.handle.call(|client| client.get_status()).await {
            Ok(snapshot) => {
                tracing::debug!(?snapshot, "got new state from the vacuum");
                self.lock_state().apply(&snapshot, now());
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to update vacuum status");
                self.lock_state().mark_unavailable();
            }
        }
    }

    /// Forward one command to the device, reporting success.
    async fn command<F>(&self, op_name: &'static str, op: F) -> bool
    where
        F: FnOnce(&mut C) -> Result<(), DeviceError> + Send + 'static,
    {
        match self.handle.call(op).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(command = op_name, error = %err, "vacuum command failed");
                false
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, VacuumState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: VacuumClient> PolledEntity for RobovacVacuum<C> {
    fn update(&self) -> impl Future<Output = ()> + Send {
        // Resolves to the inherent method.
        self.update()
    }
}
