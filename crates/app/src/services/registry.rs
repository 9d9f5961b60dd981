//! Device-handle registry — owns the live handles for configured devices.
//!
//! One entry per device address, recorded at setup time and held for the
//! lifetime of the process. The daemon owns the registry and clears it on
//! shutdown, so there is no process-global state to leak across reloads.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::handle::DeviceHandle;

/// Address-keyed map of live device handles.
pub struct HandleRegistry<C> {
    handles: Mutex<HashMap<String, DeviceHandle<C>>>,
}

impl<C> Default for HandleRegistry<C> {
    fn default() -> Self {
        Self {
            handles: Mutex::new(HashMap::new()),
        }
    }
}

impl<C> HandleRegistry<C> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the handle for `address`, replacing any previous one.
    pub fn insert(&self, address: impl Into<String>, handle: DeviceHandle<C>) {
        self.lock().insert(address.into(), handle);
    }

    /// Handle for `address`, if that device finished setup.
    #[must_use]
    pub fn get(&self, address: &str) -> Option<DeviceHandle<C>> {
        self.lock().get(address).cloned()
    }

    /// Forget the handle for `address`.
    pub fn remove(&self, address: &str) -> Option<DeviceHandle<C>> {
        self.lock().remove(address)
    }

    /// Drop every handle. Called when the integration unloads.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no device is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, DeviceHandle<C>>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
