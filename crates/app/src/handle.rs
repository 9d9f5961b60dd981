//! Device handle — shared ownership of a live vacuum client plus the
//! job-offload primitive for its blocking calls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use robohub_domain::error::DeviceError;

use crate::ports::VacuumClient;

/// Shared handle to one vacuum client.
///
/// The vendor library blocks on device I/O, so every call is routed
/// through [`DeviceHandle::call`], which runs it on the blocking thread
/// pool. The inner mutex serialises calls: one device operation at a
/// time, in submission order.
pub struct DeviceHandle<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Clone for DeviceHandle<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: VacuumClient> DeviceHandle<C> {
    /// Wrap a freshly constructed client.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(client)),
        }
    }

    /// Run one blocking device call off the event loop.
    ///
    /// # Errors
    ///
    /// Returns the device error from `op`, or [`DeviceError::Other`] when
    /// the offloaded task itself failed to complete.
    pub async fn call<T, F>(&self, op: F) -> Result<T, DeviceError>
    where
        T: Send + 'static,
        F: FnOnce(&mut C) -> Result<T, DeviceError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        match tokio::task::spawn_blocking(move || {
            let mut client = lock(&inner);
            op(&mut client)
        })
        .await
        {
            Ok(result) => result,
            Err(join_err) => Err(DeviceError::other(join_err)),
        }
    }
}

fn lock<C>(inner: &Mutex<C>) -> MutexGuard<'_, C> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
