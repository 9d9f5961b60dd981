//! Polled entity port — what the polling scheduler drives.

use std::future::Future;

/// An entity whose state is refreshed by periodic polling.
///
/// `update` must never panic or surface an error to the scheduler;
/// implementations log failures and adjust their own availability.
pub trait PolledEntity: Send + Sync {
    /// Refresh cached state from the device.
    fn update(&self) -> impl Future<Output = ()> + Send;
}

impl<T: PolledEntity> PolledEntity for std::sync::Arc<T> {
    fn update(&self) -> impl Future<Output = ()> + Send {
        (**self).update()
    }
}
