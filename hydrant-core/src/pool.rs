
//! The instance-pooling switch.
//!
//! Hydrators may deduplicate identical entities by key in a process-wide
//! identity pool. The pool's storage and eviction live with the hydrator
//! layer; this module only carries the enable/disable toggle the streaming
//! iterator governs for the lifetime of a traversal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Toggle contract for the instance pool.
///
/// The streaming iterator calls [`disable`](PoolingControl::disable) when it
/// is created, remembers the prior state, and calls
/// [`enable`](PoolingControl::enable) exactly once when the result set is
/// exhausted — and only if pooling had been enabled before. Passing the
/// switch in as a service object keeps the capture/restore pairing
/// unit-testable in isolation from any data source.
pub trait PoolingControl {
    /// Disable pooling, returning whether it was enabled beforehand.
    fn disable(&self) -> bool;

    /// Re-enable pooling.
    fn enable(&self);
}

/// The atomic-flag implementation of [`PoolingControl`].
///
/// [`process`] exposes the instance shared by every consumer in this
/// process; independent instances can be created for tests or for pools
/// scoped narrower than the process.
pub struct AtomicPooling {
    enabled: AtomicBool,
}

impl AtomicPooling {
    pub const fn new(enabled: bool) -> Self {
        AtomicPooling {
            enabled: AtomicBool::new(enabled),
        }
    }

    /// Whether pooling is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl PoolingControl for AtomicPooling {
    fn disable(&self) -> bool {
        self.enabled.swap(false, Ordering::SeqCst)
    }

    fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }
}

impl<P: PoolingControl + ?Sized> PoolingControl for &P {
    fn disable(&self) -> bool {
        (**self).disable()
    }

    fn enable(&self) {
        (**self).enable()
    }
}

impl<P: PoolingControl + ?Sized> PoolingControl for Arc<P> {
    fn disable(&self) -> bool {
        (**self).disable()
    }

    fn enable(&self) {
        (**self).enable()
    }
}

static PROCESS: AtomicPooling = AtomicPooling::new(true);

/// The process-wide pooling switch. Pooling starts enabled.
pub fn process() -> &'static AtomicPooling {
    &PROCESS
}
