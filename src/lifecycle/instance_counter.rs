// ============================================================================
// Instance Counter
// Process-wide count of live vectors
// ============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of live vectors in this process.
static LIVE_INSTANCES: AtomicUsize = AtomicUsize::new(0);

/// Read-only view of the process-wide live vector count.
///
/// The count starts at zero when the process starts and is only ever
/// mutated by [`InstanceGuard`]: every guard registered increments it and
/// every guard dropped decrements it. It is shared by vectors of every
/// element type.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstanceCounter;

impl InstanceCounter {
    /// Current number of live vectors.
    #[inline]
    pub fn live() -> usize {
        LIVE_INSTANCES.load(Ordering::Acquire)
    }
}

/// Scoped registration with the [`InstanceCounter`].
///
/// A guard is held by every vector. Creating one (including via `clone`)
/// counts one more live instance; dropping it counts one fewer. Because
/// the guard is an owned field, the release runs exactly once on every
/// exit path, including unwinding.
#[derive(Debug)]
pub struct InstanceGuard {
    _private: (),
}

impl InstanceGuard {
    /// Register a new live instance.
    pub(crate) fn register() -> Self {
        let live = LIVE_INSTANCES.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::trace!(live, "vector instance registered");
        Self { _private: () }
    }
}

impl Clone for InstanceGuard {
    fn clone(&self) -> Self {
        Self::register()
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        let live = LIVE_INSTANCES.fetch_sub(1, Ordering::AcqRel) - 1;
        tracing::trace!(live, "vector instance released");
    }
}
