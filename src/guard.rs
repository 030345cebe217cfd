//! Debug-only exclusive-access guard.
//!
//! The map runs user code (`K: Eq`/`K: Hash`) while probing its index, and
//! its two internal structures are only transiently consistent during a
//! mutation. This guard detects accidental nested entry from such user code:
//! in debug builds the second entry panics, in release builds the whole
//! thing compiles to a no-op.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-map access tracker. Public entry points open a scope with
/// `let _g = self.guard.enter();`.
#[derive(Debug, Default)]
pub(crate) struct AccessGuard {
    #[cfg(debug_assertions)]
    active: Cell<bool>,
    // !Send + !Sync, matching the single-owner design of the map.
    _nosend: PhantomData<*mut ()>,
}

impl AccessGuard {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            active: Cell::new(false),
            _nosend: PhantomData,
        }
    }

    /// Open a guarded scope. Panics in debug builds if a scope is already
    /// open on the same map.
    #[inline]
    pub(crate) fn enter(&self) -> AccessScope<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.active.get(),
                "nested entry into RandomAccessMap while it is mid-operation"
            );
            self.active.set(true);
            return AccessScope { owner: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return AccessScope { _z: PhantomData };
        }
    }
}

/// RAII scope returned by [`AccessGuard::enter`].
pub(crate) struct AccessScope<'a> {
    #[cfg(debug_assertions)]
    owner: &'a AccessGuard,
    #[cfg(not(debug_assertions))]
    _z: PhantomData<&'a ()>,
}

impl<'a> Drop for AccessScope<'a> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.owner.active.set(false);
    }
}
