//! Deferred cleanup registry for move-only closures.
//!
//! A small companion to long-running work: callers spawn something (a
//! thread, an I/O operation), register a closure that finalizes it, and
//! later run all registered closures at a synchronization point.
//!
//! Storage is `Box<dyn FnOnce()>`: move-only by contract, so each cleanup
//! runs exactly once and may consume captured resources (for example a
//! `JoinHandle`). State shared between the closure and the caller is
//! captured behind `Rc`/`Arc` to keep it alive until the cleanup runs.

/// Registry of one-shot cleanup closures, run in registration order.
#[derive(Default)]
pub struct CleanupContext {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl CleanupContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cleanup. The closure is consumed when [`run`](Self::run)
    /// executes it.
    pub fn register<F>(&mut self, cleanup: F)
    where
        F: FnOnce() + 'static,
    {
        self.cleanups.push(Box::new(cleanup));
    }

    /// Run and drop all registered cleanups, in registration order. The
    /// registry is empty afterwards and can be reused.
    pub fn run(&mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
    }

    pub fn len(&self) -> usize {
        self.cleanups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleanups.is_empty()
    }
}
