#![forbid(unsafe_code)]

//! Monotonic time source for settle delays and frame-wait polling.
//!
//! The guide never calls `Instant::now()` directly; all time flows through
//! [`Clock`] so tests can drive timers deterministically with a
//! [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use web_time::{Duration, Instant};

/// Monotonic clock abstraction.
pub trait Clock {
    /// Current instant. Must never go backwards.
    fn now(&self) -> Instant;
}

/// Wall clock backed by `web_time::Instant` (native and wasm).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for tests and replay.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the guide.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Start at the current wall-clock instant.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start at a specific instant.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Instant {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
