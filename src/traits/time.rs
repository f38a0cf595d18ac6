/// Abstraction over time sources.
/// Implementations: SystemClock (production), ManualClock (testing).
pub trait TimeProvider {
    /// Seconds elapsed since an arbitrary epoch. Must be monotonic.
    fn now_seconds(&self) -> f64;
}

/// Wall-clock source backed by std::time::Instant.
pub struct SystemClock {
    start: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemClock {
    fn now_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for deterministic testing.
pub struct ManualClock {
    current: std::cell::Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            current: std::cell::Cell::new(0.0),
        }
    }

    pub fn set(&self, seconds: f64) {
        self.current.set(seconds);
    }

    pub fn advance(&self, delta: f64) {
        self.current.set(self.current.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.current.get()
    }
}

// Shared-ownership clocks, so a host can keep a handle to the clock it
// hands to a driver.
impl<T: TimeProvider + ?Sized> TimeProvider for std::rc::Rc<T> {
    fn now_seconds(&self) -> f64 {
        (**self).now_seconds()
    }
}

impl<T: TimeProvider + ?Sized> TimeProvider for std::sync::Arc<T> {
    fn now_seconds(&self) -> f64 {
        (**self).now_seconds()
    }
}
