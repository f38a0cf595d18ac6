/// Post-submission suppression gate. Independent countdown from the
/// deadline timer; re-triggering restarts the full duration without
/// stacking.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    duration: f64,
    remaining: f64,
}

impl DebounceGate {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            remaining: 0.0,
        }
    }

    /// Start (or restart) the suppression window.
    pub fn trigger(&mut self) {
        self.remaining = self.duration;
    }

    /// Advance the countdown by elapsed seconds.
    pub fn tick(&mut self, dt: f64) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Discard any in-flight suppression.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }
}
