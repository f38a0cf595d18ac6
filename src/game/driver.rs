use crate::traits::TimeProvider;

use super::evaluator::SequenceEvaluator;
use super::outcome::Outcome;

/// Pumps an evaluator from a wall clock. Hosts call `update` once per
/// frame; elapsed time between calls becomes the evaluator's tick.
pub struct RoundDriver<T: TimeProvider> {
    evaluator: SequenceEvaluator,
    clock: T,
    last_seconds: f64,
}

impl<T: TimeProvider> RoundDriver<T> {
    pub fn new(evaluator: SequenceEvaluator, clock: T) -> Self {
        Self {
            evaluator,
            clock,
            last_seconds: 0.0,
        }
    }

    /// Start (or restart) the round at the clock's current instant.
    pub fn start(&mut self) {
        self.last_seconds = self.clock.now_seconds();
        self.evaluator.start();
    }

    /// Advance the round by the time elapsed since the previous call.
    /// Returns a timeout miss if one was scored this frame.
    pub fn update(&mut self) -> Option<Outcome> {
        let now = self.clock.now_seconds();
        let dt = (now - self.last_seconds).max(0.0);
        self.last_seconds = now;
        self.evaluator.tick(dt)
    }

    /// Forward a player submission to the evaluator.
    pub fn submit(&mut self, symbol: &str) -> Outcome {
        self.evaluator.submit(symbol)
    }

    pub fn evaluator(&self) -> &SequenceEvaluator {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut SequenceEvaluator {
        &mut self.evaluator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvaluatorConfig;
    use crate::game::OutcomeKind;
    use crate::traits::ManualClock;

    fn driver() -> RoundDriver<ManualClock> {
        let config = EvaluatorConfig {
            sequence: vec!["A".to_string(), "B".to_string()],
            sing_rate: 1.0,
            perfect_timing: 0.1,
            good_timing: 0.3,
            cooldown_duration: 0.2,
        };
        let evaluator = SequenceEvaluator::new(config).unwrap();
        RoundDriver::new(evaluator, ManualClock::new())
    }

    #[test]
    fn update_converts_clock_delta_to_tick() {
        let mut driver = driver();
        driver.start();
        driver.clock.advance(0.4);
        assert!(driver.update().is_none());
        assert!((driver.evaluator().remaining_window_time() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn update_reports_timeout_miss() {
        let mut driver = driver();
        driver.start();
        driver.clock.advance(1.01);
        let outcome = driver.update().unwrap();
        assert_eq!(outcome.kind, OutcomeKind::Missed);
        assert_eq!(driver.evaluator().current_cursor(), 1);
    }

    #[test]
    fn submission_between_updates_is_graded() {
        let mut driver = driver();
        driver.start();
        driver.clock.advance(0.05);
        driver.update();
        let outcome = driver.submit("A");
        assert_eq!(outcome.kind, OutcomeKind::Perfect);
    }

    #[test]
    fn restart_rebases_the_clock() {
        let mut driver = driver();
        driver.start();
        driver.clock.advance(5.0);
        driver.start();
        assert!(driver.update().is_none());
        assert!((driver.evaluator().remaining_window_time() - 1.0).abs() < 1e-9);
    }
}
