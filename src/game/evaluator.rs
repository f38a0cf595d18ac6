use tracing::{debug, trace};

use crate::config::{ConfigError, EvaluatorConfig};

use super::debounce::DebounceGate;
use super::grade::GradeWindows;
use super::outcome::{FeedbackSink, NullSink, Outcome, OutcomeKind};
use super::stats::RoundStats;

/// Lifecycle phase of the evaluator.
///
/// `Awaiting` expects the symbol at the cursor until the deadline expires.
/// `Rest` covers the stretch after a consumed symbol; the next deadline
/// expiry re-arms the window instead of scoring a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Awaiting,
    Rest,
}

/// Tick-driven evaluator for a repeating sequence of expected symbols.
///
/// The host advances simulated time through `tick` and forwards input
/// events through `submit`; every scored outcome is handed to the
/// registered [`FeedbackSink`] before the call returns. One evaluator
/// runs one round-robin game; instances share nothing.
pub struct SequenceEvaluator {
    sequence: Vec<String>,
    sing_rate: f64,
    windows: GradeWindows,
    cursor: usize,
    remaining: f64,
    phase: Phase,
    debounce: DebounceGate,
    stats: RoundStats,
    sink: Box<dyn FeedbackSink>,
}

impl SequenceEvaluator {
    /// Build an evaluator from a validated configuration.
    pub fn new(config: EvaluatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sequence: config.sequence,
            sing_rate: config.sing_rate,
            windows: GradeWindows::new(config.perfect_timing, config.good_timing),
            cursor: 0,
            remaining: 0.0,
            phase: Phase::Idle,
            debounce: DebounceGate::new(config.cooldown_duration),
            stats: RoundStats::new(),
            sink: Box::new(NullSink),
        })
    }

    /// Register the feedback receiver. Replaces any previous sink.
    pub fn set_sink(&mut self, sink: Box<dyn FeedbackSink>) {
        self.sink = sink;
    }

    /// Begin a round, or restart the running one. Discards in-flight
    /// debounce and deadline state unconditionally.
    pub fn start(&mut self) {
        self.cursor = 0;
        self.remaining = self.sing_rate;
        self.phase = Phase::Awaiting;
        self.debounce.clear();
        self.stats.reset();
        debug!(symbols = self.sequence.len(), "round started");
    }

    /// Advance simulated time. Both countdowns move in the same pass so a
    /// submission later this frame never observes stale cooldown state.
    /// At most one deadline expiry is consumed per call.
    ///
    /// Panics if called before `start`.
    pub fn tick(&mut self, dt: f64) -> Option<Outcome> {
        assert!(
            self.phase != Phase::Idle,
            "tick() called before start()"
        );
        assert!(dt >= 0.0, "tick() requires non-negative elapsed time");

        self.debounce.tick(dt);
        self.remaining -= dt;

        if self.remaining > 0.0 {
            return None;
        }

        match self.phase {
            Phase::Awaiting => {
                let outcome = Outcome {
                    kind: OutcomeKind::Missed,
                    symbol_index: self.cursor,
                    expected_symbol: self.sequence[self.cursor].clone(),
                    submitted_symbol: None,
                    timing_accuracy: None,
                };
                debug!(index = self.cursor, "window expired, symbol missed");
                self.consume_symbol();
                Some(self.emit(outcome))
            }
            Phase::Rest => {
                // Re-arm: a fresh window opens on the current symbol.
                self.remaining = self.sing_rate;
                self.phase = Phase::Awaiting;
                trace!(index = self.cursor, "window re-armed");
                None
            }
            Phase::Idle => unreachable!(),
        }
    }

    /// Evaluate a submitted symbol against the current expectation.
    ///
    /// Panics if called before `start`.
    pub fn submit(&mut self, symbol: &str) -> Outcome {
        assert!(
            self.phase != Phase::Idle,
            "submit() called before start()"
        );

        if self.debounce.is_active() {
            trace!(symbol, "submission suppressed by cooldown");
            return self.emit(self.spam_outcome(OutcomeKind::Suppressed, symbol));
        }

        if self.phase == Phase::Rest {
            trace!(symbol, "submission outside expectation window");
            self.debounce.trigger();
            return self.emit(self.spam_outcome(OutcomeKind::Rejected, symbol));
        }

        // Distance from the window opening, not from a beat center.
        let accuracy = (self.remaining - self.sing_rate).abs();
        let expected = &self.sequence[self.cursor];

        if symbol != expected {
            // The window stays open so the player may retry.
            let outcome = Outcome {
                kind: OutcomeKind::Wrong,
                symbol_index: self.cursor,
                expected_symbol: expected.clone(),
                submitted_symbol: Some(symbol.to_string()),
                timing_accuracy: Some(accuracy),
            };
            debug!(expected = %expected, submitted = symbol, "wrong symbol");
            self.debounce.trigger();
            return self.emit(outcome);
        }

        let kind = self.windows.grade(accuracy).outcome_kind();
        let outcome = Outcome {
            kind,
            symbol_index: self.cursor,
            expected_symbol: expected.clone(),
            submitted_symbol: Some(symbol.to_string()),
            timing_accuracy: Some(accuracy),
        };
        debug!(symbol, accuracy, ?kind, "symbol matched");

        self.consume_symbol();
        self.phase = Phase::Rest;
        self.debounce.trigger();
        self.emit(outcome)
    }

    /// Cursor position of the currently expected symbol.
    pub fn current_cursor(&self) -> usize {
        self.cursor
    }

    /// Symbol the evaluator currently expects.
    pub fn expected_symbol(&self) -> &str {
        &self.sequence[self.cursor]
    }

    pub fn is_awaiting_input(&self) -> bool {
        self.phase == Phase::Awaiting
    }

    /// Seconds left in the current window.
    pub fn remaining_window_time(&self) -> f64 {
        self.remaining.max(0.0)
    }

    pub fn is_cooldown_active(&self) -> bool {
        self.debounce.is_active()
    }

    /// Fraction of the current window already elapsed, in 0.0..=1.0.
    /// Drives the host's timing indicator fill.
    pub fn window_phase(&self) -> f64 {
        ((self.sing_rate - self.remaining) / self.sing_rate).clamp(0.0, 1.0)
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    pub fn rounds_completed(&self) -> u32 {
        self.stats.rounds_completed
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    /// Advance the cursor past a consumed symbol, restarting the round on
    /// wrap-around. The deadline resets either way.
    fn consume_symbol(&mut self) {
        self.cursor += 1;
        if self.cursor >= self.sequence.len() {
            self.cursor = 0;
            self.stats.complete_round();
            debug!(rounds = self.stats.rounds_completed, "sequence completed");
        }
        self.remaining = self.sing_rate;
    }

    fn spam_outcome(&self, kind: OutcomeKind, symbol: &str) -> Outcome {
        Outcome {
            kind,
            symbol_index: self.cursor,
            expected_symbol: self.sequence[self.cursor].clone(),
            submitted_symbol: Some(symbol.to_string()),
            timing_accuracy: None,
        }
    }

    fn emit(&mut self, outcome: Outcome) -> Outcome {
        self.stats.record(outcome.kind);
        self.sink.on_outcome(&outcome);
        outcome
    }
}
