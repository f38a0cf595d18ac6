use std::cell::RefCell;
use std::rc::Rc;

/// Kind of result the evaluator can report for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Correct symbol within the perfect window.
    Perfect,
    /// Correct symbol within the good window.
    Good,
    /// Correct symbol, but outside both graded windows.
    LateButCorrect,
    /// Wrong symbol while one was expected. The window stays open.
    Wrong,
    /// The expectation window expired with no submission.
    Missed,
    /// Submission arrived while no symbol was expected.
    Rejected,
    /// Submission arrived during the debounce cooldown.
    Suppressed,
}

impl OutcomeKind {
    /// Returns true if this outcome consumes the expected symbol.
    pub fn advances_cursor(self) -> bool {
        matches!(
            self,
            Self::Perfect | Self::Good | Self::LateButCorrect | Self::Missed
        )
    }

    /// Returns true if this outcome counts as a successful hit.
    pub fn is_hit(self) -> bool {
        matches!(self, Self::Perfect | Self::Good | Self::LateButCorrect)
    }

    /// Returns true if this outcome resets the running combo.
    pub fn breaks_combo(self) -> bool {
        matches!(self, Self::Wrong | Self::Missed)
    }

    /// Returns the index for this kind (for array indexing).
    pub fn index(self) -> usize {
        match self {
            Self::Perfect => 0,
            Self::Good => 1,
            Self::LateButCorrect => 2,
            Self::Wrong => 3,
            Self::Missed => 4,
            Self::Rejected => 5,
            Self::Suppressed => 6,
        }
    }
}

/// A single evaluation result delivered to the feedback sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Cursor position the outcome refers to.
    pub symbol_index: usize,
    /// Symbol that was expected at that position.
    pub expected_symbol: String,
    /// What the player actually submitted. None for timeout misses.
    pub submitted_symbol: Option<String>,
    /// Elapsed time since the window opened, for graded and wrong hits.
    pub timing_accuracy: Option<f64>,
}

/// Receiver for evaluation results. The renderer/audio layer implements
/// this; outcomes arrive synchronously, in causal order.
pub trait FeedbackSink {
    fn on_outcome(&mut self, outcome: &Outcome);
}

/// Sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn on_outcome(&mut self, _outcome: &Outcome) {}
}

/// Sink that records every outcome, for hosts and tests that inspect the
/// stream after the fact. Clones share the same backing store.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    outcomes: Rc<RefCell<Vec<Outcome>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.outcomes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.borrow().is_empty()
    }

    /// Kinds of all recorded outcomes, in delivery order.
    pub fn kinds(&self) -> Vec<OutcomeKind> {
        self.outcomes.borrow().iter().map(|o| o.kind).collect()
    }

    /// Drain and return the recorded outcomes.
    pub fn take(&self) -> Vec<Outcome> {
        std::mem::take(&mut self.outcomes.borrow_mut())
    }
}

impl FeedbackSink for RecordingSink {
    fn on_outcome(&mut self, outcome: &Outcome) {
        self.outcomes.borrow_mut().push(outcome.clone());
    }
}
