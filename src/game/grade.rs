use super::OutcomeKind;

/// Grade for a correctly matched symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchGrade {
    Perfect,
    Good,
    Late,
}

impl MatchGrade {
    pub fn outcome_kind(self) -> OutcomeKind {
        match self {
            Self::Perfect => OutcomeKind::Perfect,
            Self::Good => OutcomeKind::Good,
            Self::Late => OutcomeKind::LateButCorrect,
        }
    }
}

/// Tiered accuracy windows in seconds. Accuracy is measured from the
/// opening of the expectation window; window boundaries are inclusive.
#[derive(Debug, Clone)]
pub struct GradeWindows {
    perfect: f64,
    good: f64,
}

impl GradeWindows {
    /// `good` must be >= `perfect`; config validation enforces this.
    pub fn new(perfect: f64, good: f64) -> Self {
        debug_assert!(good >= perfect);
        Self { perfect, good }
    }

    /// Grade the distance of a submission from the window opening.
    /// A correct symbol always grades; past the good window it is Late.
    pub fn grade(&self, accuracy: f64) -> MatchGrade {
        if accuracy <= self.perfect {
            MatchGrade::Perfect
        } else if accuracy <= self.good {
            MatchGrade::Good
        } else {
            MatchGrade::Late
        }
    }
}
