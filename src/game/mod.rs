mod debounce;
mod driver;
mod evaluator;
mod grade;
mod outcome;
mod stats;

pub use debounce::DebounceGate;
pub use driver::RoundDriver;
pub use evaluator::SequenceEvaluator;
pub use grade::{GradeWindows, MatchGrade};
pub use outcome::{FeedbackSink, NullSink, Outcome, OutcomeKind, RecordingSink};
pub use stats::RoundStats;
