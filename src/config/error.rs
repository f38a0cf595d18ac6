use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("symbol sequence is empty")]
    EmptySequence,

    #[error("sing rate must be positive: {0}")]
    NonPositiveSingRate(f64),

    #[error("perfect timing must be non-negative: {0}")]
    NegativePerfectTiming(f64),

    #[error("good timing {good} is narrower than perfect timing {perfect}")]
    InvertedWindows { perfect: f64, good: f64 },

    #[error("cooldown duration must be non-negative: {0}")]
    NegativeCooldown(f64),
}
