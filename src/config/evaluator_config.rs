use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Round configuration for the sequence evaluator.
/// All durations are in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Ordered symbols the player must reproduce. Immutable for a round.
    #[serde(default = "default_sequence")]
    pub sequence: Vec<String>,
    /// Length of one expectation window.
    #[serde(default = "default_sing_rate")]
    pub sing_rate: f64,
    /// Accuracy threshold for a Perfect grade.
    #[serde(default = "default_perfect_timing")]
    pub perfect_timing: f64,
    /// Accuracy threshold for a Good grade. Must be >= perfect_timing.
    #[serde(default = "default_good_timing")]
    pub good_timing: f64,
    /// Suppression window armed after any accepted submission.
    #[serde(default = "default_cooldown")]
    pub cooldown_duration: f64,
}

fn default_sequence() -> Vec<String> {
    ["A", "B", "C", "D"].map(String::from).to_vec()
}

fn default_sing_rate() -> f64 {
    2.0
}

fn default_perfect_timing() -> f64 {
    0.1
}

fn default_good_timing() -> f64 {
    0.3
}

fn default_cooldown() -> f64 {
    0.3
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            sequence: default_sequence(),
            sing_rate: default_sing_rate(),
            perfect_timing: default_perfect_timing(),
            good_timing: default_good_timing(),
            cooldown_duration: default_cooldown(),
        }
    }
}

impl EvaluatorConfig {
    /// Check the invariants required by the evaluator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        if self.sing_rate <= 0.0 || !self.sing_rate.is_finite() {
            return Err(ConfigError::NonPositiveSingRate(self.sing_rate));
        }
        if self.perfect_timing < 0.0 {
            return Err(ConfigError::NegativePerfectTiming(self.perfect_timing));
        }
        if self.good_timing < self.perfect_timing {
            return Err(ConfigError::InvertedWindows {
                perfect: self.perfect_timing,
                good: self.good_timing,
            });
        }
        if self.cooldown_duration < 0.0 {
            return Err(ConfigError::NegativeCooldown(self.cooldown_duration));
        }
        Ok(())
    }

    /// Load a validated configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
