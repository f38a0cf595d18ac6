mod error;
mod evaluator_config;

pub use error::ConfigError;
pub use evaluator_config::EvaluatorConfig;
