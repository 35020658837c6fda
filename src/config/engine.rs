//! Evaluation engine configuration

use serde::Deserialize;

use crate::domain::evaluator::checklist::EvaluationPolicy;
use super::error::ValidationError;

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// How checklist criteria are traversed after a failure.
    #[serde(default)]
    pub policy: EvaluationPolicy,

    /// How many ranked matches a rank-all run reports.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    3
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: EvaluationPolicy::default(),
            top_n: default_top_n(),
        }
    }
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopN);
        }
        Ok(())
    }
}
