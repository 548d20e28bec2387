//! Output of the statistical model collaborator

use serde::{Deserialize, Serialize};

/// Model-predicted type code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    /// Four-letter code, e.g. "INTJ"
    pub type_code: String,
    /// Probability of `type_code`, 0.0-1.0, 3 decimals
    pub confidence: f64,
}

impl MlPrediction {
    pub fn new(type_code: impl Into<String>, confidence: f64) -> Self {
        Self {
            type_code: type_code.into(),
            confidence: crate::types::round_to(confidence.clamp(0.0, 1.0), 3),
        }
    }
}
