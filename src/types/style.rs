//! Lexical style metrics

use serde::{Deserialize, Serialize};

/// Style metrics for one non-empty set of messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMetrics {
    /// Mean message length in characters
    pub avg_length: f64,
    /// Total ㅋ/ㅎ/ㅠ/ㅜ glyphs across all messages
    pub emoticon_count: usize,
    /// Fraction of messages containing `?`
    pub question_ratio: f64,
    /// Fraction of messages containing `!`
    pub exclaim_ratio: f64,
}

impl StyleMetrics {
    /// Rounded copy for display (length 2 dp, ratios 3 dp)
    pub fn rounded(&self) -> Self {
        Self {
            avg_length: round_to(self.avg_length, 2),
            emoticon_count: self.emoticon_count,
            question_ratio: round_to(self.question_ratio, 3),
            exclaim_ratio: round_to(self.exclaim_ratio, 3),
        }
    }
}

/// Round to `digits` decimals, exact ties to even (1/16 => 0.062)
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round_ties_even() / factor
}
