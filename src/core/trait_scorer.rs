//! Trait scorer: four keyword/length heuristics → MBTI-style code
//!
//! Each axis increments exactly one of its two counters, so every code is
//! fully determined by the concatenated text and the message count.

use tracing::debug;

use crate::types::{Axis, AxisScores, TraitResult};
use crate::{
    E_AVG_LENGTH_THRESHOLD, INTUITION_KEYWORDS, JUDGING_KEYWORDS, MESSAGE_SEPARATOR,
    THINKING_KEYWORDS,
};

#[derive(Debug, Default)]
pub struct TraitScorer;

impl TraitScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a speaker's messages. Empty input still yields a code
    /// (short average ⇒ I, no keywords ⇒ S/F/P).
    pub fn infer<S: AsRef<str>>(&self, messages: &[S]) -> TraitResult {
        let text = messages
            .iter()
            .map(|m| m.as_ref())
            .collect::<Vec<_>>()
            .join(MESSAGE_SEPARATOR);
        let avg_length = text.chars().count() as f64 / messages.len().max(1) as f64;

        let mut scores = AxisScores::default();
        scores.bump(Axis::Energy, avg_length > E_AVG_LENGTH_THRESHOLD);
        scores.bump(Axis::Information, contains_any(&text, &INTUITION_KEYWORDS));
        scores.bump(Axis::Decision, contains_any(&text, &THINKING_KEYWORDS));
        scores.bump(Axis::Lifestyle, contains_any(&text, &JUDGING_KEYWORDS));

        let result = TraitResult::from_scores(scores);
        debug!(code = %result.code, avg_length, "scored traits");
        result
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

// =============================================================================
// TESTS
// =============================================================================
