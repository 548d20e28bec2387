//! Style analyzer: message length, emoticon glyphs, ?/! usage

use crate::types::StyleMetrics;
use crate::EMOTICON_GLYPHS;

#[derive(Debug, Default)]
pub struct StyleAnalyzer;

impl StyleAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Metrics for a speaker's messages, `None` for an empty set
    pub fn compute<S: AsRef<str>>(&self, messages: &[S]) -> Option<StyleMetrics> {
        if messages.is_empty() {
            return None;
        }
        let total = messages.len() as f64;

        let mut chars = 0usize;
        let mut emoticon_count = 0usize;
        let mut questions = 0usize;
        let mut exclaims = 0usize;

        for message in messages {
            let message = message.as_ref();
            chars += message.chars().count();
            emoticon_count += message.chars().filter(|c| EMOTICON_GLYPHS.contains(c)).count();
            if message.contains('?') {
                questions += 1;
            }
            if message.contains('!') {
                exclaims += 1;
            }
        }

        Some(StyleMetrics {
            avg_length: chars as f64 / total,
            emoticon_count,
            question_ratio: questions as f64 / total,
            exclaim_ratio: exclaims as f64 / total,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
