//! Emotion classifier: first-match keyword lexicon
//!
//! The lexicon is an ordered list. A message takes the label of the first
//! entry with any keyword occurring in it; messages matching nothing are
//! neutral. Keyword order inside and across entries is significant.

use std::collections::BTreeMap;

use tracing::debug;

use crate::types::{round_to, Emotion, EmotionResult};
use crate::{DISTRIBUTION_DECIMALS, TOP_EMOTIONS};

/// Ordered (label, keywords) lexicon. Neutral is implicit and always last.
pub const EMOTION_LEXICON: [(Emotion, &[&str]); 4] = [
    (
        Emotion::Joy,
        &["좋아", "행복", "재밌", "웃기", "최고", "ㅋㅋ", "ㅎㅎ", "개꿀", "득템"],
    ),
    (
        Emotion::Sadness,
        &["우울", "슬프", "힘들", "눈물", "외롭", "ㅠ", "ㅜ", "허무", "현타"],
    ),
    (
        Emotion::Anger,
        &["짜증", "화나", "빡치", "열받", "극혐", "개빡", "환장"],
    ),
    (
        Emotion::Anxiety,
        &["걱정", "걱정되", "불안", "초조", "긴장", "떨리", "조마조마"],
    ),
];

#[derive(Debug, Default)]
pub struct EmotionClassifier;

impl EmotionClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Label of a single message
    pub fn classify(&self, message: &str) -> Emotion {
        EMOTION_LEXICON
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| message.contains(kw)))
            .map(|(emotion, _)| *emotion)
            .unwrap_or(Emotion::Neutral)
    }

    /// Distribution, top labels, first examples and summary.
    /// Empty input gives `EmotionResult::empty()`.
    pub fn analyze<S: AsRef<str>>(&self, messages: &[S]) -> EmotionResult {
        if messages.is_empty() {
            return EmotionResult::empty();
        }

        let mut counts: BTreeMap<Emotion, usize> = BTreeMap::new();
        let mut examples: BTreeMap<Emotion, String> = BTreeMap::new();

        for message in messages {
            let message = message.as_ref();
            let emotion = self.classify(message);
            *counts.entry(emotion).or_insert(0) += 1;
            examples.entry(emotion).or_insert_with(|| message.to_string());
        }

        let total = messages.len() as f64;
        let distribution: BTreeMap<Emotion, f64> = counts
            .iter()
            .map(|(emotion, count)| {
                (*emotion, round_to(*count as f64 / total, DISTRIBUTION_DECIMALS))
            })
            .collect();

        // BTreeMap iterates in declaration order; the stable sort keeps it for ties
        let mut ranked: Vec<(Emotion, f64)> = distribution.iter().map(|(e, v)| (*e, *v)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(TOP_EMOTIONS);

        let dominant = ranked.first().map(|(e, _)| *e).unwrap_or(Emotion::Neutral);
        debug!(dominant = %dominant, labels = distribution.len(), "classified emotions");

        EmotionResult {
            distribution,
            top: ranked,
            examples,
            summary: Some(summary_sentence(dominant)),
        }
    }
}

/// "대화의 전반적인 분위기는 '<label>'에 가깝습니다. <phrase>"
pub fn summary_sentence(dominant: Emotion) -> String {
    format!(
        "대화의 전반적인 분위기는 '{}'에 가깝습니다. {}",
        dominant.label(),
        dominant.mood_phrase()
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_first_match_wins() {
        let classifier = EmotionClassifier::new();
        // Contains both a joy and a sadness keyword; joy is declared first
        assert_eq!(classifier.classify("좋아 근데 힘들어"), Emotion::Joy);
        assert_eq!(classifier.classify("힘들어 ㅠㅠ"), Emotion::Sadness);
        assert_eq!(classifier.classify("진짜 짜증나"), Emotion::Anger);
        assert_eq!(classifier.classify("내일 시험 걱정돼"), Emotion::Anxiety);
        assert_eq!(classifier.classify("밥 먹었어"), Emotion::Neutral);
    }

    #[test]
    fn test_laughter_is_joy_crying_is_sadness() {
        let classifier = EmotionClassifier::new();
        assert_eq!(classifier.classify("ㅋㅋㅋㅋ"), Emotion::Joy);
        assert_eq!(classifier.classify("ㅜ"), Emotion::Sadness);
    }

    #[test]
    fn test_uniform_joy() {
        let result = EmotionClassifier::new().analyze(&["좋아", "좋아", "좋아"]);
        assert_eq!(result.distribution.len(), 1);
        assert_eq!(result.distribution[&Emotion::Joy], 1.0);
        assert_eq!(result.examples[&Emotion::Joy], "좋아");
        assert_eq!(result.top, vec![(Emotion::Joy, 1.0)]);
    }

    #[test]
    fn test_empty_input_has_no_keys() {
        let empty: [&str; 0] = [];
        let result = EmotionClassifier::new().analyze(&empty);
        assert!(result.is_empty());
        assert_eq!(serde_json::to_string(&result).unwrap(), "{}");
    }

    #[test]
    fn test_all_neutral_is_not_empty() {
        let result = EmotionClassifier::new().analyze(&["밥", "물"]);
        assert!(!result.is_empty());
        assert_eq!(result.distribution[&Emotion::Neutral], 1.0);
        assert!(result.summary.unwrap().contains("안정적"));
    }

    #[test]
    fn test_distribution_rounding() {
        let result = EmotionClassifier::new().analyze(&["좋아", "밥", "물"]);
        assert_eq!(result.distribution[&Emotion::Joy], 0.333);
        assert_eq!(result.distribution[&Emotion::Neutral], 0.667);
        assert_eq!(result.dominant(), Some(Emotion::Neutral));
    }

    #[test]
    fn test_first_example_kept() {
        let result = EmotionClassifier::new().analyze(&["행복해", "최고야"]);
        assert_eq!(result.examples[&Emotion::Joy], "행복해");
    }

    #[test]
    fn test_top_ties_use_lexicon_order() {
        // one message each for anxiety, anger, sadness, joy: all 0.25
        let result = EmotionClassifier::new().analyze(&["불안해", "짜증", "우울", "최고"]);
        assert_eq!(
            result.top,
            vec![
                (Emotion::Joy, 0.25),
                (Emotion::Sadness, 0.25),
                (Emotion::Anger, 0.25),
            ]
        );
        assert!(result.summary.unwrap().starts_with("대화의 전반적인 분위기는 '기쁨'"));
    }

    #[test]
    fn test_top_sorted_descending() {
        let result = EmotionClassifier::new().analyze(&["걱정", "걱정", "짜증", "밥", "밥", "밥"]);
        let labels: Vec<Emotion> = result.top.iter().map(|(e, _)| *e).collect();
        assert_eq!(labels, vec![Emotion::Neutral, Emotion::Anxiety, Emotion::Anger]);
    }

    #[test]
    fn test_idempotent() {
        let classifier = EmotionClassifier::new();
        let messages = ["좋아", "걱정돼", "ㅠㅠ"];
        assert_eq!(
            serde_json::to_string(&classifier.analyze(&messages)).unwrap(),
            serde_json::to_string(&classifier.analyze(&messages)).unwrap()
        );
    }

    #[test]
    fn test_one_in_sixteen_rounds_to_even() {
        let mut messages = vec!["좋아"];
        messages.extend(std::iter::repeat("밥").take(15));
        let result = EmotionClassifier::new().analyze(&messages);

        assert_eq!(result.distribution[&Emotion::Joy], 0.062);
        assert_eq!(result.distribution[&Emotion::Neutral], 0.938);
        let sum: f64 = result.distribution.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
