//! Emotion labels and the aggregated emotion result

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Emotion labels. Declaration order is the lexicon order and the
/// tie-break order for `EmotionResult::top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "기쁨")]
    Joy,
    #[serde(rename = "슬픔")]
    Sadness,
    #[serde(rename = "분노")]
    Anger,
    #[serde(rename = "불안")]
    Anxiety,
    /// No keyword matched
    #[serde(rename = "중립")]
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Anxiety,
        Emotion::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Joy => "기쁨",
            Emotion::Sadness => "슬픔",
            Emotion::Anger => "분노",
            Emotion::Anxiety => "불안",
            Emotion::Neutral => "중립",
        }
    }

    /// Canned mood phrase used in the summary sentence
    pub fn mood_phrase(&self) -> &'static str {
        match self {
            Emotion::Joy => "밝고 긍정적인 말투가 자주 나타납니다.",
            Emotion::Sadness => "감정적으로 다소 가라앉은 상태가 보입니다.",
            Emotion::Anger => "공격적이거나 예민한 표현이 일부 관찰됩니다.",
            Emotion::Anxiety => "불확실한 상황에 대한 걱정이 느껴집니다.",
            Emotion::Neutral => "감정의 큰 기복 없이 비교적 안정적입니다.",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Joy => "😊",
            Emotion::Sadness => "😢",
            Emotion::Anger => "😠",
            Emotion::Anxiety => "😟",
            Emotion::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Emotion distribution of a message set.
///
/// An empty result (no input messages) serializes to `{}` and is distinct
/// from a populated all-neutral distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Label → fraction of messages, rounded to 3 decimals. Only labels
    /// that occurred are present.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub distribution: BTreeMap<Emotion, f64>,
    /// Up to 3 labels by fraction, descending
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top: Vec<(Emotion, f64)>,
    /// First message classified with each label
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<Emotion, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl EmotionResult {
    /// The "no emotion data" result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }

    /// Highest-ranked label, if any
    pub fn dominant(&self) -> Option<Emotion> {
        self.top.first().map(|(emotion, _)| *emotion)
    }
}
