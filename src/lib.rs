//! Chatlens: chat transcript analysis
//!
//! Pipeline: raw text → ChatParser → Transcript → SpeakerGroups →
//! StyleAnalyzer / TraitScorer / EmotionClassifier (+ optional MbtiPredictor)

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod types;

pub use config::AppConfig;
pub use error::{ChatlensError, Result};

// =============================================================================
// STYLE [C]
// =============================================================================

/// Glyphs counted as laughter/crying expressions (ㅋ ㅎ ㅠ ㅜ)
pub const EMOTICON_GLYPHS: [char; 4] = ['ㅋ', 'ㅎ', 'ㅠ', 'ㅜ'];

// =============================================================================
// TRAIT SCORING [C]
// =============================================================================

/// Average characters per message above which E is chosen over I
pub const E_AVG_LENGTH_THRESHOLD: f64 = 15.0;

/// Separator used when concatenating a speaker's messages
pub const MESSAGE_SEPARATOR: &str = " ";

/// Imagination / future / possibility / feeling
pub const INTUITION_KEYWORDS: [&str; 4] = ["상상", "미래", "가능성", "느낌"];

/// Logic / evidence / rationality
pub const THINKING_KEYWORDS: [&str; 3] = ["논리", "근거", "이성적"];

/// Planning / organizing / scheduling
pub const JUDGING_KEYWORDS: [&str; 3] = ["계획", "정리", "일정"];

// =============================================================================
// EMOTION [C]
// =============================================================================

/// Decimal digits kept in emotion distribution fractions
pub const DISTRIBUTION_DECIMALS: i32 = 3;

/// Number of categories reported in `EmotionResult::top`
pub const TOP_EMOTIONS: usize = 3;

// =============================================================================
// MODEL
// =============================================================================

/// Default location of the trained model artifact
pub const DEFAULT_MODEL_PATH: &str = "models/mbti_model.json";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
