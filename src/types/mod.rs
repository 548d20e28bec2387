//! Core types for Chatlens

mod record;
mod style;
mod traits;
mod emotion;
mod prediction;
mod report;

pub use record::{ChatRecord, LineFormat, Transcript, SpeakerGroup, SpeakerGroups};
pub use style::{StyleMetrics, round_to};
pub use traits::{Axis, AxisScores, TraitResult};
pub use emotion::{Emotion, EmotionResult};
pub use prediction::MlPrediction;
pub use report::{AnalysisMode, SpeakerReport, AnalysisReport};
