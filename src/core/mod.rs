//! Core modules for Chatlens

pub mod chat_parser;
pub mod style;
pub mod trait_scorer;
pub mod emotion;
pub mod model;
pub mod analysis;

pub use chat_parser::{ChatParser, LineGrammar, ExportGrammar, BracketedGrammar, parse_export_timestamp};
pub use style::StyleAnalyzer;
pub use trait_scorer::TraitScorer;
pub use emotion::{EmotionClassifier, EMOTION_LEXICON, summary_sentence};
pub use model::{MbtiPredictor, LinearMbtiModel};
pub use analysis::{Analyzer, AnalysisOptions, transcript_digest, COUNTERPART_LABEL};
