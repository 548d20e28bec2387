//! Analyzer: parse → group → per-speaker style/traits/model/emotions

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::core::{ChatParser, EmotionClassifier, MbtiPredictor, StyleAnalyzer, TraitScorer};
use crate::types::{AnalysisMode, AnalysisReport, SpeakerGroups, SpeakerReport, Transcript};
use crate::{ChatlensError, Result};

/// Label used for the pooled non-self report
pub const COUNTERPART_LABEL: &str = "상대방";

/// Per-request options
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Caller's own display name
    pub self_name: Option<String>,
    pub mode: AnalysisMode,
    /// Also report the caller's own messages
    pub include_self: bool,
}

/// Runs the whole pipeline over one document
pub struct Analyzer<'a> {
    parser: ChatParser,
    style: StyleAnalyzer,
    traits: TraitScorer,
    emotions: EmotionClassifier,
    predictor: Option<&'a dyn MbtiPredictor>,
}

impl Default for Analyzer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Analyzer<'a> {
    /// Rule-only analyzer
    pub fn new() -> Self {
        Self {
            parser: ChatParser::new(),
            style: StyleAnalyzer::new(),
            traits: TraitScorer::new(),
            emotions: EmotionClassifier::new(),
            predictor: None,
        }
    }

    /// Attach a loaded model
    pub fn with_predictor(mut self, predictor: &'a dyn MbtiPredictor) -> Self {
        self.predictor = Some(predictor);
        self
    }

    /// Replace the line parser
    pub fn with_parser(mut self, parser: ChatParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn parser(&self) -> &ChatParser {
        &self.parser
    }

    /// Parse a decoded document; no matching line is an error
    pub fn parse(&self, text: &str) -> Result<Transcript> {
        let transcript = self.parser.parse(text);
        if transcript.is_empty() {
            let lines = text.lines().filter(|l| !l.trim().is_empty()).count();
            warn!(lines, "no line matched a chat format");
            return Err(ChatlensError::NothingParsed { lines });
        }
        Ok(transcript)
    }

    /// Analyze a decoded document
    pub fn analyze(&self, text: &str, options: &AnalysisOptions) -> Result<AnalysisReport> {
        self.require_predictor(options.mode)?;
        let transcript = self.parse(text)?;
        self.analyze_transcript(&transcript, options)
    }

    /// Analyze an already parsed transcript
    pub fn analyze_transcript(
        &self,
        transcript: &Transcript,
        options: &AnalysisOptions,
    ) -> Result<AnalysisReport> {
        self.require_predictor(options.mode)?;
        if transcript.is_empty() {
            return Err(ChatlensError::NothingParsed { lines: 0 });
        }

        let groups = SpeakerGroups::from_transcript(transcript);
        let self_name = options.self_name.as_deref();

        let speakers: Vec<SpeakerReport> = groups
            .iter()
            .filter(|g| options.include_self || Some(g.speaker.as_str()) != self_name)
            .map(|g| self.report(&g.speaker, &g.messages(), options.mode))
            .collect();

        if let Some(name) = self_name {
            if groups.get(name).is_none() {
                warn!(self_name = name, "self name not found among speakers");
            }
        }

        let counterpart = self_name.map(|name| {
            let others = transcript.without_speaker(name);
            self.report(COUNTERPART_LABEL, &others.messages(), options.mode)
        });

        info!(
            records = transcript.len(),
            speakers = groups.len(),
            reported = speakers.len(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            mode: options.mode,
            record_count: transcript.len(),
            transcript_digest: transcript_digest(transcript),
            speakers,
            counterpart,
        })
    }

    fn require_predictor(&self, mode: AnalysisMode) -> Result<()> {
        if mode.uses_model() && self.predictor.is_none() {
            return Err(ChatlensError::MissingModel {
                path: "(no model loaded)".to_string(),
            });
        }
        Ok(())
    }

    /// Report for one message set
    pub fn report(&self, speaker: &str, messages: &[&str], mode: AnalysisMode) -> SpeakerReport {
        SpeakerReport {
            speaker: speaker.to_string(),
            message_count: messages.len(),
            style: self.style.compute(messages),
            traits: mode.uses_rules().then(|| self.traits.infer(messages)),
            model: if mode.uses_model() {
                self.predictor.map(|p| p.predict(messages))
            } else {
                None
            },
            emotions: self.emotions.analyze(messages),
        }
    }
}

/// SHA-256 over speaker/message bytes with NUL separators, hex encoded
pub fn transcript_digest(transcript: &Transcript) -> String {
    let mut hasher = Sha256::new();

    for record in transcript.records() {
        hasher.update(record.speaker.as_bytes());
        hasher.update([0u8]);
        hasher.update(record.message.as_bytes());
        hasher.update([0u8]);
    }

    let hash: [u8; 32] = hasher.finalize().into();
    hash.iter().map(|b| format!("{:02x}", b)).collect()
}

// =============================================================================
// TESTS
// =============================================================================
