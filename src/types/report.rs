//! Analysis reports and their terminal rendering

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{Axis, EmotionResult, MlPrediction, StyleMetrics, TraitResult};

/// Which type estimators run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Keyword rules only
    Rule,
    /// Trained model only
    Ml,
    /// Both, with a disagreement notice
    #[default]
    Both,
}

impl AnalysisMode {
    pub fn uses_rules(&self) -> bool {
        matches!(self, AnalysisMode::Rule | AnalysisMode::Both)
    }

    pub fn uses_model(&self) -> bool {
        matches!(self, AnalysisMode::Ml | AnalysisMode::Both)
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnalysisMode::Rule => "rule",
            AnalysisMode::Ml => "ml",
            AnalysisMode::Both => "both",
        };
        write!(f, "{}", name)
    }
}

/// Everything computed for one speaker (or the pooled counterpart)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerReport {
    pub speaker: String,
    pub message_count: usize,
    /// `None` when there are no messages
    pub style: Option<StyleMetrics>,
    pub traits: Option<TraitResult>,
    pub model: Option<MlPrediction>,
    pub emotions: EmotionResult,
}

impl SpeakerReport {
    /// `Some(true)` when rule and model codes agree, `None` unless both ran
    pub fn agreement(&self) -> Option<bool> {
        match (&self.traits, &self.model) {
            (Some(rule), Some(model)) => Some(rule.code == model.type_code),
            _ => None,
        }
    }

    /// Multi-line terminal rendering
    pub fn to_terminal_string(&self, verbose: bool) -> String {
        let mut out = Vec::new();

        out.push(format!(
            "{} {} ({} messages)",
            "▶".cyan(),
            self.speaker.bold(),
            self.message_count
        ));

        // Type estimates
        if let Some(traits) = &self.traits {
            out.push(format!("  rule MBTI:  {}", traits.code.green().bold()));
            if verbose {
                let detail: Vec<String> = Axis::ALL
                    .iter()
                    .map(|axis| {
                        let (a, b) = axis.letters();
                        let (x, y) = traits.axis_scores.pair(*axis);
                        format!("{}={} {}={}", a, x, b, y)
                    })
                    .collect();
                out.push(format!("    {}", detail.join(" | ").dimmed()));
            }
        }
        if let Some(model) = &self.model {
            out.push(format!(
                "  model MBTI: {} ({:.1}% confidence)",
                model.type_code.green().bold(),
                model.confidence * 100.0
            ));
        }
        if let (Some(false), Some(rule), Some(model)) = (self.agreement(), &self.traits, &self.model) {
            out.push(format!(
                "  {}",
                format!("⚖ estimates differ: rule {} vs model {}", rule.code, model.type_code).yellow()
            ));
        }

        // Style
        match &self.style {
            Some(style) => {
                let s = style.rounded();
                out.push(format!(
                    "  style: avg_length={:.2} | emoticons={} | questions={:.3} | exclaims={:.3}",
                    s.avg_length, s.emoticon_count, s.question_ratio, s.exclaim_ratio
                ));
            }
            None => out.push(format!("  style: {}", "no messages".dimmed())),
        }

        // Emotions
        if self.emotions.is_empty() {
            out.push(format!("  emotions: {}", "no emotion data".dimmed()));
        } else {
            if let Some(summary) = &self.emotions.summary {
                out.push(format!("  {}", summary));
            }
            let top: Vec<String> = self
                .emotions
                .top
                .iter()
                .map(|(emotion, share)| format!("{} {} {:.2}", emotion.emoji(), emotion, share))
                .collect();
            out.push(format!("  top: {}", top.join(", ")));
            if verbose {
                for (emotion, example) in &self.emotions.examples {
                    out.push(format!("    - {}: {}", emotion.to_string().bold(), example));
                }
            }
        }

        out.join("\n")
    }
}

/// Result of one analysis pass over a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub mode: AnalysisMode,
    pub record_count: usize,
    /// SHA-256 over speaker/message pairs, hex
    pub transcript_digest: String,
    pub speakers: Vec<SpeakerReport>,
    /// All non-self messages pooled, present when a self name was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterpart: Option<SpeakerReport>,
}

impl AnalysisReport {
    pub fn speaker(&self, name: &str) -> Option<&SpeakerReport> {
        self.speakers.iter().find(|s| s.speaker == name)
    }

    pub fn to_terminal_string(&self, verbose: bool) -> String {
        let mut sections = vec![format!(
            "{} records | mode={} | digest={}",
            self.record_count,
            self.mode,
            &self.transcript_digest[..16.min(self.transcript_digest.len())]
        )
        .dimmed()
        .to_string()];

        if let Some(counterpart) = &self.counterpart {
            sections.push(counterpart.to_terminal_string(verbose));
        }
        if verbose || self.counterpart.is_none() {
            for speaker in &self.speakers {
                sections.push(speaker.to_terminal_string(verbose));
            }
        }

        sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AxisScores;

    fn report(rule: Option<&str>, model: Option<&str>) -> SpeakerReport {
        SpeakerReport {
            speaker: "철수".to_string(),
            message_count: 1,
            style: None,
            traits: rule.map(|code| TraitResult {
                code: code.to_string(),
                axis_scores: AxisScores::default(),
            }),
            model: model.map(|code| MlPrediction::new(code, 0.5)),
            emotions: EmotionResult::empty(),
        }
    }

    #[test]
    fn test_agreement() {
        assert_eq!(report(Some("ISFJ"), Some("ISFJ")).agreement(), Some(true));
        assert_eq!(report(Some("ISFJ"), Some("ENTP")).agreement(), Some(false));
        assert_eq!(report(Some("ISFJ"), None).agreement(), None);
        assert_eq!(report(None, Some("ISFJ")).agreement(), None);
    }

    #[test]
    fn test_terminal_string_mentions_disagreement() {
        colored::control::set_override(false);
        let text = report(Some("ISFJ"), Some("ENTP")).to_terminal_string(false);
        assert!(text.contains("rule ISFJ vs model ENTP"));
        assert!(text.contains("no emotion data"));
    }

    #[test]
    fn test_mode_flags() {
        assert!(AnalysisMode::Both.uses_rules() && AnalysisMode::Both.uses_model());
        assert!(!AnalysisMode::Rule.uses_model());
        assert!(!AnalysisMode::Ml.uses_rules());
    }
}
