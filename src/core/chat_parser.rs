//! Chat parser: recovers speaker/message records from exported transcripts
//!
//! Each line is tried against an ordered list of line grammars. The first
//! grammar that matches wins; lines no grammar accepts (system notices,
//! date separators, decorations) are dropped without error.

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::types::{ChatRecord, LineFormat, Transcript};

lazy_static! {
    // =========================================================================
    // Export format: 2023. 5. 12. 오후 3:21, 철수 : 안녕
    // =========================================================================
    // Speaker is lazy: it ends at the first " :", so "3 : 2" stays in the message
    static ref RE_EXPORT_LINE: Regex = Regex::new(
        r"^(\d{4}\. \d{1,2}\. \d{1,2}\. (?:오전|오후|AM|PM) \d{1,2}:\d{2}), (.+?) :(?: (.*))?$"
    ).unwrap();

    static ref RE_EXPORT_TIMESTAMP: Regex = Regex::new(
        r"^(\d{4})\. (\d{1,2})\. (\d{1,2})\. (오전|오후|AM|PM) (\d{1,2}):(\d{2})$"
    ).unwrap();

    // =========================================================================
    // Bracketed format: [철수] [오후 3:21] 안녕
    // =========================================================================
    static ref RE_BRACKETED_LINE: Regex = Regex::new(
        r"^\[([^\]]*)\]\s*\[([^\]]*)\]\s*(.*)$"
    ).unwrap();
}

/// One line format. Implementations receive an already trimmed, non-empty line.
pub trait LineGrammar: Send + Sync + std::fmt::Debug {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Record for this line, or `None` if the grammar does not apply
    fn match_line(&self, line: &str) -> Option<ChatRecord>;
}

/// `YYYY. M. D. 오전|오후 H:MM, speaker : message`
#[derive(Debug, Default)]
pub struct ExportGrammar;

impl LineGrammar for ExportGrammar {
    fn name(&self) -> &'static str {
        "export"
    }

    fn match_line(&self, line: &str) -> Option<ChatRecord> {
        let caps = RE_EXPORT_LINE.captures(line)?;
        let speaker = caps.get(2)?.as_str().trim();
        if speaker.is_empty() {
            return None;
        }
        let message = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");

        Some(ChatRecord::new(&caps[1], speaker, message, LineFormat::Export))
    }
}

/// `[speaker] [time] message`
#[derive(Debug, Default)]
pub struct BracketedGrammar;

impl LineGrammar for BracketedGrammar {
    fn name(&self) -> &'static str {
        "bracketed"
    }

    fn match_line(&self, line: &str) -> Option<ChatRecord> {
        let caps = RE_BRACKETED_LINE.captures(line)?;
        let speaker = caps[1].trim();
        if speaker.is_empty() {
            return None;
        }

        Some(ChatRecord::new(
            caps[2].trim(),
            speaker,
            caps[3].trim(),
            LineFormat::Bracketed,
        ))
    }
}

/// Line-by-line transcript parser
#[derive(Debug)]
pub struct ChatParser {
    grammars: Vec<Box<dyn LineGrammar>>,
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatParser {
    /// Parser with the export grammar first, then the bracketed grammar
    pub fn new() -> Self {
        Self {
            grammars: vec![Box::new(ExportGrammar), Box::new(BracketedGrammar)],
        }
    }

    /// Parser with no grammars; add them with `with_grammar`
    pub fn empty() -> Self {
        Self { grammars: Vec::new() }
    }

    /// Append a grammar with the lowest priority
    pub fn with_grammar(mut self, grammar: impl LineGrammar + 'static) -> Self {
        self.grammars.push(Box::new(grammar));
        self
    }

    /// Grammar names in priority order
    pub fn grammar_names(&self) -> Vec<&'static str> {
        self.grammars.iter().map(|g| g.name()).collect()
    }

    /// Parse a single line
    pub fn parse_line(&self, line: &str) -> Option<ChatRecord> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        self.grammars.iter().find_map(|g| g.match_line(line))
    }

    /// Parse a whole document. Never fails; an empty transcript means
    /// nothing matched.
    pub fn parse(&self, text: &str) -> Transcript {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for line in text.lines() {
            match self.parse_line(line) {
                Some(record) => records.push(record),
                None if !line.trim().is_empty() => skipped += 1,
                None => {}
            }
        }

        debug!(matched = records.len(), skipped, "parsed transcript");
        Transcript::new(records)
    }
}

/// Convert an export timestamp phrase (`2023. 5. 12. 오후 3:21`) to a
/// datetime. 12-hour clock: 오전/AM 12 is midnight, 오후/PM 12 is noon.
pub fn parse_export_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let caps = RE_EXPORT_TIMESTAMP.captures(raw.trim())?;

    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    let hour12: u32 = caps[5].parse().ok()?;
    let minute: u32 = caps[6].parse().ok()?;

    if !(1..=12).contains(&hour12) {
        return None;
    }
    let pm = matches!(&caps[4], "오후" | "PM");
    let hour = match (pm, hour12) {
        (false, 12) => 0,
        (false, h) => h,
        (true, 12) => 12,
        (true, h) => h + 12,
    };

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

// =============================================================================
// TESTS
// =============================================================================
