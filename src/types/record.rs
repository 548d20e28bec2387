//! Chat records, transcripts and speaker groups

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which line grammar produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineFormat {
    /// `2023. 5. 12. 오후 3:21, 철수 : 안녕`
    Export,
    /// `[철수] [오후 3:21] 안녕`
    Bracketed,
}

/// One speaker/message line recovered from the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Literal matched date/time phrase, never reinterpreted here
    pub timestamp_raw: String,
    /// Trimmed, non-empty
    pub speaker: String,
    /// Trimmed, may be empty (attachment without caption)
    pub message: String,
    pub format: LineFormat,
}

impl ChatRecord {
    pub fn new(
        timestamp_raw: impl Into<String>,
        speaker: impl Into<String>,
        message: impl Into<String>,
        format: LineFormat,
    ) -> Self {
        Self {
            timestamp_raw: timestamp_raw.into(),
            speaker: speaker.into(),
            message: message.into(),
            format,
        }
    }

    /// Structured time for export-format records. Bracketed records only
    /// carry a time of day, so they always return `None`.
    pub fn exported_at(&self) -> Option<NaiveDateTime> {
        match self.format {
            LineFormat::Export => crate::core::chat_parser::parse_export_timestamp(&self.timestamp_raw),
            LineFormat::Bracketed => None,
        }
    }
}

/// Ordered records, same order as the source lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    records: Vec<ChatRecord>,
}

impl Transcript {
    pub fn new(records: Vec<ChatRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Message texts in order
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    /// Records from everyone except `speaker`
    pub fn without_speaker(&self, speaker: &str) -> Transcript {
        Transcript::new(
            self.records
                .iter()
                .filter(|r| r.speaker != speaker)
                .cloned()
                .collect(),
        )
    }
}

/// All records of one speaker, relative order preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerGroup {
    pub speaker: String,
    pub records: Vec<ChatRecord>,
}

impl SpeakerGroup {
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Speaker → records, keyed in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerGroups {
    groups: Vec<SpeakerGroup>,
}

impl SpeakerGroups {
    /// Group a transcript. Stable for repeated calls on the same input.
    pub fn from_transcript(transcript: &Transcript) -> Self {
        let mut groups: Vec<SpeakerGroup> = Vec::new();

        for record in transcript.records() {
            match groups.iter_mut().find(|g| g.speaker == record.speaker) {
                Some(group) => group.records.push(record.clone()),
                None => groups.push(SpeakerGroup {
                    speaker: record.speaker.clone(),
                    records: vec![record.clone()],
                }),
            }
        }

        Self { groups }
    }

    pub fn get(&self, speaker: &str) -> Option<&SpeakerGroup> {
        self.groups.iter().find(|g| g.speaker == speaker)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeakerGroup> {
        self.groups.iter()
    }

    pub fn speakers(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.speaker.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(speaker: &str, message: &str) -> ChatRecord {
        ChatRecord::new("오후 3:21", speaker, message, LineFormat::Bracketed)
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let transcript = Transcript::new(vec![
            rec("철수", "a"),
            rec("영희", "b"),
            rec("철수", "c"),
            rec("민수", "d"),
        ]);
        let groups = SpeakerGroups::from_transcript(&transcript);

        assert_eq!(groups.speakers(), vec!["철수", "영희", "민수"]);
        assert_eq!(groups.get("철수").unwrap().messages(), vec!["a", "c"]);
        assert!(groups.get("없음").is_none());
    }

    #[test]
    fn test_grouping_is_stable() {
        let transcript = Transcript::new(vec![rec("B", "1"), rec("A", "2"), rec("B", "3")]);
        assert_eq!(
            SpeakerGroups::from_transcript(&transcript),
            SpeakerGroups::from_transcript(&transcript)
        );
    }

    #[test]
    fn test_without_speaker() {
        let transcript = Transcript::new(vec![rec("나", "x"), rec("너", "y"), rec("나", "z")]);
        let others = transcript.without_speaker("나");
        assert_eq!(others.messages(), vec!["y"]);
    }

    #[test]
    fn test_bracketed_has_no_datetime() {
        assert!(rec("철수", "안녕").exported_at().is_none());
    }
}
