//! Integration tests for the chat parser
//!
//! Tests the full path: raw text → ChatParser → Transcript → SpeakerGroups

use chatlens::core::ChatParser;
use chatlens::types::{ChatRecord, LineFormat, SpeakerGroups, Transcript};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

const EXPORT_SAMPLE: &str = "\
철수 님과 카카오톡 대화
저장한 날짜 : 2023. 5. 13. 오전 10:00

2023년 5월 12일 금요일
2023. 5. 12. 오후 3:21, 철수 : 안녕
2023. 5. 12. 오후 3:21, 영희 : 어 안녕 ㅋㅋ
2023. 5. 12. 오후 3:22, 영희님이 나갔습니다.
2023. 5. 12. 오후 3:22, 철수 : 사진
2023. 5. 12. 오후 3:23, 철수 : 오늘 날씨 좋다!
";

fn export(ts: &str, speaker: &str, message: &str) -> ChatRecord {
    ChatRecord::new(ts, speaker, message, LineFormat::Export)
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

#[test]
fn test_export_sample_records() {
    let transcript = ChatParser::new().parse(EXPORT_SAMPLE);

    assert_eq!(
        transcript,
        Transcript::new(vec![
            export("2023. 5. 12. 오후 3:21", "철수", "안녕"),
            export("2023. 5. 12. 오후 3:21", "영희", "어 안녕 ㅋㅋ"),
            export("2023. 5. 12. 오후 3:22", "철수", "사진"),
            export("2023. 5. 12. 오후 3:23", "철수", "오늘 날씨 좋다!"),
        ])
    );
}

#[test]
fn test_two_record_scenario() {
    let text = "2023. 5. 12. 오후 3:21, 철수 : 안녕\n2023. 5. 12. 오후 3:22, 철수 : 오늘 날씨 좋다!";
    let transcript = ChatParser::new().parse(text);

    assert_eq!(transcript.len(), 2);
    assert!(transcript.records().iter().all(|r| r.speaker == "철수"));
    assert_eq!(
        transcript.records()[1].exported_at(),
        Some(datetime(2023, 5, 12, 15, 22))
    );
}

#[test]
fn test_record_count_equals_matching_lines() {
    let lines = [
        "2023. 1. 2. 오전 9:00, A : one",        // export
        "[B] [오전 9:01] two",                   // bracketed
        "some note",                             // neither
        "[C] missing second bracket",            // neither
        "2023. 1. 2. 오전 9:02, A : three",      // export
        "",                                      // empty
        "[D] [09:03]",                           // bracketed, empty message
    ];
    let transcript = ChatParser::new().parse(&lines.join("\n"));

    assert_eq!(transcript.len(), 4);
    assert_eq!(
        transcript.records().iter().map(|r| r.speaker.as_str()).collect::<Vec<_>>(),
        vec!["A", "B", "A", "D"]
    );
    assert_eq!(transcript.records()[3].message, "");
}

#[test]
fn test_order_mirrors_source_lines() {
    let mut text = String::new();
    for i in 0..50 {
        if i % 3 == 0 {
            text.push_str(&format!("[S{}] [오후 1:{:02}] m{}\n", i % 4, i, i));
        } else {
            text.push_str(&format!("2023. 5. 12. 오후 1:{:02}, S{} : m{}\n", i, i % 4, i));
        }
        text.push_str("-- noise --\n");
    }
    let transcript = ChatParser::new().parse(&text);

    let expected: Vec<String> = (0..50).map(|i| format!("m{}", i)).collect();
    assert_eq!(transcript.messages(), expected);
}

#[test]
fn test_crlf_lines() {
    let text = "2023. 5. 12. 오후 3:21, 철수 : 안녕\r\n[영희] [오후 3:22] 응\r\n";
    let transcript = ChatParser::new().parse(text);
    assert_eq!(transcript.messages(), vec!["안녕", "응"]);
}

#[test]
fn test_bracketed_time_is_opaque() {
    let transcript = ChatParser::new().parse("[영희] [오후 3:22] 응");
    let record = &transcript.records()[0];
    assert_eq!(record.timestamp_raw, "오후 3:22");
    assert_eq!(record.exported_at(), None);
}

#[test]
fn test_grouping_after_parse() {
    let transcript = ChatParser::new().parse(EXPORT_SAMPLE);
    let groups = SpeakerGroups::from_transcript(&transcript);

    assert_eq!(groups.speakers(), vec!["철수", "영희"]);
    assert_eq!(
        groups.get("철수").unwrap().messages(),
        vec!["안녕", "사진", "오늘 날씨 좋다!"]
    );
}

#[test]
fn test_json_roundtrip_of_transcript() {
    let transcript = ChatParser::new().parse(EXPORT_SAMPLE);
    let json = serde_json::to_string(&transcript).unwrap();
    assert!(json.contains("\"format\":\"export\""));
    let back: Transcript = serde_json::from_str(&json).unwrap();
    assert_eq!(back, transcript);
}
