use crate::Result;
use regex::Regex;

/// Full trace-record shape:
/// timestamp, "TRACE", bracketed thread tag, "entry"/"exit", "with", "(name:id)".
///
/// Example:
/// 2024-01-01T10:00:00,250 TRACE [main] exit with (foo:1)
const RECORD_RE: &str = r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2},\d{3,}[ \t]TRACE[ \t]\[\w*\][ \t](?:entry|exit)[ \t]with[ \t]\(\w+:\d+\)";

/// The "(name:id)" pair inside a record.
const CALL_RE: &str = r"\((\w+):(\d+)\)";

/// The timestamp portion of a record, date and fraction captured separately.
const TIME_RE: &str = r"(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2}),(\d{3,})";

/// Compiled matchers for the fixed trace format. Built once at startup
/// and passed by reference to the extraction and parsing stages.
pub struct Patterns {
    pub record: Regex,
    pub call: Regex,
    pub time: Regex,
}

impl Patterns {
    pub fn new() -> Result<Self> {
        Ok(Patterns {
            record: Regex::new(RECORD_RE)?,
            call: Regex::new(CALL_RE)?,
            time: Regex::new(TIME_RE)?,
        })
    }
}

/// Scan the full log text for trace records, in the order they occur.
/// Text that does not match the record shape (malformed lines, other
/// log levels) is skipped without error.
pub fn extract_records<'a>(patterns: &Patterns, text: &'a str) -> Vec<&'a str> {
    patterns
        .record
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}
