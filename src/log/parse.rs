use crate::Result;
use crate::log::extract::Patterns;
use crate::log::record::ParsedCall;
use anyhow::{Context, anyhow};
use chrono::{NaiveDate, TimeZone};

/// Extract the method name: the token before the colon in "(name:id)".
pub fn method_name(patterns: &Patterns, record: &str) -> Result<String> {
    let caps = patterns
        .call
        .captures(record)
        .ok_or_else(|| anyhow!("no (name:id) pair in record: {:?}", record))?;
    Ok(caps[1].to_string())
}

/// Extract the call id: the integer after the colon in "(name:id)".
pub fn call_id(patterns: &Patterns, record: &str) -> Result<u64> {
    let caps = patterns
        .call
        .captures(record)
        .ok_or_else(|| anyhow!("no (name:id) pair in record: {:?}", record))?;
    caps[2]
        .parse()
        .with_context(|| format!("bad call id in record: {:?}", record))
}

/// Extract the timestamp and convert it to epoch milliseconds using the
/// local time zone. The first three fractional digits are the millisecond
/// component; further digits are sub-millisecond and dropped.
///
/// Records from the extractor always carry a timestamp, but a missing or
/// invalid one is still an error here, never a zero default.
pub fn call_time_ms(patterns: &Patterns, record: &str) -> Result<i64> {
    let caps = patterns
        .time
        .captures(record)
        .ok_or_else(|| anyhow!("no timestamp in record: {:?}", record))?;

    // Capture groups are all-digit by construction; width keeps them in range.
    let year: i32 = caps[1].parse()?;
    let month: u32 = caps[2].parse()?;
    let day: u32 = caps[3].parse()?;
    let hour: u32 = caps[4].parse()?;
    let minute: u32 = caps[5].parse()?;
    let second: u32 = caps[6].parse()?;
    let millis: u32 = caps[7][..3].parse()?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_milli_opt(hour, minute, second, millis))
        .ok_or_else(|| anyhow!("timestamp out of range in record: {:?}", record))?;

    let local = chrono::Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| anyhow!("no local instant for timestamp in record: {:?}", record))?;

    Ok(local.timestamp_millis())
}

/// Parse all three fields of one matched record.
pub fn parse_record(patterns: &Patterns, record: &str) -> Result<ParsedCall> {
    Ok(ParsedCall {
        method: method_name(patterns, record)?,
        call_id: call_id(patterns, record)?,
        timestamp_ms: call_time_ms(patterns, record)?,
    })
}

/// Parse a sequence of matched records, preserving order. A record that
/// fails to parse is reported on stderr and excluded from pairing.
pub fn parse_records(patterns: &Patterns, records: &[&str]) -> Vec<ParsedCall> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        match parse_record(patterns, record) {
            Ok(call) => out.push(call),
            Err(e) => eprintln!("WARN: skipping record: {:#}", e),
        }
    }
    out
}
