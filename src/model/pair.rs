use crate::log::ParsedCall;
use std::collections::BTreeMap;

/// Pairing state for one (method, call id).
///
/// The first sighting records the entry timestamp; the matching exit
/// replaces it with the call duration. Keeping the two apart makes an
/// unpaired entry distinguishable from a computed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// Entry seen, waiting for the exit. Holds the entry epoch millis.
    Pending(i64),
    /// Entry and exit paired. Holds the duration in millis.
    Completed(i64),
}

/// Call id -> pairing state for one method.
pub type CallTable = BTreeMap<u64, CallState>;

/// Method name -> call table, built over the whole record sequence.
pub type MethodCallTable = BTreeMap<String, CallTable>;

/// Pair entry/exit records in input order.
///
/// Pairing is positional: the first occurrence of a (method, id) is taken
/// as the entry, the second as the exit, regardless of keyword. A third
/// or later occurrence of an already-completed id is a malformed log;
/// it is reported and dropped rather than folded into the duration.
pub fn pair_calls(calls: &[ParsedCall]) -> MethodCallTable {
    let mut table = MethodCallTable::new();

    for call in calls {
        let method_table = table.entry(call.method.clone()).or_default();
        match method_table.get(&call.call_id) {
            None => {
                method_table.insert(call.call_id, CallState::Pending(call.timestamp_ms));
            }
            Some(CallState::Pending(entry_ms)) => {
                let duration = call.timestamp_ms - entry_ms;
                method_table.insert(call.call_id, CallState::Completed(duration));
            }
            Some(CallState::Completed(_)) => {
                eprintln!(
                    "WARN: more than two records for ({}:{}); dropping extra record",
                    call.method, call.call_id
                );
            }
        }
    }

    table
}
