use crate::Result;
use crate::model::pair::{CallState, CallTable, MethodCallTable};
use anyhow::bail;
use serde::Serialize;

/// Timing statistics for one method, derived from its call table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodStats {
    pub method: String,
    pub min_ms: i64,
    pub max_ms: i64,
    pub average_ms: f64,
    /// Distinct call ids seen, paired or not.
    pub calls: u64,
    /// Ids that never saw a matching exit.
    pub unpaired: u64,
    /// Call id of the slowest completed call. Ties resolve to the
    /// smallest id.
    pub id_of_max: u64,
}

/// Compute statistics for one method. An empty table is a programming
/// error upstream (tables are only created on first sighting).
///
/// Returns None when every id is still pending: there are no durations
/// to summarize, only raw entry timestamps.
pub fn aggregate(method: &str, table: &CallTable) -> Result<Option<MethodStats>> {
    if table.is_empty() {
        bail!("empty call table for method {}", method);
    }

    let mut durations: Vec<(u64, i64)> = Vec::new();
    let mut unpaired = 0u64;
    for (&id, state) in table {
        match state {
            CallState::Completed(ms) => durations.push((id, *ms)),
            CallState::Pending(_) => unpaired += 1,
        }
    }

    if durations.is_empty() {
        return Ok(None);
    }

    let mut min_ms = i64::MAX;
    let mut max_ms = i64::MIN;
    let mut id_of_max = 0u64;
    let mut sum = 0.0f64;
    for &(id, ms) in &durations {
        min_ms = min_ms.min(ms);
        if ms > max_ms {
            max_ms = ms;
            id_of_max = id;
        }
        sum += ms as f64;
    }

    Ok(Some(MethodStats {
        method: method.to_string(),
        min_ms,
        max_ms,
        average_ms: sum / durations.len() as f64,
        calls: table.len() as u64,
        unpaired,
        id_of_max,
    }))
}

/// Aggregate every method in the table, in name order. Methods with no
/// completed call are reported on stderr and left out of the report.
pub fn aggregate_all(table: &MethodCallTable) -> Result<Vec<MethodStats>> {
    let mut out = Vec::with_capacity(table.len());
    for (method, calls) in table {
        match aggregate(method, calls)? {
            Some(stats) => out.push(stats),
            None => {
                eprintln!(
                    "WARN: method {} has no completed calls ({} unpaired); omitting",
                    method,
                    calls.len()
                );
            }
        }
    }
    Ok(out)
}
