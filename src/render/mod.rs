//! Text rendering of the per-method statistics report.

use crate::model::MethodStats;
use std::fmt::Write;

/// One line per method, in the order the aggregator produced them.
pub fn render_text(report: &[MethodStats]) -> String {
    let mut out = String::new();
    for stats in report {
        // Infallible for String, but keep the write! result visible.
        let _ = writeln!(
            out,
            "Method name: {}; Minimum call time: {}ms; Maximum call time: {}ms; \
             Average call time: {:.2}ms; Number of calls: {}; ID of maximum call time: {}.",
            stats.method, stats.min_ms, stats.max_ms, stats.average_ms, stats.calls, stats.id_of_max
        );
    }
    out
}
