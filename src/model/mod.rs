//! Aggregation model: entry/exit pairing and per-method statistics.

pub mod pair;
pub mod stats;

pub use pair::{CallState, CallTable, MethodCallTable, pair_calls};
pub use stats::{MethodStats, aggregate_all};
