//! Trace-record extraction and field parsing for the fixed TRACE log format.

pub mod extract;
pub mod parse;
pub mod record;

pub use extract::{Patterns, extract_records};
pub use parse::parse_records;
pub use record::ParsedCall;
