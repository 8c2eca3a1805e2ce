/// Fields of one matched trace record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCall {
    pub method: String,
    pub call_id: u64,
    /// Epoch milliseconds in the local time zone.
    pub timestamp_ms: i64,
}
