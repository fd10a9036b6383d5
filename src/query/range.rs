use serde::{Deserialize, Serialize};

use crate::record::LogRecord;

/// Inclusive date window over millisecond-resolution instants.
///
/// An absent bound is unbounded on that side. `start > end` is legal and
/// simply matches nothing; callers are not required to normalize inverted
/// ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// Milliseconds since the epoch, inclusive.
    pub start: Option<i64>,
    /// Milliseconds since the epoch, inclusive.
    pub end: Option<i64>,
}

impl DateRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Whether a record timestamp (seconds) falls inside the window.
    ///
    /// Records store seconds, the window stores milliseconds; the record side
    /// is scaled up so boundary instants compare exactly.
    pub fn contains(&self, timestamp_secs: i64) -> bool {
        let ms = timestamp_secs.saturating_mul(1000);
        self.start.map_or(true, |start| ms >= start) && self.end.map_or(true, |end| ms <= end)
    }
}

/// Narrow a sequence to the records whose timestamp falls within `range`.
///
/// Order-preserving and pure; survivors are copied into a new sequence.
pub fn filter_by_range(records: &[LogRecord], range: &DateRange) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.timestamp))
        .cloned()
        .collect()
}
