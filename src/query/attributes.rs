use serde::{Deserialize, Serialize};

use crate::record::{IssueType, LogRecord, Status};

/// Conjunctive equality/range predicates over record attributes.
///
/// Absent fields impose no constraint. The response-time constraint applies
/// only when both bounds are set, as the inclusive range `[min, max]`;
/// `Some(0)` is a real bound, not an "unset" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeFilter {
    pub status: Option<Status>,
    pub issue_type: Option<IssueType>,
    /// Substring test against the raw `url` field, no decoding or
    /// normalization.
    pub url_contains: Option<String>,
    pub response_time_min: Option<u64>,
    pub response_time_max: Option<u64>,
}

impl AttributeFilter {
    /// Whether a record satisfies every present constraint.
    pub fn matches(&self, record: &LogRecord) -> bool {
        if let Some(status) = self.status {
            if record.status != Some(status) {
                return false;
            }
        }

        if let Some(issue_type) = self.issue_type {
            if record.issue_type != Some(issue_type) {
                return false;
            }
        }

        if let Some(ref needle) = self.url_contains {
            if !record.url.contains(needle.as_str()) {
                return false;
            }
        }

        if let (Some(min), Some(max)) = (self.response_time_min, self.response_time_max) {
            if record.response_time < min || record.response_time > max {
                return false;
            }
        }

        true
    }
}

/// Narrow a sequence by the present predicates in `filter`.
///
/// Order-preserving and pure.
pub fn filter_by_attributes(records: &[LogRecord], filter: &AttributeFilter) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
