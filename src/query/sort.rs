use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::LogRecord;

/// Sortable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Timestamp,
    Url,
    IssueType,
    IssueDescription,
    Status,
    ResponseTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

fn compare(a: &LogRecord, b: &LogRecord, field: SortField) -> Ordering {
    match field {
        SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
        SortField::Url => a.url.cmp(&b.url),
        // Option ordering puts records without a value first.
        SortField::IssueType => a.issue_type.cmp(&b.issue_type),
        SortField::IssueDescription => a.issue_description.cmp(&b.issue_description),
        SortField::Status => a.status.cmp(&b.status),
        SortField::ResponseTime => a.response_time.cmp(&b.response_time),
    }
}

/// Order a sequence by a field and direction.
///
/// The sort is stable: equal keys keep their original relative order, which
/// keeps pagination deterministic across re-renders. `None` field is the
/// identity. Pure; the input is never reordered in place.
pub fn sort_records(
    records: &[LogRecord],
    field: Option<SortField>,
    direction: SortDirection,
) -> Vec<LogRecord> {
    let mut sorted = records.to_vec();

    if let Some(field) = field {
        sorted.sort_by(|a, b| {
            let ordering = compare(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    sorted
}
