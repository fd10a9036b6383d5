use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tracing::debug;

use crate::record::{LogRecord, Status};

/// Per-status occurrence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub success: u64,
    pub warning: u64,
    pub error: u64,
}

impl StatusCounts {
    /// Count one categorized record. Uncategorized records are the caller's
    /// no-op; this only ever sees a defined status.
    fn record(&mut self, status: Status) {
        match status {
            Status::Ok => self.success += 1,
            Status::Warning => self.warning += 1,
            Status::Error => self.error += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.success + self.warning + self.error
    }

    /// Summarize a sequence. Records without a categorized status are not
    /// counted anywhere.
    pub fn summarize(records: &[LogRecord]) -> Self {
        let mut counts = StatusCounts::default();
        for record in records {
            if let Some(status) = record.status {
                counts.record(status);
            }
        }
        counts
    }
}

/// One calendar day's worth of counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    /// Calendar date key, `%Y-%m-%d` in the aggregation offset.
    pub day: String,
    #[serde(flatten)]
    pub counts: StatusCounts,
}

/// Day-keyed aggregation in first-appearance order.
///
/// Bucket order follows the first occurrence of each day in the input
/// sequence, not chronological order. That is the established dashboard
/// behavior; callers wanting a chronological x-axis sort the labels
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DayBuckets {
    buckets: Vec<DayBucket>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl DayBuckets {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, day: &str) -> Option<&StatusCounts> {
        self.index.get(day).map(|&i| &self.buckets[i].counts)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayBucket> {
        self.buckets.iter()
    }

    /// Sum of every counter across all buckets.
    pub fn total_counted(&self) -> u64 {
        self.buckets.iter().map(|b| b.counts.total()).sum()
    }

    fn bucket_mut(&mut self, day: String) -> &mut StatusCounts {
        if let Some(&i) = self.index.get(&day) {
            return &mut self.buckets[i].counts;
        }
        let i = self.buckets.len();
        self.index.insert(day.clone(), i);
        self.buckets.push(DayBucket {
            day,
            counts: StatusCounts::default(),
        });
        &mut self.buckets[i].counts
    }
}

/// Bucket a sequence by calendar day and count occurrences per status.
///
/// The day key is derived from the record timestamp rendered in `offset`.
/// Records with an uncategorized status contribute to no counter; a day
/// with no records has no bucket. Deterministic for a given input.
pub fn aggregate_by_day(records: &[LogRecord], offset: FixedOffset) -> DayBuckets {
    let mut buckets = DayBuckets::default();

    for record in records {
        let Some(instant) = DateTime::from_timestamp(record.timestamp, 0) else {
            debug!(timestamp = record.timestamp, "skipping unrepresentable timestamp");
            continue;
        };
        let day = instant.with_timezone(&offset).format("%Y-%m-%d").to_string();

        let counts = buckets.bucket_mut(day);
        if let Some(status) = record.status {
            counts.record(status);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn record(timestamp: i64, status: Option<Status>) -> LogRecord {
        LogRecord {
            timestamp,
            url: "https://api.example.com/v1/ping".to_string(),
            status,
            issue_type: None,
            issue_description: None,
            response_time: 10,
        }
    }

    #[test]
    fn test_two_day_bucketing() {
        // Two records on 2024-01-01, one on 2024-01-02.
        let records = vec![
            record(1704067200, Some(Status::Ok)),
            record(1704070800, Some(Status::Warning)),
            record(1704153600, Some(Status::Error)),
        ];

        let buckets = aggregate_by_day(&records, utc());
        assert_eq!(buckets.len(), 2);

        let day1 = buckets.get("2024-01-01").unwrap();
        assert_eq!((day1.success, day1.warning, day1.error), (1, 1, 0));

        let day2 = buckets.get("2024-01-02").unwrap();
        assert_eq!((day2.success, day2.warning, day2.error), (0, 0, 1));
    }

    #[test]
    fn test_first_appearance_order() {
        // Later day appears first in the input and must lead the buckets.
        let records = vec![
            record(1704153600, Some(Status::Ok)),
            record(1704067200, Some(Status::Ok)),
            record(1704153600, Some(Status::Ok)),
        ];

        let buckets = aggregate_by_day(&records, utc());
        let days: Vec<&str> = buckets.iter().map(|b| b.day.as_str()).collect();
        assert_eq!(days, vec!["2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn test_uncategorized_status_is_not_counted() {
        let records = vec![
            record(1704067200, Some(Status::Ok)),
            record(1704067260, None),
        ];

        let buckets = aggregate_by_day(&records, utc());
        let day = buckets.get("2024-01-01").unwrap();
        assert_eq!(day.total(), 1);
    }

    #[test]
    fn test_conservation() {
        let records = vec![
            record(1704067200, Some(Status::Ok)),
            record(1704070800, Some(Status::Warning)),
            record(1704153600, Some(Status::Error)),
            record(1704153660, None),
            record(1704240000, Some(Status::Ok)),
        ];

        let buckets = aggregate_by_day(&records, utc());
        let categorized = records.iter().filter(|r| r.status.is_some()).count() as u64;
        assert_eq!(buckets.total_counted(), categorized);
    }

    #[test]
    fn test_offset_shifts_day_boundary() {
        // 1704070800 is 2024-01-01T01:00:00Z; at UTC-2 it is still
        // 2023-12-31 locally.
        let records = vec![record(1704070800, Some(Status::Ok))];

        let behind = FixedOffset::west_opt(2 * 3600).unwrap();
        let buckets = aggregate_by_day(&records, behind);
        assert!(buckets.get("2023-12-31").is_some());
    }

    #[test]
    fn test_empty_input() {
        let buckets = aggregate_by_day(&[], utc());
        assert!(buckets.is_empty());
        assert_eq!(buckets.total_counted(), 0);
    }

    #[test]
    fn test_determinism() {
        let records = vec![
            record(1704153600, Some(Status::Ok)),
            record(1704067200, Some(Status::Warning)),
        ];

        let a = aggregate_by_day(&records, utc());
        let b = aggregate_by_day(&records, utc());
        assert_eq!(a, b);
    }
}
