//! Presentation lookup tables shared by every rendering consumer.
//!
//! One table maps each status variant to its label, color, and icon; the
//! chart, table, and summary all read from it instead of carrying their own
//! conditional chains.

use serde::Serialize;

use crate::query::aggregate::{DayBuckets, StatusCounts};
use crate::record::{IssueType, Status};

/// How one status category renders everywhere it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub label: &'static str,
    /// Hex color used by the chart series and the table badge.
    pub color: &'static str,
    pub icon: &'static str,
}

const STATUS_PRESENTATIONS: [StatusPresentation; 3] = [
    StatusPresentation {
        label: "Success",
        color: "#65d6bd",
        icon: "circle-check",
    },
    StatusPresentation {
        label: "Warning",
        color: "#ffd000",
        icon: "warning",
    },
    StatusPresentation {
        label: "Error",
        color: "#ff603f",
        icon: "circle-remove",
    },
];

impl Status {
    pub fn presentation(&self) -> &'static StatusPresentation {
        &STATUS_PRESENTATIONS[self.code() as usize]
    }

    /// Badge text in the results table; uncategorized renders as OK there.
    pub fn badge_label(status: Option<Status>) -> &'static str {
        match status {
            Some(Status::Warning) => "Warning",
            Some(Status::Error) => "Error",
            _ => "OK",
        }
    }
}

impl IssueType {
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::MissingParameter => "Missing Parameter",
            IssueType::RateLimitExceeded => "Rate limit exceeded",
            IssueType::NotFound => "Not Found",
            IssueType::UnknownParameter => "Unknown Parameter",
            IssueType::Deprecated => "Deprecated",
            IssueType::Unsecure => "Unsecure",
        }
    }
}

/// One stacked-bar series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    #[serde(rename = "backgroundColor")]
    pub background_color: &'static str,
    pub data: Vec<u64>,
}

/// Chart-ready shape: one label per bucket, three stacked series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Shape day buckets for a stacked bar chart, one data point per bucket
    /// in bucket order.
    pub fn from_buckets(buckets: &DayBuckets) -> Self {
        let labels = buckets.iter().map(|b| b.day.clone()).collect();

        let series = |status: Status, data: fn(&StatusCounts) -> u64| {
            let presentation = status.presentation();
            ChartDataset {
                label: presentation.label,
                background_color: presentation.color,
                data: buckets.iter().map(|b| data(&b.counts)).collect(),
            }
        };

        ChartData {
            labels,
            datasets: vec![
                series(Status::Ok, |c| c.success),
                series(Status::Warning, |c| c.warning),
                series(Status::Error, |c| c.error),
            ],
        }
    }
}
