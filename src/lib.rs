//! # Logboard - query engine for API-monitoring dashboards
//!
//! Logboard fetches a flat list of API-monitoring log records once per query
//! cycle and serves the derived views a dashboard renders: a date-ranged,
//! attribute-filtered, sorted page of records; a status summary; and per-day
//! stacked-chart buckets.
//!
//! The engine itself is pure and synchronous. The only I/O is the single
//! HTTP GET at the fetch boundary; everything downstream is a total
//! transformation over the in-memory sequence, memoized per parameter set.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logboard::config::Config;
//! use logboard::fetch::RecordFetcher;
//! use logboard::query::{QueryEngine, QueryParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file_with_env("config.toml").await?;
//!     let fetcher = RecordFetcher::new(config.api.clone())?;
//!     let records = fetcher.fetch_records().await?;
//!
//!     let engine = QueryEngine::new(records, config.display_offset());
//!     let output = engine.run(&QueryParams::default());
//!     println!("{} records match", output.total_count);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod presentation;
pub mod query;
pub mod record;

// Re-export commonly used types
pub use error::{LogboardError, LogboardResult};
pub use query::{
    aggregate_by_day, filter_by_attributes, filter_by_range, paginate, run_query, sort_records,
    AttributeFilter, DateRange, DayBuckets, QueryEngine, QueryOutput, QueryParams, SortDirection,
    SortField, StatusCounts, TableState,
};
pub use record::{IssueType, LogRecord, Status};
