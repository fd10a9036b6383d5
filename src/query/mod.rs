//! The log-record query engine.
//!
//! Pure, synchronous transformations over an in-memory record sequence,
//! composed in a fixed order: range filter, attribute filter, sort, then
//! aggregation and pagination over the same filtered set. No stage performs
//! I/O or mutates its input.

pub mod aggregate;
pub mod attributes;
pub mod paginate;
pub mod pipeline;
pub mod range;
pub mod sort;
pub mod state;

pub use aggregate::{aggregate_by_day, DayBucket, DayBuckets, StatusCounts};
pub use attributes::{filter_by_attributes, AttributeFilter};
pub use paginate::paginate;
pub use pipeline::{run_query, CacheStats, QueryEngine, QueryOutput, QueryParams};
pub use range::{filter_by_range, DateRange};
pub use sort::{sort_records, SortDirection, SortField};
pub use state::TableState;
