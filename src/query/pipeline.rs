use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::aggregate::{aggregate_by_day, DayBuckets, StatusCounts};
use crate::query::attributes::{filter_by_attributes, AttributeFilter};
use crate::query::paginate::paginate;
use crate::query::range::{filter_by_range, DateRange};
use crate::query::sort::{sort_records, SortDirection, SortField};
use crate::record::LogRecord;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything a query cycle depends on, by value.
///
/// Hash/Eq over the full parameter set is what keys the memo cache; two
/// parameter sets that compare equal are guaranteed identical output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParams {
    pub range: DateRange,
    pub filter: AttributeFilter,
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            range: DateRange::default(),
            filter: AttributeFilter::default(),
            sort_field: None,
            sort_direction: SortDirection::Asc,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Derived views handed to the rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutput {
    /// The requested page of the filtered+sorted sequence.
    pub page: Vec<LogRecord>,
    /// Length of the filtered (pre-pagination) sequence; the caller derives
    /// total pages from this.
    pub total_count: usize,
    /// Status counts over the whole filtered sequence.
    pub summary: StatusCounts,
    /// Per-day buckets over the whole filtered sequence. Pagination never
    /// affects this.
    pub chart: DayBuckets,
}

/// One full query cycle: range filter, attribute filter, sort, then
/// aggregation and pagination over the same filtered+sorted sequence.
///
/// Pure function of its inputs; identical arguments produce identical
/// output.
pub fn run_query(records: &[LogRecord], params: &QueryParams, offset: FixedOffset) -> QueryOutput {
    let ranged = filter_by_range(records, &params.range);
    let filtered = filter_by_attributes(&ranged, &params.filter);
    let sorted = sort_records(&filtered, params.sort_field, params.sort_direction);

    let summary = StatusCounts::summarize(&sorted);
    let chart = aggregate_by_day(&sorted, offset);
    let page = paginate(&sorted, params.page_index, params.page_size);

    QueryOutput {
        page,
        total_count: sorted.len(),
        summary,
        chart,
    }
}

/// Memo cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Default)]
struct MemoCache {
    entries: HashMap<QueryParams, Arc<QueryOutput>>,
    hits: u64,
    misses: u64,
}

/// The query engine for one fetch cycle.
///
/// Owns the fetched record store (immutable for the engine's lifetime) and
/// memoizes [`run_query`] keyed on value equality of the parameters, so a
/// re-render with unchanged parameters costs a map lookup. A new fetch means
/// a new engine; there is no invalidation path.
pub struct QueryEngine {
    records: Vec<LogRecord>,
    offset: FixedOffset,
    cache: Mutex<MemoCache>,
}

impl QueryEngine {
    /// `offset` fixes the calendar used for day bucketing.
    pub fn new(records: Vec<LogRecord>, offset: FixedOffset) -> Self {
        Self {
            records,
            offset,
            cache: Mutex::new(MemoCache::default()),
        }
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Run (or replay) a query cycle.
    pub fn run(&self, params: &QueryParams) -> Arc<QueryOutput> {
        {
            let mut cache = self.cache.lock().expect("memo cache poisoned");
            if let Some(output) = cache.entries.get(params).map(Arc::clone) {
                cache.hits += 1;
                debug!(?params, "query memo hit");
                return output;
            }
            cache.misses += 1;
        }

        let output = Arc::new(run_query(&self.records, params, self.offset));

        let mut cache = self.cache.lock().expect("memo cache poisoned");
        cache
            .entries
            .entry(params.clone())
            .or_insert_with(|| Arc::clone(&output));
        debug!(
            total_count = output.total_count,
            entries = cache.entries.len(),
            "query memo store"
        );

        output
    }

    pub fn cache_stats(&self) -> CacheStats {
        let cache = self.cache.lock().expect("memo cache poisoned");
        CacheStats {
            hits: cache.hits,
            misses: cache.misses,
            entries: cache.entries.len(),
        }
    }
}
