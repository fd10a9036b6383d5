use crate::record::LogRecord;

/// Slice a sequence into a fixed-size page.
///
/// The window is `[page_index * page_size, page_index * page_size +
/// page_size)` clipped to the sequence bounds; an out-of-range index yields
/// an empty page, never an error. Any positive page size is accepted; the
/// `{10, 25, 50}` option set is a view-layer concern, as is resetting the
/// page index when the size changes.
pub fn paginate(records: &[LogRecord], page_index: usize, page_size: usize) -> Vec<LogRecord> {
    if page_size == 0 {
        return Vec::new();
    }

    let start = page_index.saturating_mul(page_size);
    if start >= records.len() {
        return Vec::new();
    }

    let end = (start + page_size).min(records.len());
    records[start..end].to_vec()
}
