use crate::query::attributes::AttributeFilter;
use crate::query::pipeline::{QueryParams, DEFAULT_PAGE_SIZE};
use crate::query::range::DateRange;
use crate::query::sort::{SortDirection, SortField};

/// Interactive sort/page state for a results table.
///
/// The stateless stages accept whatever indices they are given; the caller
/// contracts live here instead: toggling the current sort column flips the
/// direction, picking a new column resets it to ascending, and changing the
/// page size snaps back to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort_field: None,
            sort_direction: SortDirection::Asc,
            page_index: 0,
            page_size,
        }
    }

    /// Column-header click semantics.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == Some(field) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = Some(field);
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Changing the page size resets to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    /// Combine with the active filters into a full parameter set.
    pub fn to_params(&self, range: DateRange, filter: AttributeFilter) -> QueryParams {
        QueryParams {
            range,
            filter,
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let mut state = TableState::default();

        state.toggle_sort(SortField::Timestamp);
        assert_eq!(state.sort_field, Some(SortField::Timestamp));
        assert_eq!(state.sort_direction, SortDirection::Asc);

        state.toggle_sort(SortField::Timestamp);
        assert_eq!(state.sort_direction, SortDirection::Desc);

        state.toggle_sort(SortField::Timestamp);
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_new_column_resets_to_ascending() {
        let mut state = TableState::default();
        state.toggle_sort(SortField::Url);
        state.toggle_sort(SortField::Url); // now desc

        state.toggle_sort(SortField::Status);
        assert_eq!(state.sort_field, Some(SortField::Status));
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = TableState::new(10);
        state.set_page(4);

        state.set_page_size(25);
        assert_eq!(state.page_size, 25);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_to_params_carries_everything() {
        let mut state = TableState::new(25);
        state.toggle_sort(SortField::ResponseTime);
        state.set_page(2);

        let range = DateRange::new(Some(0), Some(1_000));
        let params = state.to_params(range, AttributeFilter::default());

        assert_eq!(params.range, range);
        assert_eq!(params.sort_field, Some(SortField::ResponseTime));
        assert_eq!(params.page_index, 2);
        assert_eq!(params.page_size, 25);
    }
}
