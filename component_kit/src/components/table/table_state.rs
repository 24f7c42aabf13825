// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use strum_macros::{AsRefStr, Display};

use crate::{ConfigError, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_index: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// # Errors
    ///
    /// [`ConfigError::ZeroPageSize`] if `page_size` is zero.
    pub fn try_new(page_index: usize, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    #[must_use]
    pub fn page_index(&self) -> usize { self.page_index }

    #[must_use]
    pub fn page_size(&self) -> usize { self.page_size }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[strum(serialize = "asc")]
    Ascending,
    #[strum(serialize = "desc")]
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub column_id: String,
    pub direction: SortDirection,
}

/// Paging and sorting of a data table. Row data is not held here, so every operation
/// that depends on it takes the row count.
///
/// Sorting is by one column at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    pub pagination: PaginationState,
    pub sorting: Option<ColumnSort>,
}

impl TableState {
    #[must_use]
    pub fn new(pagination: PaginationState) -> Self {
        Self {
            pagination,
            sorting: None,
        }
    }

    #[must_use]
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .as_ref()
            .filter(|sort| sort.column_id == column_id)
            .map(|sort| sort.direction)
    }

    /// Cycles the sort of `column_id`: unsorted, ascending, descending, unsorted.
    /// Sorting a different column replaces the current sort. Goes back to the first
    /// page, since the rows on every page change.
    pub fn toggle_sorting(&mut self, column_id: &str) {
        let next = match self.sort_direction(column_id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.sorting = next.map(|direction| ColumnSort {
            column_id: column_id.to_string(),
            direction,
        });
        self.pagination.page_index = 0;
    }

    /// Zero when there are no rows.
    #[must_use]
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.pagination.page_size)
    }

    #[must_use]
    pub fn can_previous_page(&self) -> bool { self.pagination.page_index > 0 }

    #[must_use]
    pub fn can_next_page(&self, row_count: usize) -> bool {
        self.pagination.page_index < self.page_count(row_count).saturating_sub(1)
    }

    /// Returns `false` (and stays put) on the last page.
    pub fn next_page(&mut self, row_count: usize) -> bool {
        if !self.can_next_page(row_count) {
            return false;
        }
        self.pagination.page_index += 1;
        true
    }

    /// Returns `false` (and stays put) on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            return false;
        }
        self.pagination.page_index -= 1;
        true
    }

    /// Jumps to `page_index`, clamped to the existing pages.
    pub fn set_page_index(&mut self, page_index: usize, row_count: usize) {
        let last = self.page_count(row_count).saturating_sub(1);
        self.pagination.page_index = page_index.min(last);
    }

    /// Indices of the rows on the current page. Empty if the page index is past the
    /// end, eg: after rows were removed.
    #[must_use]
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        let PaginationState {
            page_index,
            page_size,
        } = self.pagination;
        let start = page_index.saturating_mul(page_size).min(row_count);
        let end = start.saturating_add(page_size).min(row_count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_defaults() {
        let it = TableState::default();
        assert_eq!(it.pagination.page_index(), 0);
        assert_eq!(it.pagination.page_size(), 10);
        assert_eq!(it.sorting, None);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(PaginationState::try_new(0, 0), Err(ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_toggle_sorting_cycles() {
        let mut it = TableState::default();
        it.toggle_sorting("name");
        assert_eq!(it.sort_direction("name"), Some(SortDirection::Ascending));
        it.toggle_sorting("name");
        assert_eq!(it.sort_direction("name"), Some(SortDirection::Descending));
        it.toggle_sorting("name");
        assert_eq!(it.sort_direction("name"), None);
        assert_eq!(it.sorting, None);
    }

    #[test]
    fn test_toggle_other_column_replaces_sort() {
        let mut it = TableState::default();
        it.toggle_sorting("name");
        it.toggle_sorting("name");
        it.toggle_sorting("age");
        assert_eq!(it.sort_direction("name"), None);
        assert_eq!(it.sort_direction("age"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_toggle_sorting_goes_to_first_page() {
        let mut it = TableState::default();
        it.set_page_index(3, 100);
        it.toggle_sorting("name");
        assert_eq!(it.pagination.page_index(), 0);
    }

    #[test_case(0 => 0)]
    #[test_case(1 => 1)]
    #[test_case(10 => 1)]
    #[test_case(11 => 2)]
    #[test_case(95 => 10)]
    fn test_page_count(row_count: usize) -> usize { TableState::default().page_count(row_count) }

    #[test]
    fn test_paging() {
        let mut it = TableState::default();
        assert!(!it.can_previous_page());
        assert!(!it.previous_page());
        assert!(it.can_next_page(25));

        assert!(it.next_page(25));
        assert!(it.next_page(25));
        assert_eq!(it.page_range(25), 20..25);
        assert!(!it.can_next_page(25));
        assert!(!it.next_page(25));

        assert!(it.previous_page());
        assert_eq!(it.page_range(25), 10..20);
    }

    #[test]
    fn test_last_possible_page_index_has_no_next_page() {
        let mut it = TableState::new(PaginationState::try_new(usize::MAX, 10).unwrap());
        assert!(!it.can_next_page(5));
        assert!(!it.can_next_page(usize::MAX));
        assert!(!it.next_page(usize::MAX));
        assert!(it.can_previous_page());
    }

    #[test]
    fn test_set_page_index_is_clamped() {
        let mut it = TableState::default();
        it.set_page_index(99, 25);
        assert_eq!(it.pagination.page_index(), 2);
        it.set_page_index(5, 0);
        assert_eq!(it.pagination.page_index(), 0);
    }

    #[test]
    fn test_page_range_past_the_end_is_empty() {
        let it = TableState::new(PaginationState::try_new(4, 10).unwrap());
        assert_eq!(it.page_range(25), 25..25);
    }
}
