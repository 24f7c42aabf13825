// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering, fmt};

use crate::{SortDirection, TableState};

/// What a column sorts by. Keys of different variants order by variant, so a column
/// accessor should stick to one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Int(i64),
    Text(String),
}

impl From<i64> for SortKey {
    fn from(value: i64) -> Self { Self::Int(value) }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self { Self::Text(value.to_string()) }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self { Self::Text(value) }
}

type SortAccessor<T> = Box<dyn Fn(&T) -> SortKey + Send + Sync>;

/// A column of a [`Table`]. Only columns with a sort accessor are sortable.
pub struct ColumnDef<T> {
    pub id: String,
    pub header: String,
    sort_accessor: Option<SortAccessor<T>>,
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("is_sortable", &self.is_sortable())
            .finish()
    }
}

impl<T> ColumnDef<T> {
    #[must_use]
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sort_accessor: None,
        }
    }

    #[must_use]
    pub fn sortable_by<K: Into<SortKey>>(
        mut self,
        accessor: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        self.sort_accessor = Some(Box::new(move |row| accessor(row).into()));
        self
    }

    #[must_use]
    pub fn is_sortable(&self) -> bool { self.sort_accessor.is_some() }

    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        match &self.sort_accessor {
            Some(accessor) => accessor(lhs).cmp(&accessor(rhs)),
            None => Ordering::Equal,
        }
    }
}

/// What the table body should render.
#[derive(Debug, PartialEq, Eq)]
pub enum TableView<'a, T> {
    /// Rows are being fetched and there are none to show yet.
    Loading,
    /// No rows, and none coming.
    Empty,
    /// The current page, sorted.
    Rows(Vec<&'a T>),
}

/// Data table over caller-owned rows. Holds the column definitions and the
/// [`TableState`], never the rows.
#[derive(Debug)]
pub struct Table<T> {
    columns: Vec<ColumnDef<T>>,
    pub state: TableState,
}

impl<T> Table<T> {
    #[must_use]
    pub fn new(columns: Vec<ColumnDef<T>>) -> Self {
        Self {
            columns,
            state: TableState::default(),
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: TableState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnDef<T>] { &self.columns }

    /// Header click. Returns `false` (and leaves the sort alone) if the column does not
    /// exist or is not sortable.
    pub fn toggle_sorting(&mut self, column_id: &str) -> bool {
        let is_sortable = self
            .columns
            .iter()
            .any(|column| column.id == column_id && column.is_sortable());
        if is_sortable {
            self.state.toggle_sorting(column_id);
        }
        is_sortable
    }

    /// Rows with loading but no data shows the loading state. Otherwise an empty row set
    /// is [`TableView::Empty`], and anything else is the current page of the sorted rows.
    /// Rows that compare equal keep their order.
    #[must_use]
    pub fn view<'a>(&self, rows: &'a [T], is_loading: bool) -> TableView<'a, T> {
        if rows.is_empty() {
            return if is_loading {
                TableView::Loading
            } else {
                TableView::Empty
            };
        }

        let mut sorted = rows.iter().collect::<Vec<_>>();
        if let Some(sort) = self.state.sorting.as_ref()
            && let Some(column) = self.columns.iter().find(|it| it.id == sort.column_id)
        {
            sorted.sort_by(|lhs, rhs| match sort.direction {
                SortDirection::Ascending => column.compare(lhs, rhs),
                SortDirection::Descending => column.compare(rhs, lhs),
            });
        }

        let range = self.state.page_range(sorted.len());
        TableView::Rows(sorted.drain(range).collect())
    }

    #[must_use]
    pub fn page_count(&self, rows: &[T]) -> usize { self.state.page_count(rows.len()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::PaginationState;

    #[derive(Debug, PartialEq, Eq)]
    struct Person {
        name: &'static str,
        age: i64,
    }

    fn make_rows() -> Vec<Person> {
        vec![
            Person { name: "Carla", age: 41 },
            Person { name: "Aldo", age: 29 },
            Person { name: "Bruno", age: 35 },
            Person { name: "Dario", age: 29 },
        ]
    }

    fn make_table() -> Table<Person> {
        Table::new(vec![
            ColumnDef::new("name", "Name").sortable_by(|it: &Person| it.name),
            ColumnDef::new("age", "Age").sortable_by(|it: &Person| it.age),
            ColumnDef::new("actions", ""),
        ])
    }

    fn names(view: &TableView<'_, Person>) -> Vec<&'static str> {
        match view {
            TableView::Rows(rows) => rows.iter().map(|it| it.name).collect(),
            TableView::Loading | TableView::Empty => vec![],
        }
    }

    #[test]
    fn test_loading_and_empty() {
        let table = make_table();
        assert_eq!(table.view(&[], true), TableView::Loading);
        assert_eq!(table.view(&[], false), TableView::Empty);

        // Data already there wins over the loading flag.
        let rows = make_rows();
        assert_eq!(names(&table.view(&rows, true)).len(), 4);
    }

    #[test]
    fn test_unsorted_keeps_caller_order() {
        let rows = make_rows();
        let table = make_table();
        assert_eq!(
            names(&table.view(&rows, false)),
            vec!["Carla", "Aldo", "Bruno", "Dario"]
        );
    }

    #[test]
    fn test_sort_cycle() {
        let rows = make_rows();
        let mut table = make_table();

        assert!(table.toggle_sorting("name"));
        assert_eq!(
            names(&table.view(&rows, false)),
            vec!["Aldo", "Bruno", "Carla", "Dario"]
        );

        table.toggle_sorting("name");
        assert_eq!(
            names(&table.view(&rows, false)),
            vec!["Dario", "Carla", "Bruno", "Aldo"]
        );

        table.toggle_sorting("name");
        assert_eq!(
            names(&table.view(&rows, false)),
            vec!["Carla", "Aldo", "Bruno", "Dario"]
        );
    }

    #[test]
    fn test_equal_keys_keep_order() {
        let rows = make_rows();
        let mut table = make_table();
        table.toggle_sorting("age");
        assert_eq!(
            names(&table.view(&rows, false)),
            vec!["Aldo", "Dario", "Bruno", "Carla"]
        );
    }

    #[test]
    fn test_unsortable_column() {
        let mut table = make_table();
        assert!(!table.toggle_sorting("actions"));
        assert!(!table.toggle_sorting("missing"));
        assert_eq!(table.state.sorting, None);
    }

    #[test]
    fn test_paging_after_sort() {
        let rows = make_rows();
        let mut table = make_table()
            .with_state(TableState::new(PaginationState::try_new(0, 3).unwrap()));
        table.toggle_sorting("name");
        assert_eq!(table.page_count(&rows), 2);

        assert!(table.state.next_page(rows.len()));
        assert_eq!(names(&table.view(&rows, false)), vec!["Dario"]);
    }
}
