// src/view/controller.rs
//
// TableView: one filterable/sortable tabular view.
//
// Owns the canonical dataset (replaced wholesale on load, never edited in
// place) and a derived projection of row indices into it. The projection is
// always sort(filter(dataset)) for the current view state; it is recomputed,
// never patched. Holding indices instead of cloned rows keeps re-filtering
// cheap and leaves the dataset untouched.
//
// Events go out through a typed queue the app shell drains each frame;
// no stringly-typed handler names anywhere.

use std::collections::VecDeque;

use crate::record::Column;
use crate::view::filter::matches_query;
use crate::view::sort::{compare_directed, SortDirection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing outcome message (export done, nothing to export, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    Notification(Notice),
    /// A keyword cell was activated; the router seeds the Keywords tab.
    KeywordActivated(String),
}

/// Current UI state of one view. Reset to defaults whenever the dataset
/// is replaced.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub query: String,
    pub sort_key: Option<&'static str>,
    pub sort_dir: SortDirection,
    pub loaded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: s!(),
            sort_key: None,
            sort_dir: SortDirection::Asc,
            loaded: false,
        }
    }
}

pub struct TableView<R: 'static> {
    columns: &'static [Column<R>],
    dataset: Vec<R>,
    /// Positions of visible rows in `dataset`, filter order then sort.
    row_ix: Vec<usize>,
    state: ViewState,
    events: VecDeque<ViewEvent>,
}

impl<R> TableView<R> {
    pub fn new(columns: &'static [Column<R>]) -> Self {
        Self {
            columns,
            dataset: Vec::new(),
            row_ix: Vec::new(),
            state: ViewState::default(),
            events: VecDeque::new(),
        }
    }

    /* ---------------- Loading ---------------- */

    /// Replace the dataset wholesale and reset query/sort to defaults.
    /// `None` means "re-render what you have" (loading placeholder);
    /// an empty Vec is a normal loaded-but-empty state, not an error.
    pub fn load(&mut self, data: Option<Vec<R>>) {
        let Some(data) = data else { return };
        self.dataset = data;
        self.state = ViewState {
            loaded: true,
            ..ViewState::default()
        };
        self.rebuild();
    }

    /// Back to the empty state: dataset, projection and pending events gone.
    pub fn reset(&mut self) {
        self.dataset.clear();
        self.row_ix.clear();
        self.state = ViewState::default();
        self.events.clear();
    }

    /* ---------------- Filter & sort ---------------- */

    /// Apply a new query. Recomputes the filter, then re-applies the
    /// current sort; the sort choice survives re-filtering.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.rebuild();
    }

    /// Column-header click: same column toggles direction, a new column
    /// starts ascending. Sorts the current filtered view; the filter stays.
    pub fn sort_by(&mut self, key: &str) {
        let Some(col) = self.columns.iter().find(|c| c.key == key) else {
            logd!("View: sort_by unknown column '{}', ignoring", key);
            return;
        };
        match self.state.sort_key {
            Some(k) if k == col.key => {
                self.state.sort_dir = self.state.sort_dir.toggled();
            }
            _ => {
                self.state.sort_key = Some(col.key);
                self.state.sort_dir = SortDirection::Asc;
            }
        }
        self.apply_sort();
    }

    /// Explicit column + direction (CLI path; no toggle semantics).
    pub fn sort_with(&mut self, key: &str, dir: SortDirection) {
        let Some(col) = self.columns.iter().find(|c| c.key == key) else {
            logd!("View: sort_with unknown column '{}', ignoring", key);
            return;
        };
        self.state.sort_key = Some(col.key);
        self.state.sort_dir = dir;
        self.apply_sort();
    }

    fn rebuild(&mut self) {
        let q = self.state.query.clone();
        self.row_ix = self
            .dataset
            .iter()
            .enumerate()
            .filter(|&(_, r)| matches_query(r, &q, self.columns))
            .map(|(i, _)| i)
            .collect();
        self.apply_sort();
    }

    fn apply_sort(&mut self) {
        let Some(key) = self.state.sort_key else { return };
        let Some(col) = self.columns.iter().find(|c| c.key == key) else { return };
        let dir = self.state.sort_dir;
        let dataset = &self.dataset;
        // Stable: rows with equal keys keep their filter order.
        self.row_ix.sort_by(|&a, &b| {
            compare_directed(&col.value(&dataset[a]), &col.value(&dataset[b]), dir)
        });
    }

    /* ---------------- Reading the projection ---------------- */

    pub fn columns(&self) -> &'static [Column<R>] {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.loaded
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn sort_key(&self) -> Option<&'static str> {
        self.state.sort_key
    }

    pub fn sort_dir(&self) -> SortDirection {
        self.state.sort_dir
    }

    /// Borrow a visible row by projected index.
    pub fn row(&self, i: usize) -> Option<&R> {
        self.row_ix.get(i).and_then(|&ix| self.dataset.get(ix))
    }

    /// Visible rows in view order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.row_ix.iter().map(move |&ix| &self.dataset[ix])
    }

    /// Header labels in column-table order (the CSV header line).
    pub fn header_labels(&self) -> Vec<String> {
        self.columns.iter().map(|c| s!(c.label)).collect()
    }

    /// Stringified visible rows in column-table order (the CSV body).
    pub fn export_rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|r| self.columns.iter().map(|c| c.value(r).display()).collect())
            .collect()
    }

    /* ---------------- Events ---------------- */

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.events.push_back(ViewEvent::Notification(Notice {
            kind,
            message: message.into(),
        }));
    }

    pub fn activate_keyword(&mut self, word: impl Into<String>) {
        self.events.push_back(ViewEvent::KeywordActivated(word.into()));
    }

    /// Drain one pending event, oldest first.
    pub fn poll_event(&mut self) -> Option<ViewEvent> {
        self.events.pop_front()
    }
}
