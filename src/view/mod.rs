// src/view/mod.rs
//
// The filter → sort → project core behind every tabular tab.
// GUI-free on purpose: the egui layer and the CLI both drive it.

pub mod controller;
pub mod debounce;
pub mod filter;
pub mod sort;

pub use controller::{Notice, NoticeKind, TableView, ViewEvent};
pub use debounce::Debouncer;
pub use sort::SortDirection;
