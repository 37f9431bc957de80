// src/gui/router.rs
use super::pages::{self, Tab};
use crate::config::options::TabKind;

pub static TABS: &[&'static dyn Tab] = &[
    &pages::overview::TAB,
    &pages::competitors::TAB,
    &pages::keywords::TAB,
    &pages::site_pages::TAB,
];

pub fn all_tabs() -> &'static [&'static dyn Tab] {
    TABS
}

pub fn index_of(kind: TabKind) -> usize {
    TABS.iter().position(|t| t.kind() == kind).unwrap_or(0)
}
