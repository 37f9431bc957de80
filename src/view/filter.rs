// src/view/filter.rs

use crate::record::{Column, Value};

/// Substring match over the searchable columns of a record.
///
/// - Empty/whitespace-only queries match everything.
/// - Case-insensitive containment; no tokenizing, no fuzz. The query is
///   lowercased but otherwise taken verbatim, padding included.
/// - Missing fields never match and never fail.
pub fn matches_query<R>(rec: &R, query: &str, columns: &[Column<R>]) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let q = query.to_lowercase();

    columns
        .iter()
        .filter(|c| c.searchable)
        .any(|c| match c.value(rec) {
            Value::Missing => false,
            v => v.display().to_lowercase().contains(&q),
        })
}
