// src/view/sort.rs

use std::cmp::Ordering;

use crate::record::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Total order over cell values.
///
/// If either side is textual, both compare as lowercased text (numbers via
/// their display form). Otherwise numeric natural order, with Missing
/// counting as 0. NaN never enters: accessors only produce finite numbers.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Text(_), _) | (_, Value::Text(_)) => {
            let la = a.display().to_lowercase();
            let lb = b.display().to_lowercase();
            la.cmp(&lb)
        }
        _ => a
            .sort_num()
            .partial_cmp(&b.sort_num())
            .unwrap_or(Ordering::Equal),
    }
}

/// `compare_values` with the direction applied.
/// Desc is the reversed natural comparator, so a stable sort keeps
/// equal-key input order in both directions.
pub fn compare_directed(a: &Value, b: &Value, dir: SortDirection) -> Ordering {
    let ord = compare_values(a, b);
    match dir {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}
