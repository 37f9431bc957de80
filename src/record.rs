// src/record.rs
//
// Record shapes for the three tabular views, plus the column tables that
// drive them.
//
// - Value: what a cell holds once a column accessor has run. Missing is a
//   first-class state (renders as '-', sorts as 0).
// - Column<R>: one entry of a per-shape field-accessor table. The table view
//   is generic over R and never looks inside a record directly; everything
//   goes through `get`.
//
// Field names mirror the store's JSON documents, so the serde derives map
// 1:1 without rename attributes.

use serde::{Deserialize, Serialize};

/// A single cell value as produced by a column accessor.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Num(f64),
    Missing,
}

impl Value {
    pub fn text(s: &str) -> Self {
        Value::Text(s!(s))
    }

    pub fn count(v: Option<u32>) -> Self {
        match v {
            Some(n) => Value::Num(n as f64),
            None => Value::Missing,
        }
    }

    pub fn num(v: Option<f64>) -> Self {
        match v {
            Some(n) => Value::Num(n),
            None => Value::Missing,
        }
    }

    /// Display form. Missing renders as the '-' sentinel; whole numbers
    /// drop the fractional part.
    pub fn display(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Num(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Value::Num(n) => format!("{:.1}", n),
            Value::Missing => s!("-"),
        }
    }

    /// Numeric key for ordering. Missing counts as 0.
    pub fn sort_num(&self) -> f64 {
        match self {
            Value::Num(n) => *n,
            _ => 0.0,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

/// One column of a tabular view: label, behavior flags, and the accessor
/// that pulls the cell value out of a record.
pub struct Column<R: 'static> {
    pub key: &'static str,
    pub label: &'static str,
    /// Numeric columns are centered and right-sized; text columns lead.
    pub numeric: bool,
    /// Searchable columns participate in the substring filter.
    pub searchable: bool,
    /// Clicking a cell in an activatable column raises KeywordActivated.
    pub activatable: bool,
    pub get: fn(&R) -> Value,
}

impl<R> Column<R> {
    pub fn value(&self, rec: &R) -> Value {
        (self.get)(rec)
    }
}

/* ---------------- Competitors ---------------- */

/// One competing domain as tracked for the active project domain.
/// `keys` is a history of total ranked keywords; the latest entry is shown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    pub name: String,
    #[serde(default)]
    pub vis: Option<f64>,
    #[serde(default)]
    pub keys: Vec<u32>,
    #[serde(default)]
    pub it1: Option<u32>,
    #[serde(default)]
    pub it3: Option<u32>,
    #[serde(default)]
    pub it10: Option<u32>,
    #[serde(default)]
    pub common_keys: Option<u32>,
}

fn latest(keys: &[u32]) -> Value {
    Value::count(keys.last().copied())
}

pub static COMPETITOR_COLUMNS: &[Column<CompetitorRecord>] = &[
    Column { key: "name", label: "Domain", numeric: false, searchable: true, activatable: false,
        get: |r| Value::text(&r.name) },
    Column { key: "vis", label: "Visibility", numeric: true, searchable: false, activatable: false,
        get: |r| Value::num(r.vis) },
    Column { key: "keys", label: "Keywords", numeric: true, searchable: false, activatable: false,
        get: |r| latest(&r.keys) },
    Column { key: "it1", label: "Top 1", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.it1) },
    Column { key: "it3", label: "Top 3", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.it3) },
    Column { key: "it10", label: "Top 10", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.it10) },
    Column { key: "common_keys", label: "Common", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.common_keys) },
];

/* ---------------- Keywords ---------------- */

/// One tracked keyword with its current ranking position and landing URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub word: String,
    #[serde(default)]
    pub ws: Option<u32>,
    #[serde(default)]
    pub wsk: Option<u32>,
    #[serde(default)]
    pub pos: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
}

pub static KEYWORD_COLUMNS: &[Column<KeywordRecord>] = &[
    Column { key: "word", label: "Keyword", numeric: false, searchable: true, activatable: true,
        get: |r| Value::text(&r.word) },
    Column { key: "ws", label: "Volume", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.ws) },
    Column { key: "wsk", label: "Volume (region)", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.wsk) },
    Column { key: "pos", label: "Position", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.pos) },
    Column { key: "url", label: "URL", numeric: false, searchable: true, activatable: false,
        get: |r| match &r.url {
            Some(u) => Value::text(u),
            None => Value::Missing,
        } },
];

/* ---------------- Pages ---------------- */

/// One page of the tracked site with its own visibility slice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub vis: Option<f64>,
    #[serde(default)]
    pub keys: Vec<u32>,
    #[serde(default)]
    pub it1: Option<u32>,
    #[serde(default)]
    pub it3: Option<u32>,
    #[serde(default)]
    pub it10: Option<u32>,
}

pub static PAGE_COLUMNS: &[Column<PageRecord>] = &[
    Column { key: "url", label: "URL", numeric: false, searchable: true, activatable: false,
        get: |r| Value::text(&r.url) },
    Column { key: "title", label: "Title", numeric: false, searchable: true, activatable: false,
        get: |r| Value::text(&r.title) },
    Column { key: "vis", label: "Visibility", numeric: true, searchable: false, activatable: false,
        get: |r| Value::num(r.vis) },
    Column { key: "keys", label: "Keywords", numeric: true, searchable: false, activatable: false,
        get: |r| latest(&r.keys) },
    Column { key: "it1", label: "Top 1", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.it1) },
    Column { key: "it3", label: "Top 3", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.it3) },
    Column { key: "it10", label: "Top 10", numeric: true, searchable: false, activatable: false,
        get: |r| Value::count(r.it10) },
];
