// src/cli.rs
use std::{env, fs, path::PathBuf};

use serde::de::DeserializeOwned;

use crate::config::consts::{DEFAULT_DOMAIN, DEFAULT_OUT_DIR};
use crate::csv;
use crate::file;
use crate::record::{COMPETITOR_COLUMNS, KEYWORD_COLUMNS, PAGE_COLUMNS};
use crate::record::{CompetitorRecord, Column, KeywordRecord, PageRecord};
use crate::store::{DatasetKind, Store};
use crate::view::{SortDirection, TableView};

pub struct Params {
    pub tab: DatasetKind,
    pub input: Option<PathBuf>,
    pub query: String,
    pub sort: Option<(String, SortDirection)>,
    pub out_dir: PathBuf,
    pub domain: Option<String>,
    pub list: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            tab: DatasetKind::Keywords,
            input: None,
            query: s!(),
            sort: None,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            domain: None,
            list: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    match params.tab {
        DatasetKind::Competitors => run_tab::<CompetitorRecord>(COMPETITOR_COLUMNS, &params),
        DatasetKind::Keywords => run_tab::<KeywordRecord>(KEYWORD_COLUMNS, &params),
        DatasetKind::Pages => run_tab::<PageRecord>(PAGE_COLUMNS, &params),
    }
}

/// Same filter → sort → export pipeline the GUI runs, headless.
fn run_tab<R: DeserializeOwned>(
    columns: &'static [Column<R>],
    p: &Params,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::default();
    let rows: Vec<R> = match &p.input {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => store.load_dataset(p.tab)?,
    };
    logf!("Cli: {:?} loaded rows={}", p.tab, rows.len());

    let mut view = TableView::new(columns);
    view.load(Some(rows));

    if !p.query.is_empty() {
        view.set_query(p.query.clone());
    }
    if let Some((key, dir)) = &p.sort {
        view.sort_with(key, *dir);
    }

    if p.list {
        print!(
            "{}",
            csv::to_clipboard_string(&view.header_labels(), &view.export_rows())
        );
        return Ok(());
    }

    let domain = match &p.domain {
        Some(d) => d.clone(),
        None => store.load_domains()?
            .first()
            .map(|d| d.name.clone())
            .unwrap_or_else(|| s!(DEFAULT_DOMAIN)),
    };

    let path = file::write_export(
        &p.out_dir,
        &domain,
        &view.header_labels(),
        &view.export_rows(),
    )?;
    println!("Exported {} row(s) → {}", view.len(), path.display());
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--tab" => {
                let v = args.next().ok_or("Missing value for --tab")?;
                params.tab = match v.to_ascii_lowercase().as_str() {
                    "competitors" => DatasetKind::Competitors,
                    "keywords" => DatasetKind::Keywords,
                    "pages" => DatasetKind::Pages,
                    other => return Err(format!("Unknown tab: {}", other).into()),
                };
            }
            "-i" | "--input" => {
                params.input = Some(PathBuf::from(args.next().ok_or("Missing input path")?));
            }
            "-q" | "--query" => {
                params.query = args.next().ok_or("Missing value for --query")?;
            }
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                params.sort = Some(parse_sort(&v)?);
            }
            "-o" | "--out" => {
                params.out_dir = PathBuf::from(args.next().ok_or("Missing output dir")?);
            }
            "--domain" => {
                params.domain = Some(args.next().ok_or("Missing value for --domain")?);
            }
            "--list" => params.list = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// `COL` or `COL:asc` / `COL:desc`.
fn parse_sort(s: &str) -> Result<(String, SortDirection), Box<dyn std::error::Error>> {
    match s.split_once(':') {
        None => Ok((s!(s), SortDirection::Asc)),
        Some((col, dir)) => {
            let dir = match dir.to_ascii_lowercase().as_str() {
                "asc" => SortDirection::Asc,
                "desc" => SortDirection::Desc,
                other => return Err(format!("Unknown sort direction: {}", other).into()),
            };
            Ok((s!(col), dir))
        }
    }
}
