// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::csv;

const DATE_FMT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// `<domain>_<ISO-date>.csv`, domain sanitized for the filesystem.
pub fn export_filename(domain: &str) -> Result<String, Box<dyn std::error::Error>> {
    let date = OffsetDateTime::now_utc().format(DATE_FMT)?;
    Ok(join!(sanitize_domain(domain), "_", &date, ".csv"))
}

/// Write the current filtered view to `<dir>/<domain>_<date>.csv`.
/// Returns the final path written to. An empty view is a caller error:
/// nothing is written and the caller surfaces it on the notice channel.
pub fn write_export(
    dir: &Path,
    domain: &str,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if rows.is_empty() {
        return Err("Nothing to export".into());
    }

    ensure_directory(dir)?;
    let path = dir.join(export_filename(domain)?);
    fs::write(&path, csv::to_export_string(headers, rows))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Keep alphanumerics, dots and dashes; collapse everything else to '_'.
/// Domains are mostly filesystem-safe already, so this rarely changes much.
pub fn sanitize_domain(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("export") } else { out }
}
