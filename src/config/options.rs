// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::file;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub export: ExportOptions,
}

/// Which tab is active. Overview is the only non-tabular one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TabKind {
    Overview,
    Competitors,
    Keywords,
    Pages,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    /// Project domain; first half of the `<domain>_<date>.csv` filename.
    pub domain: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            domain: s!(DEFAULT_DOMAIN),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into the output directory. The filename is never
    /// user-editable; it is always `<domain>_<date>.csv`.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_dir = PathBuf::from(s);
        }
    }

    /// The path the next export would write to.
    pub fn out_path(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(self.out_dir.join(file::export_filename(&self.domain)?))
    }
}
