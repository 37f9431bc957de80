// src/store.rs
//
// Flat JSON document store. Deliberately a thin façade: four documents
// (domains, tag_colors, saved_colors, combined all) plus one dataset file
// per tabular view, each read and replaced wholesale. No locking, no
// versioning, no partial updates — callers treat every save as a full
// replacement.

use std::{collections::BTreeMap, fs, io, path::PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::consts::STORE_DIR;

/// One tracked project domain with its UI tags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// tag name → color (hex string, as the UI stores it).
pub type TagColors = BTreeMap<String, String>;

/// Recently used custom colors, most recent last.
pub type SavedColors = Vec<String>;

/// The combined document: everything the settings UI persists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AllDocuments {
    pub domains: Vec<DomainEntry>,
    pub tag_colors: TagColors,
    pub saved_colors: SavedColors,
}

/// Which dataset file backs a tabular view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Competitors,
    Keywords,
    Pages,
}

impl DatasetKind {
    pub fn file_stem(self) -> &'static str {
        match self {
            DatasetKind::Competitors => "competitors",
            DatasetKind::Keywords => "keywords",
            DatasetKind::Pages => "pages",
        }
    }
}

/// A document store rooted at one directory. `Default` is the app's
/// `.store/`; tests root one in a temp dir.
pub struct Store {
    dir: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Self::at(STORE_DIR)
    }
}

impl Store {
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn doc_path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.json"))
    }

    fn load_doc<T: DeserializeOwned + Default>(
        &self,
        stem: &str,
    ) -> Result<T, Box<dyn std::error::Error>> {
        let path = self.doc_path(stem);
        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            // Missing document == empty document; first run has no store.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn save_doc<T: Serialize + ?Sized>(
        &self,
        stem: &str,
        value: &T,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.doc_path(stem);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(path)
    }

    /* ---------------- Documents ---------------- */

    pub fn load_domains(&self) -> Result<Vec<DomainEntry>, Box<dyn std::error::Error>> {
        self.load_doc("domains")
    }

    pub fn save_domains(
        &self,
        domains: &[DomainEntry],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.save_doc("domains", domains)
    }

    pub fn load_tag_colors(&self) -> Result<TagColors, Box<dyn std::error::Error>> {
        self.load_doc("tag_colors")
    }

    pub fn save_tag_colors(
        &self,
        colors: &TagColors,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.save_doc("tag_colors", colors)
    }

    pub fn load_saved_colors(&self) -> Result<SavedColors, Box<dyn std::error::Error>> {
        self.load_doc("saved_colors")
    }

    pub fn save_saved_colors(
        &self,
        colors: &SavedColors,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.save_doc("saved_colors", colors)
    }

    /// The combined view over the three settings documents.
    pub fn load_all(&self) -> Result<AllDocuments, Box<dyn std::error::Error>> {
        Ok(AllDocuments {
            domains: self.load_domains()?,
            tag_colors: self.load_tag_colors()?,
            saved_colors: self.load_saved_colors()?,
        })
    }

    /// Wholesale replacement of all three settings documents.
    pub fn save_all(&self, all: &AllDocuments) -> Result<(), Box<dyn std::error::Error>> {
        self.save_domains(&all.domains)?;
        self.save_tag_colors(&all.tag_colors)?;
        self.save_saved_colors(&all.saved_colors)?;
        Ok(())
    }

    /* ---------------- Datasets ---------------- */

    /// Load the dataset backing one tabular view. Missing file → empty Vec.
    pub fn load_dataset<T: DeserializeOwned>(
        &self,
        kind: DatasetKind,
    ) -> Result<Vec<T>, Box<dyn std::error::Error>> {
        self.load_doc(kind.file_stem())
    }

    pub fn save_dataset<T: Serialize>(
        &self,
        kind: DatasetKind,
        rows: &[T],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.save_doc(kind.file_stem(), rows)
    }
}
