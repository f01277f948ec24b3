// Runtime reads only: the catalog is loaded once at process start and
// never mutated.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::entry::FaqEntry;

const BUILTIN_FAQS: &str = include_str!("../../data/faqs.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The ordered FAQ list the engine matches against.
#[derive(Debug, Clone)]
pub struct FaqCatalog {
    entries: Vec<FaqEntry>,
}

impl FaqCatalog {
    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let entries = serde_json::from_str(BUILTIN_FAQS)?;
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON file: an array of entries.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let entries = serde_json::from_str(&raw)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
