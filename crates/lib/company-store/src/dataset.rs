//! Immutable, ordered company dataset.
//!
//! A [`Dataset`] is built once, before any query runs, and is never mutated
//! afterwards. Clones share the same backing slice.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::models::Company;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read dataset at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered, read-only collection of company records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Arc<[Company]>,
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Company>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Parses a JSON array of company objects.
    ///
    /// # Errors
    /// Returns `StoreError::Parse` if the text is not an array of records
    /// carrying at least `id`, `name`, and `industry`.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let records: Vec<Company> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Reads and parses the dataset file at `path`.
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the file cannot be read, or
    /// `StoreError::Parse` if its contents are not a valid dataset.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            "loaded company dataset"
        );
        Ok(dataset)
    }

    #[must_use]
    pub fn records(&self) -> &[Company] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Company> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Company;
    type IntoIter = std::slice::Iter<'a, Company>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
