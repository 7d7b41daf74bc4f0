//! Whole-file JSON persistence for the recipe collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Recipe;

/// Errors that can occur while saving the recipe document.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error for {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to serialize recipes: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage for the recipe collection.
///
/// The whole collection is kept as one JSON document; load and save always
/// operate on the entire file.
#[derive(Clone, Debug)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path of the recipe document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the collection from disk.
    ///
    /// A missing, unreadable, or unparsable document yields an empty
    /// collection; startup never fails on bad data.
    pub fn load(&self) -> Vec<Recipe> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no recipe file at {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!("failed to parse {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Saves the full collection, overwriting any prior content.
    ///
    /// Creates the containing directory if it doesn't exist. The document is
    /// written to a temp file in the same directory and renamed into place.
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Io(parent.to_path_buf(), e))?;
            }
        }

        let json = serde_json::to_string_pretty(recipes)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, json).map_err(|e| StoreError::Io(tmp.clone(), e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(self.path.clone(), e))?;

        Ok(())
    }
}
