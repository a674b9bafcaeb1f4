//! Static catalog loader
//!
//! Reads the item catalog from a JSON file on disk. The file is re-read on
//! every call; there is no caching, so edits show up on the next request.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::types::{Item, ItemId};
use crate::{Error, Result};

/// File-backed catalog source.
pub struct StaticCatalog {
    path: PathBuf,
}

impl StaticCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog file.
    ///
    /// A missing file or malformed JSON surfaces as
    /// [`Error::SourceUnavailable`]; the caller decides how to degrade.
    pub async fn load(&self) -> Result<Vec<Item>> {
        let data = fs::read(&self.path).await.map_err(|e| {
            Error::source_unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        serde_json::from_slice(&data).map_err(|e| {
            Error::source_unavailable(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Load, degrading to an empty catalog on failure.
    ///
    /// The read path never propagates a source error; the failure is logged
    /// and the caller sees an empty sequence.
    pub async fn load_or_empty(&self) -> Vec<Item> {
        match self.load().await {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load static catalog");
                Vec::new()
            }
        }
    }

    /// Linear scan of the catalog for a matching id.
    pub async fn find(&self, id: ItemId) -> Result<Item> {
        let items = self.load().await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(Error::NotFound(id))
    }
}
