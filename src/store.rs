//! Flat-file storage for the todo collection.
//!
//! The whole collection lives in a single JSON array on disk. Every mutation
//! is a full read-modify-write: callers load the array, edit it in memory,
//! and write the whole thing back. There is no locking between the load and
//! the save, so overlapping writers can lose updates; the service runs
//! single-instance and accepts that window.

use crate::types::Todo;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Handle to the persisted todo collection.
///
/// Holds only the file path; there is no connection state and nothing is
/// cached between requests.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Open the store at the given path.
    ///
    /// On first run, creates the containing directory and initializes the
    /// file with an empty collection.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        }

        if !path.exists() {
            fs::write(&path, "[]")
                .with_context(|| format!("failed to initialize data file {}", path.display()))?;
        }

        Ok(Self { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection.
    ///
    /// A missing, unreadable, or unparsable file loads as an empty
    /// collection; reads never fail the request path. No schema validation
    /// beyond deserialization.
    pub fn load(&self) -> Vec<Todo> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                warn!("failed to read {}: {}", self.path.display(), err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(todos) => todos,
            Err(err) => {
                warn!("failed to parse {}: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    /// Overwrite the full collection, pretty-printed.
    ///
    /// Write failures propagate to the caller and fail the request.
    pub fn save(&self, todos: &[Todo]) -> Result<()> {
        let data = serde_json::to_string_pretty(todos)
            .context("failed to serialize todo collection")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
