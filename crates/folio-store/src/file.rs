//! JSON-file store backend.
//!
//! The whole key-value map is kept in memory and written through to a single
//! JSON object on every mutation:
//!
//! ```json
//! {
//!   "portfolio_theme": "ocean",
//!   "portfolio_page_views": "3"
//! }
//! ```
//!
//! Write failures never propagate through [`KeyValueStore`]: they are logged
//! and the in-memory copy stays authoritative for the rest of the session.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::store::{KeyValueStore, MemoryStore};

/// Store backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl FileStore {
    /// Loads the store from `path`.
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, and
    /// [`StoreError::Corrupt`] if it is not a JSON object of strings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let memory = read_entries(&path)?;
        Ok(Self { path, memory })
    }

    /// Opens the store at `path`, starting empty if it cannot be loaded.
    ///
    /// This is the lenient counterpart of [`load`](Self::load): a broken file
    /// must never prevent the page from working.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        match read_entries(&path) {
            Ok(memory) => Self { path, memory },
            Err(err) => {
                tracing::warn!(error = %err, "starting with an empty store");
                Self {
                    path,
                    memory: MemoryStore::new(),
                }
            }
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the in-memory view of the stored entries.
    pub fn snapshot(&self) -> &MemoryStore {
        &self.memory
    }

    /// Writes the current entries to disk, creating parent directories.
    pub fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.memory.entries())?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        fs::write(&self.path, format!("{json}\n")).map_err(|e| StoreError::io(&self.path, e))
    }

    /// Re-reads the backing file, replacing the in-memory entries.
    pub fn reload(&mut self) -> Result<()> {
        self.memory = read_entries(&self.path)?;
        Ok(())
    }

    fn write_through(&self) {
        if let Err(err) = self.flush() {
            tracing::warn!(error = %err, "failed to persist store");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.memory.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.memory.set(key, value);
        self.write_through();
    }

    fn remove(&mut self, key: &str) {
        if self.memory.contains(key) {
            self.memory.remove(key);
            self.write_through();
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.memory.contains(key)
    }
}

fn read_entries(path: &Path) -> Result<MemoryStore> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(MemoryStore::new()),
        Err(err) => return Err(StoreError::io(path, err)),
    };

    if content.trim().is_empty() {
        return Ok(MemoryStore::new());
    }

    let entries: BTreeMap<String, String> =
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(MemoryStore::from_entries(entries))
}
