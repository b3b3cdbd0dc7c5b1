//! Reading and writing of tables to and from storage.
//!
//! One table is one opaque blob keyed by the table name; the stored table
//! set is whatever [`TableStore::list`] reports, there is no separate index
//! file. The only format guarantee is a lossless round trip of column
//! names, column order and row order.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::store::error::{DbError, Result};
use crate::store::table::Table;

/// The persistence collaborator consumed by [`super::Database`].
///
/// Kept behind a trait so a database can run against the filesystem or
/// against plain memory without caring which.
pub trait TableStore {
    /// Serialize the full table as one blob under `name`, overwriting any
    /// existing blob of that name.
    fn save(&mut self, table: &Table, name: &str) -> Result<()>;

    /// Deserialize the blob stored under `name` back into a table.
    fn load(&self, name: &str) -> Result<Table>;

    /// Get the names of all stored tables.
    fn list(&self) -> Result<Vec<String>>;

    /// Remove the blob stored under `name`.
    fn delete(&mut self, name: &str) -> Result<()>;
}

/// Filesystem-backed [`TableStore`]: one JSON file per table inside a data
/// directory.
///
/// Saves go through a temporary file that is renamed into place, so a
/// failed write never leaves a half-written blob under the real name.
#[derive(Debug)]
pub struct DataFile {
    data_dir: PathBuf,
}

impl DataFile {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<DataFile> {
        //! Open a data directory, creating it if needed.

        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(DataFile { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }
}

impl TableStore for DataFile {
    fn save(&mut self, table: &Table, name: &str) -> Result<()> {
        let payload = serde_json::to_string_pretty(table)
            .map_err(|e| DbError::CorruptData(format!("'{}': {}", name, e)))?;

        let path = self.blob_path(name);
        let staged = self.data_dir.join(format!("{}.json.tmp", name));
        fs::write(&staged, payload)?;
        fs::rename(&staged, &path)?;

        debug!("saved table '{}' to {}", name, path.display());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Table> {
        let path = self.blob_path(name);

        if !path.exists() {
            return Err(DbError::NotFound(format!("stored table '{}'", name)));
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| DbError::CorruptData(format!("'{}': {}", name, e)))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.blob_path(name);

        if !path.exists() {
            return Err(DbError::NotFound(format!("stored table '{}'", name)));
        }

        fs::remove_file(&path)?;
        debug!("deleted stored table '{}'", name);
        Ok(())
    }
}

/// In-memory [`TableStore`] for throwaway databases and tests. Blobs live
/// only as long as the store does.
#[derive(Debug, Default)]
pub struct MemStore {
    tables: HashMap<String, Table>,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore {
            tables: HashMap::new(),
        }
    }
}

impl TableStore for MemStore {
    fn save(&mut self, table: &Table, name: &str) -> Result<()> {
        self.tables.insert(name.to_string(), table.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Table> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| DbError::NotFound(format!("stored table '{}'", name)))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.tables
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DbError::NotFound(format!("stored table '{}'", name)))
    }
}
