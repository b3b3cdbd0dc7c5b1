use std::collections::BTreeSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use log::{debug, info};

use crate::store::datafile::{DataFile, MemStore, TableStore};
use crate::store::error::{DbError, Result};
use crate::store::query::Query;
use crate::store::schema::Schema;
use crate::store::table::Table;

/// The collective of multiple [`Table`] objects and the single [`Schema`]
/// that mirrors them.
///
/// A table's existence has two planes. The in-memory plane (this struct's
/// table map) is authoritative for every read and write; the storage plane
/// is authoritative only across restarts. The two diverge between a
/// mutation and the next [`Database::commit`], which reconciles them by
/// full overwrite rather than incrementally.
///
/// Construction eagerly loads every stored table, and also takes a snapshot
/// of the stored table names. Commit diffs that snapshot against the live
/// set to garbage-collect dropped tables, instead of re-listing storage
/// each time.
///
/// All mutation is in place with no internal locking; `&mut self`
/// receivers keep access exclusive, so concurrent callers must serialize
/// around the whole database themselves.
pub struct Database {
    tables: IndexMap<String, Table>,
    schema: Schema,
    store: Box<dyn TableStore>,
    persisted: BTreeSet<String>,
}

impl Database {
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Database> {
        //! Open a database over a data directory, creating the directory
        //! if needed, and build every stored table into memory. Fails if
        //! the location is unusable or any blob is corrupt.

        let store = DataFile::new(data_dir)?;
        Self::build_tables(Box::new(store))
    }

    pub fn in_memory() -> Database {
        //! An empty database over a throwaway in-memory store.

        Database {
            tables: IndexMap::new(),
            schema: Schema::new(),
            store: Box::new(MemStore::new()),
            persisted: BTreeSet::new(),
        }
    }

    pub fn with_store(store: Box<dyn TableStore>) -> Result<Database> {
        //! Open a database over any [`TableStore`] implementation.

        Self::build_tables(store)
    }

    fn build_tables(store: Box<dyn TableStore>) -> Result<Database> {
        //! Create all stored tables as objects in memory, registering each
        //! with the catalog and with the persisted-name snapshot.

        let mut tables = IndexMap::new();
        let mut schema = Schema::new();
        let mut persisted = BTreeSet::new();

        for name in store.list()? {
            let table = store.load(&name)?;
            schema.create_table(&name, table.columns())?;
            tables.insert(name.clone(), table);
            persisted.insert(name);
        }

        info!("database opened with {} stored table(s)", tables.len());

        Ok(Database {
            tables,
            schema,
            store,
            persisted,
        })
    }

    pub fn create_table(&mut self, name: &str, columns: Vec<String>) -> Result<()> {
        //! Create a table and its catalog entry as one step.

        if self.tables.contains_key(name) {
            return Err(DbError::AlreadyExists(format!("table '{}'", name)));
        }

        let table = Table::new(name.to_string(), columns)?;
        self.schema.create_table(name, table.columns())?;
        self.tables.insert(name.to_string(), table);
        Ok(())
    }

    pub fn drop_table(&mut self, name: &str) -> Result<Table> {
        //! Remove a table from the live set along with its catalog entry,
        //! returning it. Storage is untouched until the next commit.

        let table = self
            .tables
            .shift_remove(name)
            .ok_or_else(|| DbError::NotFound(format!("table '{}'", name)))?;

        self.schema.drop_table(name)?;
        Ok(table)
    }

    pub fn get_table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| DbError::NotFound(format!("table '{}'", name)))
    }

    pub(crate) fn get_table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| DbError::NotFound(format!("table '{}'", name)))
    }

    pub(crate) fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }

    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn query(&mut self) -> Query<'_> {
        //! Get the query facade over this database.

        Query::new(self)
    }

    pub fn commit(&mut self) -> Result<()> {
        //! Write every live table back to storage, then garbage-collect
        //! the blobs of tables dropped since the last load or commit.
        //!
        //! Two phases: all saves must succeed before any delete runs, so a
        //! failed commit never leaves a mix of freshly written blobs and
        //! missing ones. With no intervening mutation a second commit
        //! rewrites identical blobs and deletes nothing.

        for (name, table) in self.tables.iter() {
            self.store.save(table, name)?;
        }

        let live: BTreeSet<String> = self.tables.keys().cloned().collect();
        for name in self.persisted.difference(&live) {
            self.store.delete(name)?;
            debug!("garbage-collected dropped table '{}'", name);
        }

        self.persisted = live;
        info!("committed {} table(s)", self.tables.len());
        Ok(())
    }
}
