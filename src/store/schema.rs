use indexmap::IndexMap;

use crate::store::error::{DbError, Result};

/// Maintains metadata about the database: a catalog of table names mapped
/// to their ordered column lists.
///
/// The live tables are the source of truth; the schema is a mirrored view.
/// [`super::Query`] and [`super::Database`] apply each structural change to
/// the table and to this catalog as one logical step, so after every
/// successful DDL call the entry here equals the table's live columns.
///
/// Based on an [`IndexMap`] so the catalog lists tables in creation order.
#[derive(Debug, Default)]
pub struct Schema {
    tables: IndexMap<String, Vec<String>>,
}

impl Schema {
    pub fn new() -> Schema {
        Schema {
            tables: IndexMap::new(),
        }
    }

    pub fn create_table(&mut self, name: &str, columns: Vec<String>) -> Result<()> {
        //! Put a table and its columns into the catalog.

        if self.tables.contains_key(name) {
            return Err(DbError::AlreadyExists(format!("table '{}'", name)));
        }

        self.tables.insert(name.to_string(), columns);
        Ok(())
    }

    pub fn drop_table(&mut self, name: &str) -> Result<()> {
        //! Remove a table's entry from the catalog.

        self.tables
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| DbError::NotFound(format!("table '{}'", name)))
    }

    pub fn add_column(&mut self, table: &str, column: &str) -> Result<()> {
        //! Append a column to a table's catalog entry.

        let columns = self.columns_mut(table)?;

        if columns.iter().any(|name| name == column) {
            return Err(DbError::AlreadyExists(format!(
                "column '{}' in '{}'",
                column, table
            )));
        }

        columns.push(column.to_string());
        Ok(())
    }

    pub fn drop_column(&mut self, table: &str, column: &str) -> Result<()> {
        //! Remove a column from a table's catalog entry.

        let columns = self.columns_mut(table)?;
        let index = columns
            .iter()
            .position(|name| name == column)
            .ok_or_else(|| DbError::NotFound(format!("column '{}' in '{}'", column, table)))?;

        columns.remove(index);
        Ok(())
    }

    pub fn rename_column(&mut self, table: &str, old_name: &str, new_name: &str) -> Result<()> {
        //! Change the name of a column in a table's catalog entry.

        let columns = self.columns_mut(table)?;
        let index = columns
            .iter()
            .position(|name| name == old_name)
            .ok_or_else(|| DbError::NotFound(format!("column '{}' in '{}'", old_name, table)))?;

        columns[index] = new_name.to_string();
        Ok(())
    }

    pub fn table(&self, name: &str) -> Result<Vec<String>> {
        //! Get the column list for one table.

        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| DbError::NotFound(format!("table '{}'", name)))
    }

    pub fn all(&self) -> IndexMap<String, Vec<String>> {
        //! Get a snapshot of the entire catalog, table names mapped to
        //! their columns.

        self.tables.clone()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn columns_mut(&mut self, table: &str) -> Result<&mut Vec<String>> {
        self.tables
            .get_mut(table)
            .ok_or_else(|| DbError::NotFound(format!("table '{}'", table)))
    }
}
