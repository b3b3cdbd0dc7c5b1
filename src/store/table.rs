use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::store::error::{DbError, Result};
use crate::store::record::Record;

/// Stores a named collection of columns and records.
///
/// This is the dumb class of the store: it only knows how to feed rows into
/// itself and check them on the way in. [`super::Database`] is the smart
/// class that owns the table set, keeps the catalog in step and talks to
/// storage.
///
/// Invariants the table maintains itself:
/// - every record is exactly as wide as the column list;
/// - the value at position 0 (the primary key) is unique across rows.
///
/// Column names are positional metadata only. Position 0 is the primary key
/// column and cannot be deleted. `add_column` performs no duplicate-name
/// check; [`super::Query::add`] closes that gap against the catalog before
/// touching the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new(name: String, columns: Vec<String>) -> Result<Table> {
        //! Create an empty table with the given columns. A table always
        //! carries at least its primary key column at position 0.

        if columns.is_empty() {
            return Err(DbError::ArityMismatch {
                expected: 1,
                got: 0,
            });
        }

        Ok(Table {
            name,
            columns,
            rows: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_column(&mut self, name: &str, default: Option<&str>) {
        //! Append a column to the table. Every existing record grows by
        //! one field holding the default value.

        self.columns.push(name.to_string());

        for row in self.rows.iter_mut() {
            row.append_field(default);
        }
    }

    pub fn delete_column(&mut self, name: &str) -> Result<()> {
        //! Remove a column and the matching field of every record. The
        //! primary key column at position 0 is protected.

        let index = self
            .columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| DbError::NotFound(format!("column '{}'", name)))?;

        if index == 0 {
            return Err(DbError::PrimaryKeyProtected(name.to_string()));
        }

        self.columns.remove(index);

        for row in self.rows.iter_mut() {
            row.remove_field(index)?;
        }

        Ok(())
    }

    pub fn rename_column(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        //! Change the name of a column. Metadata only, records are never
        //! touched.

        let index = self
            .columns
            .iter()
            .position(|column| column == old_name)
            .ok_or_else(|| DbError::NotFound(format!("column '{}'", old_name)))?;

        self.columns[index] = new_name.to_string();
        Ok(())
    }

    pub fn add_row(&mut self, values: Vec<String>) -> Result<()> {
        //! Append a row if its width matches the column list and its
        //! primary key is unique. On failure the table is left untouched.

        if values.len() != self.columns.len() {
            return Err(DbError::ArityMismatch {
                expected: self.columns.len(),
                got: values.len(),
            });
        }

        // Linear scan over position 0. Fine at the scale this store targets.
        let key = &values[0];
        for row in self.rows.iter() {
            if row.get(0)? == key {
                return Err(DbError::DuplicateKey(key.clone()));
            }
        }

        self.rows.push(Record::new(values));
        Ok(())
    }

    pub fn delete_row(&mut self, primary_key: &str) -> Result<Record> {
        //! Remove the row whose primary key matches, returning it.

        let mut found = None;
        for (index, row) in self.rows.iter().enumerate() {
            if row.get(0)? == primary_key {
                found = Some(index);
                break;
            }
        }

        match found {
            Some(index) => Ok(self.rows.remove(index)),
            None => Err(DbError::NotFound(format!("row '{}'", primary_key))),
        }
    }

    pub fn columns(&self) -> Vec<String> {
        //! Get a copy of the column names, in order. Mutating the returned
        //! vector never affects the table.

        self.columns.clone()
    }

    pub fn records(&self) -> Vec<Record> {
        //! Get a copy of all rows as [`Record`]s.

        self.rows.clone()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        //! Get a copy of all rows as plain string vectors, in
        //! `[row][column]` order.

        self.rows.iter().map(|row| row.values()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self.rows.iter().map(|row| format!("{}", row)).collect();
        writeln!(f, "{}\n{}", self.columns.join(" | "), rows.join("\n"))
    }
}
