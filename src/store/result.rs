use std::fmt::Display;

use crate::store::error::{DbError, Result};
use crate::store::record::Record;

/// Presents the outcome of a projection in table shape.
///
/// Same storage as [`super::Table`], relaxed contract: a projection may drop
/// or duplicate the key column, so rows are accepted on width alone, rows
/// are deleted by position instead of key, and no column is protected. A
/// result table is never registered with a database, never enters the
/// catalog and is never persisted.
#[derive(Debug, Clone)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>) -> ResultTable {
        ResultTable {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, values: Vec<String>) -> Result<()> {
        //! Append a row. Width is the only check, duplicate keys are fine
        //! in a projection.

        if values.len() != self.columns.len() {
            return Err(DbError::ArityMismatch {
                expected: self.columns.len(),
                got: values.len(),
            });
        }

        self.rows.push(Record::new(values));
        Ok(())
    }

    pub fn delete_row(&mut self, index: usize) -> Result<Record> {
        //! Remove the row at `index`, zero based. Result rows have no
        //! usable key, so they are addressed by position.

        if index < self.rows.len() {
            Ok(self.rows.remove(index))
        } else {
            Err(DbError::OutOfRange(index))
        }
    }

    pub fn delete_column(&mut self, name: &str) -> Result<()> {
        //! Remove a column and the matching field of every row. Any column
        //! may go, including position 0.

        let index = self
            .columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| DbError::NotFound(format!("column '{}'", name)))?;

        self.columns.remove(index);

        for row in self.rows.iter_mut() {
            row.remove_field(index)?;
        }

        Ok(())
    }

    pub fn columns(&self) -> Vec<String> {
        self.columns.clone()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.values()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Display for ResultTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self.rows.iter().map(|row| format!("{}", row)).collect();
        writeln!(f, "{}\n{}", self.columns.join(" | "), rows.join("\n"))
    }
}
