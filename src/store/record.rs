use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::store::error::{DbError, Result};

/// Holds a single record in a table, aka a row.
///
/// A record has no identity beyond its position inside the table that owns
/// it, and it never moves between tables. Its width always equals the owning
/// table's column count; the column operations on [`super::Table`] keep the
/// two in step by calling [`Record::append_field`] and
/// [`Record::remove_field`] on every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new(values: Vec<String>) -> Record {
        Record(values)
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        //! Get the value of the field at `index`.

        self.0
            .get(index)
            .map(|value| value.as_str())
            .ok_or(DbError::OutOfRange(index))
    }

    pub fn set(&mut self, index: usize, value: String) -> Result<()> {
        //! Overwrite the value of the field at `index`.

        match self.0.get_mut(index) {
            Some(field) => {
                *field = value;
                Ok(())
            }
            None => Err(DbError::OutOfRange(index)),
        }
    }

    pub fn append_field(&mut self, value: Option<&str>) {
        //! Grow the record by one field, used when a column is added.
        //! With no default value the new field is the empty string.

        self.0.push(value.unwrap_or_default().to_string());
    }

    pub fn remove_field(&mut self, index: usize) -> Result<()> {
        //! Shrink the record by one field, used when a column is dropped.

        if index < self.0.len() {
            self.0.remove(index);
            Ok(())
        } else {
            Err(DbError::OutOfRange(index))
        }
    }

    pub fn values(&self) -> Vec<String> {
        //! Get a copy of all field values, in column order.

        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" | "))
    }
}
