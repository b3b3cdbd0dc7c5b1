use crate::store::database::Database;
use crate::store::error::{DbError, Result};
use crate::store::record::Record;
use crate::store::result::ResultTable;

/// Handles all querying of one database: reads, row mutations and the
/// paired table/catalog structural changes.
///
/// The facade itself holds no state beyond the borrow of its database, so
/// one is conjured per call site via [`Database::query`]. Every operation
/// resolves the target table by name first and fails with `NotFound`
/// before anything else is touched.
///
/// The structural operations (`add`, `drop_column`, `rename`) mutate the
/// table and the catalog as one all-or-nothing step: preconditions are
/// checked against the catalog up front, so a half-applied change cannot
/// leave the two diverged.
pub struct Query<'a> {
    db: &'a mut Database,
}

impl<'a> Query<'a> {
    pub(crate) fn new(db: &'a mut Database) -> Query<'a> {
        Query { db }
    }

    pub fn select(&self, table_name: &str, columns: &[&str]) -> Result<ResultTable> {
        //! Project the named columns of every row, in requested order,
        //! into a fresh [`ResultTable`]. A column may be requested more
        //! than once; each request is projected independently.

        let table = self.db.get_table(table_name)?;
        let indices = Self::column_indices(&table.columns(), columns)?;

        let mut result =
            ResultTable::new(columns.iter().map(|column| column.to_string()).collect());

        for record in table.records() {
            let mut row = Vec::with_capacity(indices.len());
            for &index in indices.iter() {
                row.push(record.get(index)?.to_string());
            }
            result.add_row(row)?;
        }

        Ok(result)
    }

    pub fn insert(&mut self, table_name: &str, values: Vec<String>) -> Result<()> {
        //! Insert a single row into a table.

        self.db.get_table_mut(table_name)?.add_row(values)
    }

    pub fn insert_many(&mut self, table_name: &str, rows: Vec<Vec<String>>) -> Result<usize> {
        //! Insert a set of rows into a table, returning how many went in.
        //!
        //! Not atomic: rows inserted before an error stay inserted.

        let table = self.db.get_table_mut(table_name)?;
        let mut n_inserted = 0;

        for values in rows {
            table.add_row(values)?;
            n_inserted += 1;
        }

        Ok(n_inserted)
    }

    pub fn add(&mut self, table_name: &str, column: &str, default: Option<&str>) -> Result<()> {
        //! Add a column to a table and its catalog entry, placing the
        //! default value in the new field of every existing row.

        self.db.get_table(table_name)?;

        // The table itself accepts duplicate column names, so the catalog
        // check has to run before the table grows.
        if self
            .db
            .schema()
            .table(table_name)?
            .iter()
            .any(|name| name == column)
        {
            return Err(DbError::AlreadyExists(format!(
                "column '{}' in '{}'",
                column, table_name
            )));
        }

        self.db.get_table_mut(table_name)?.add_column(column, default);
        self.db.schema_mut().add_column(table_name, column)
    }

    pub fn drop_column(&mut self, table_name: &str, column: &str) -> Result<()> {
        //! Drop a column from a table and its catalog entry.

        self.db.get_table_mut(table_name)?.delete_column(column)?;
        self.db.schema_mut().drop_column(table_name, column)
    }

    pub fn rename(&mut self, table_name: &str, old_name: &str, new_name: &str) -> Result<()> {
        //! Rename a column in a table and its catalog entry.

        self.db
            .get_table_mut(table_name)?
            .rename_column(old_name, new_name)?;
        self.db
            .schema_mut()
            .rename_column(table_name, old_name, new_name)
    }

    pub fn delete(&mut self, table_name: &str, primary_key: &str) -> Result<Record> {
        //! Delete the row with the given primary key, returning it.

        self.db.get_table_mut(table_name)?.delete_row(primary_key)
    }

    fn column_indices(columns: &[String], requested: &[&str]) -> Result<Vec<usize>> {
        //! Resolve each requested column name to its position in the base
        //! table's column list.

        requested
            .iter()
            .map(|&request| {
                columns
                    .iter()
                    .position(|column| column == request)
                    .ok_or_else(|| DbError::NotFound(format!("column '{}'", request)))
            })
            .collect()
    }
}
