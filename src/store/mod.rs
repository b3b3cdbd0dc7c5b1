//! The store needs the following components
//! - Record (fixed-width ordered value vector, one per row)
//! - Table (named ordered column list plus records, primary key at position 0)
//! - ResultTable (projection output, relaxed constraints, never persisted)
//! - Schema (catalog of table name to ordered column list)
//! - Query (facade for reads, row mutations and paired DDL)
//! - Database (owns the table set and the schema, reconciles to storage on commit)
//!

//  All modules of this lib
mod database;
mod datafile;
mod error;
mod query;
mod record;
mod result;
mod schema;
mod table;

//  External API
pub use database::Database;
pub use datafile::{DataFile, MemStore, TableStore};
pub use error::{DbError, Result};
pub use query::Query;
pub use record::Record;
pub use result::ResultTable;
pub use schema::Schema;
pub use table::Table;
