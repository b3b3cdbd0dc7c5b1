//! A small embedded relational store for a single process.
//!
//! Tables hold opaque string values in named, ordered columns, with the
//! value at position 0 acting as the primary key. Mutations happen in
//! memory and reach disk only on an explicit [`store::Database::commit`],
//! which also garbage-collects the blobs of dropped tables.

pub mod cli;
pub mod store;
