//! The place where the command line parser is defined.
//!
//! There is no query language in the store, so the surface is a couple of
//! clap subcommands rather than a REPL.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hematite")]
#[command(about = "A small embedded relational store", long_about = None)]
pub struct CliParser {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand)]
pub enum CliCommand {
    /// Walk through the store end to end: create, insert, commit, select,
    /// alter, drop.
    Demo {
        /// Data directory; falls back to HEMATITE_DATA_DIR, then ./data.
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Print the catalog of the stored database.
    Schema {
        /// Data directory; falls back to HEMATITE_DATA_DIR, then ./data.
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}
