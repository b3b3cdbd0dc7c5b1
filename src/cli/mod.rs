//! The demo driver and schema viewer for the store.
//!
//! Everything here sits outside the core and consumes only its public
//! API: `create_table`, `drop_table`, `commit`, the query facade and the
//! catalog accessors.

use std::env;
use std::path::PathBuf;

use crate::store::{Database, Result};

mod colors;
mod messages;
pub mod parsers;
pub mod printer;
mod splash_screen;

pub use messages::{highlight_argument, system_message};

const DATA_DIR_VAR: &str = "HEMATITE_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "./data";

pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    //! Pick the data directory: the `--data-dir` flag wins, then the
    //! environment (a `.env` file is honored), then `./data`.

    flag.or_else(|| env::var(DATA_DIR_VAR).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

pub fn run_schema(data_dir: PathBuf) -> Result<()> {
    //! Print the catalog of the database stored under `data_dir`.

    let db = Database::open(data_dir)?;

    if db.schema().is_empty() {
        println!("{}", system_message("schema", "no tables stored.".to_string()));
        return Ok(());
    }

    for (table, columns) in db.schema().all() {
        println!(
            "{}",
            system_message(
                "schema",
                format!("{}: {}", highlight_argument(&table), columns.join(", "))
            )
        );
    }

    Ok(())
}

pub fn run_demo(data_dir: PathBuf) -> Result<()> {
    //! Walk the store through its whole lifecycle against a real data
    //! directory, narrating each step.

    splash_screen::splash_screen();

    step("connecting to database...");
    let mut db = Database::open(data_dir)?;

    step("adding table 'minerals'...");
    let columns = vec![
        "id".to_string(),
        "name".to_string(),
        "hardness".to_string(),
    ];
    db.create_table("minerals", columns)?;

    step("inserting values into table...");
    let values = vec![
        vec!["1".to_string(), "hematite".to_string(), "6".to_string()],
        vec!["2".to_string(), "magnetite".to_string(), "6".to_string()],
        vec!["3".to_string(), "quartz".to_string(), "7".to_string()],
    ];
    db.query().insert_many("minerals", values)?;

    step("committing changes...");
    db.commit()?;

    step("the result of a select:");
    let result = db.query().select("minerals", &["name", "hardness"])?;
    println!();
    printer::print_result(&result);
    println!();

    step("updating columns...");
    db.query().drop_column("minerals", "hardness")?;
    db.query().rename("minerals", "name", "mineral")?;

    step("the new columns:");
    let columns = db.schema().table("minerals")?;
    println!("  {}\n", highlight_argument(&columns.join(", ")));

    step("dropping table and committing changes...");
    db.drop_table("minerals")?;
    db.commit()?;

    step("finished.");
    Ok(())
}

fn step(message: &str) {
    println!("{}", system_message("demo", message.to_string()));
}
