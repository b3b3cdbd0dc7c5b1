use clap::Parser;
use log::error;

use hematite_db::cli::{self, parsers::{CliCommand, CliParser}, system_message};

fn main() {
    // A .env file can supply HEMATITE_DATA_DIR; its absence is fine.
    let _ = dotenvy::dotenv();

    let cli = CliParser::parse();

    let result = match cli.command {
        CliCommand::Demo { data_dir } => cli::run_demo(cli::resolve_data_dir(data_dir)),
        CliCommand::Schema { data_dir } => cli::run_schema(cli::resolve_data_dir(data_dir)),
    };

    if let Err(message) = result {
        error!("{}", message);
        eprintln!("{}", system_message("store", format!("{}", message)));
        std::process::exit(1);
    }
}
