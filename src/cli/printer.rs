//! Presents tables on the terminal with aligned columns.
//!
//! The printer is a pure consumer of the store's public API: it only ever
//! sees the `columns()` / `rows()` copies, never the internals.

use colored::Colorize;

use crate::cli::colors::HEMATITE_RED;
use crate::store::{ResultTable, Table};

pub fn print_table(table: &Table) {
    //! Print a base table, header and all rows.

    print!("{}", render(&table.columns(), &table.rows()));
}

pub fn print_result(result: &ResultTable) {
    //! Print a projection result, header and all rows.

    print!("{}", render(&result.columns(), &result.rows()));
}

pub fn render(columns: &[String], rows: &[Vec<String>]) -> String {
    //! Lay out a header and rows with every column padded to the width of
    //! its widest cell.
    //!
    //! Returns the rendered block, one trailing newline included.

    let widths = column_widths(columns, rows);
    let mut out = String::new();

    // Pad before coloring; the escape codes would otherwise count into
    // the field width.
    let header: Vec<String> = columns
        .iter()
        .zip(widths.iter())
        .map(|(name, &width)| {
            format!("{:<width$}", name)
                .color(HEMATITE_RED)
                .bold()
                .to_string()
        })
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(value, &width)| format!("{:<width$}", value))
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }

    out
}

fn column_widths(columns: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = columns.iter().map(|name| name.len()).collect();

    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if index < widths.len() && value.len() > widths[index] {
                widths[index] = value.len();
            }
        }
    }

    widths
}
