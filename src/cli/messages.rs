//! General message formatting functions for prettifying the CLI.
//! Includes basic utility functions such as:
//!
//! - Highlight Text (make the text hematite red)
//! - System message formatting functions that produce the same
//! format messages.

use colored::Colorize;

use crate::cli::colors::HEMATITE_RED;

pub fn highlight_argument(argument: &str) -> String {
    //! Highlight a piece of text in the hematite red
    //! color to make it obvious.
    //!
    //! Returns a formatted string.

    format!("{}", argument.color(HEMATITE_RED))
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Write a system message on the command line, properly
    //! formatted, according to the command line theme.
    //!
    //! Takes in a source name (like 'store') as [`String`] and
    //! the message as a formatted text; output of [`format!`].

    let source_formatted = format!("{:6}", source_name.color(HEMATITE_RED).bold());

    format!("[{}] {}", source_formatted, message)
}
