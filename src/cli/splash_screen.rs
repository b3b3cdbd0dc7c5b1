//! The module contains functions for displaying the CLI splash screen.

use colored::Colorize;

use crate::cli::colors::HEMATITE_RED;

pub fn splash_screen() {
    show_splash_screen();
    show_version_info();
}

fn show_splash_screen() {
    println!(
        "{}",
        r"
    ██╗  ██╗███████╗███╗   ███╗ █████╗ ████████╗██╗████████╗███████╗
    ██║  ██║██╔════╝████╗ ████║██╔══██╗╚══██╔══╝██║╚══██╔══╝██╔════╝
    ███████║█████╗  ██╔████╔██║███████║   ██║   ██║   ██║   █████╗
    ██╔══██║██╔══╝  ██║╚██╔╝██║██╔══██║   ██║   ██║   ██║   ██╔══╝
    ██║  ██║███████╗██║ ╚═╝ ██║██║  ██║   ██║   ██║   ██║   ███████╗
    ╚═╝  ╚═╝╚══════╝╚═╝     ╚═╝╚═╝  ╚═╝   ╚═╝   ╚═╝   ╚═╝   ╚══════╝
"
        .color(HEMATITE_RED)
    );
}

fn show_version_info() {
    println!(
        "    {} v{}\n",
        "an embedded relational store".italic(),
        env!("CARGO_PKG_VERSION")
    );
}
