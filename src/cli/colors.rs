//! To maintain a theme of colors, colors live here as constants so the UI
//! does not look bad at any point.
//!
//! - HEMATITE_RED: Main Color

use colored::Color;

pub(crate) const HEMATITE_RED: Color = Color::TrueColor {
    r: 178,
    g: 34,
    b: 34,
};
