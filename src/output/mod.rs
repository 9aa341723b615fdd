//! Output module
//!
//! This module renders a mapping for the terminal. It only reads the mapping.

mod common;
mod table;
mod tree;

pub use table::render_table;
pub use tree::{PathNode, render_tree};

use crate::config::OutputFormat;
use crate::workflow::Mapping;

/// Renders the mapping in the requested format
pub fn render_mapping(mapping: &Mapping, format: OutputFormat) -> String {
    match format {
        OutputFormat::Tree => render_tree(mapping),
        OutputFormat::Table => render_table(mapping),
    }
}

/// Prints the mapping in the requested format
pub fn print_mapping(mapping: &Mapping, format: OutputFormat) {
    println!("{}", render_mapping(mapping, format));
}
