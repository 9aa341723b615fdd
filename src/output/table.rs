//! Table rendering
//!
//! One row per source/destination pair, sorted by source.

use std::path::Path;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::utils::common_root;
use crate::workflow::Mapping;

use super::common::{relative_display, shorten_cell};

/// A row of the mapping table
#[derive(Debug, Clone, Tabled)]
struct MappingRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Destination")]
    destination: String,
}

/// Renders the mapping as a two-column table
///
/// Paths are shown relative to the directory shared by every source and
/// destination, and long paths are shortened.
pub fn render_table(mapping: &Mapping) -> String {
    let all_paths: Vec<&Path> = mapping
        .sources()
        .into_iter()
        .chain(mapping.destinations())
        .collect();
    let root = common_root(&all_paths);

    let rows: Vec<MappingRow> = mapping
        .iter()
        .map(|(source, destination)| MappingRow {
            source: shorten_cell(&relative_display(source, &root)),
            destination: shorten_cell(&relative_display(destination, &root)),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
