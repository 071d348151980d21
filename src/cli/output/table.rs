//! Table output for section listings using comfy-table.

use comfy_table::{presets, Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::domain::models::Collection;

const NO_SECTIONS: &str = "No house sections.";

/// Create a borderless list table with bold upper-case headers.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| {
            Cell::new(h.to_uppercase())
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Left)
        }));
    table
}

/// Render a collection as a table, or a placeholder line when it is empty.
pub fn format_sections_table(collection: &Collection) -> String {
    if collection.is_empty() {
        return NO_SECTIONS.to_string();
    }

    let mut table = list_table(&["id", "name", "fields"]);
    for section in collection.iter() {
        let fields = section
            .attributes
            .keys()
            .filter(|key| key.as_str() != "name")
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(&section.id),
            Cell::new(section.name().unwrap_or("-")),
            Cell::new(fields),
        ]);
    }

    let count = collection.len();
    format!(
        "{} house section{}:\n{}",
        count,
        if count == 1 { "" } else { "s" },
        table
    )
}
