//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

/// Creates a table with a bold header row.
pub fn lesson_table(columns: &[&str], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();

    if super::no_color() {
        table.load_preset(ASCII_MARKDOWN);
    } else {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Prints rows under a header.
pub fn print_table(columns: &[&str], rows: &[Vec<String>]) {
    println!("{}", lesson_table(columns, rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_contains_every_cell() {
        super::super::set_no_color(true);
        let rendered = lesson_table(
            &["status", "icon"],
            &[vec!["pending".into(), "⏳".into()]],
        )
        .to_string();
        assert!(rendered.contains("status"));
        assert!(rendered.contains("pending"));
    }
}
