use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ProfileRun;

/// Prints the run summary to stderr so stdout stays clean for the JSON.
pub fn print_summary(run: &ProfileRun) {
    let document = &run.document;
    eprintln!(
        "Geography: {} ({})",
        document.geography.name,
        document.geography.geoid()
    );
    if !document.comparatives.is_empty() {
        let comparatives: Vec<String> = document
            .comparatives
            .iter()
            .map(|geo| format!("{} ({})", geo.name, geo.geo_level()))
            .collect();
        eprintln!("Compared with: {}", comparatives.join(", "));
    }
    if let Some(path) = &run.output {
        eprintln!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Indicators"),
        header_cell("Distributions"),
        header_cell("Groups"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    let mut totals = (0, 0, 0);
    for section in &run.sections {
        totals.0 += section.indicators;
        totals.1 += section.distributions;
        totals.2 += section.groups;
        table.add_row(vec![
            Cell::new(&section.name).fg(Color::Cyan),
            count_cell(section.indicators),
            count_cell(section.distributions),
            count_cell(section.groups),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(totals.0).add_attribute(Attribute::Bold),
        Cell::new(totals.1).add_attribute(Attribute::Bold),
        Cell::new(totals.2).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).add_attribute(Attribute::Dim)
    } else {
        Cell::new(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
