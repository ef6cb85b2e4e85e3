use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use edscreen_core::SourceReport;

use crate::types::ScreenOutcome;

pub fn print_summary(outcome: &ScreenOutcome) {
    let result = &outcome.result;
    println!("Input: {}", outcome.input.display());
    println!("Substances: {}", result.records.len());
    match &outcome.outputs {
        Some(paths) => {
            println!("Output: {}", outcome.output_dir.display());
            for path in paths.all() {
                println!("  {}", path.display());
            }
        }
        None => println!("Output: none (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Namespace"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Matches"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_matches = 0usize;
    for report in &result.sources {
        total_matches += report.matches;
        table.add_row(vec![
            Cell::new(report.source.key()).fg(Color::Cyan),
            Cell::new(report.namespace),
            status_cell(report),
            report.rows.map_or_else(|| dim_cell("-"), Cell::new),
            count_cell(report.matches),
            detail_cell(report),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All sources")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_matches).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn status_cell(report: &SourceReport) -> Cell {
    let color = match report.status {
        "loaded" => Color::Green,
        "failed" => Color::Red,
        _ => Color::Yellow,
    };
    Cell::new(report.status).fg(color).add_attribute(Attribute::Bold)
}

fn detail_cell(report: &SourceReport) -> Cell {
    match (&report.detail, &report.path) {
        (Some(detail), _) => Cell::new(detail),
        (None, Some(path)) => dim_cell(path.display()),
        (None, None) => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
