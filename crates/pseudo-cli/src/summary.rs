use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pseudo_transform::{AnonymizationReport, ColumnReport};

use crate::types::{AnonymizeResult, GenerateResult};

pub fn print_summary(result: &AnonymizeResult) {
    let report = &result.report;
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("{}", run_line(report));
    if report.is_empty() {
        println!("No columns matched a semantic type; table left unchanged.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Replaced"),
        header_cell("Nulls"),
        header_cell("Distinct in"),
        header_cell("Distinct out"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &report.columns {
        table.add_row(vec![
            Cell::new(&column.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(column.semantic_type),
            Cell::new(column.replaced()),
            count_cell(column.nulls),
            Cell::new(column.distinct_originals),
            distinct_out_cell(column),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.total_replaced()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_generate_summary(result: &GenerateResult) {
    println!(
        "Wrote {} rows ({}) to {}",
        result.rows,
        result.columns.join(", "),
        result.output.display()
    );
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn run_line(report: &AnonymizationReport) -> String {
    format!(
        "Mode: {} | Engine: {} | Rows: {} | Time: {:.2?}",
        report.mode, report.engine, report.rows, report.duration
    )
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Distinct replacement count, highlighted when originals collided.
fn distinct_out_cell(column: &ColumnReport) -> Cell {
    if column.has_collisions() {
        Cell::new(column.distinct_replacements)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(column.distinct_replacements).fg(Color::Green)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
