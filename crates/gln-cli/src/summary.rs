use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gln_model::{Advisory, ViolationKind};

use crate::types::FeedRunResult;

pub fn print_summary(result: &FeedRunResult) {
    println!("Feed: {}", result.feed);
    for source in &result.sources {
        println!("Source: {}", source.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Active"),
        header_cell("Expired"),
        header_cell("Violations"),
        header_cell("Advisories"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let (active, expired) = match result.partition {
        Some((active, expired)) => (Cell::new(active), Cell::new(expired)),
        None => (dim_cell("-"), dim_cell("-")),
    };
    table.add_row(vec![
        Cell::new(result.rows_in),
        Cell::new(result.rows_out),
        active,
        expired,
        count_cell(result.report.violation_count(), Color::Red),
        count_cell(result.report.advisory_count(), Color::Yellow),
    ]);
    println!("{table}");
    print_findings_table(result);
    for artifact in &result.artifacts {
        println!("Written: {}", artifact.display());
    }
}

fn print_findings_table(result: &FeedRunResult) {
    if !result.has_findings() {
        println!("No findings.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Column"),
        header_cell("Row(s)"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for violation in &result.report.violations {
        let kind = match violation.kind {
            ViolationKind::LengthExceeded => "length exceeded",
            ViolationKind::InvalidCharacterClass => "invalid character class",
        };
        table.add_row(vec![
            Cell::new(kind).fg(Color::Red),
            Cell::new(&violation.column),
            Cell::new(display_row(violation.row)),
            Cell::new(&violation.observed),
        ]);
    }
    for advisory in &result.report.advisories {
        table.add_row(advisory_row(advisory));
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn advisory_row(advisory: &Advisory) -> Vec<Cell> {
    match advisory {
        Advisory::MissingCompanion { row, column } => vec![
            Cell::new("missing companion").fg(Color::Yellow),
            Cell::new(column),
            Cell::new(display_row(*row)),
            dim_cell("-"),
        ],
        Advisory::DuplicateRegistration {
            column,
            value,
            rows,
        } => vec![
            Cell::new("duplicate registration").fg(Color::Yellow),
            Cell::new(column),
            Cell::new(display_rows(rows)),
            Cell::new(value),
        ],
        Advisory::DelimiterInCell { column, row } => vec![
            Cell::new("delimiter in cell").fg(Color::Yellow),
            Cell::new(column),
            Cell::new(display_row(*row)),
            dim_cell("-"),
        ],
        Advisory::InvalidRegistration {
            column,
            row,
            observed,
        } => vec![
            Cell::new("invalid registration").fg(Color::Yellow),
            Cell::new(column),
            Cell::new(display_row(*row)),
            Cell::new(observed),
        ],
        Advisory::InvalidDateFormat {
            column,
            row,
            observed,
        } => vec![
            Cell::new("invalid date format").fg(Color::Yellow),
            Cell::new(column),
            Cell::new(display_row(*row)),
            Cell::new(observed),
        ],
    }
}

/// Rows print 1-based with the header line counted, matching how the
/// registry team reads the spreadsheets.
fn display_row(row: usize) -> String {
    (row + 2).to_string()
}

fn display_rows(rows: &[usize]) -> String {
    rows.iter()
        .map(|row| display_row(*row))
        .collect::<Vec<_>>()
        .join(", ")
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
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

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
