//! Fixed-width bordered table serialization.

use std::fmt::Write;

use crate::domain::Table;

/// Marker emitted for a table with no rows.
pub const EMPTY_MARKER: &str = "<empty>\n";

/// Render a table as a bordered monospace block.
///
/// Column width = max(header length, longest cell in the column); rows are
/// emitted in table order between dash rules sized to the total width plus
/// borders. A table with zero rows renders as the `<empty>` marker alone.
pub fn format_table(table: &Table) -> String {
    if table.is_empty() {
        return String::from(EMPTY_MARKER);
    }

    let columns = table.columns();
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            table
                .rows()
                .map(|cells| cells[index].chars().count())
                .chain([column.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    // dashes spanning "| " + cell + " " per column, plus the closing "|"
    let rule = "-".repeat(widths.iter().sum::<usize>() + 3 * widths.len() + 1);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    write_row(&mut out, columns.iter().copied(), &widths);
    out.push_str(&rule);
    out.push('\n');
    for cells in table.rows() {
        write_row(&mut out, cells.iter().map(String::as_str), &widths);
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    for (cell, width) in cells.zip(widths.iter().copied()) {
        write!(out, "| {cell:<width$} ").expect("writing to String cannot fail");
    }
    out.push_str("|\n");
}
