//! Tabular export of an assignment.
//!
//! Produces the cell grid a spreadsheet writer consumes: header row(s),
//! then one labelled row per layout row. Empty seats are empty strings.
//!
//! | Layout | Header | Body row |
//! |--------|--------|----------|
//! | Grid | `" "`, `Col 1..n` | `Row r`, one cell per column |
//! | PairedColumns | `""`, `Section s`, `""` … / `Row`, `Left`, `Right` … | `Row r`, left/right per section |

use std::fmt;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::ReadingOrder;
use crate::models::{Assignment, LayoutKind, SeatLayout};

/// Widest auto-sized column, in display cells.
pub const MAX_COLUMN_WIDTH: usize = 20;

/// Padding added to the widest cell of a column.
const COLUMN_PADDING: usize = 2;

/// A 2D string table mirroring the seat view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeatingTable {
    rows: Vec<Vec<String>>,
}

impl SeatingTable {
    /// Builds the table for `assignment` over `layout`.
    pub fn build(assignment: &Assignment, layout: &SeatLayout, order: ReadingOrder) -> Self {
        let rows = match layout.kind {
            LayoutKind::Grid => grid_rows(assignment, layout, order),
            LayoutKind::PairedColumns => paired_rows(assignment, layout, order),
        };
        Self { rows }
    }

    /// Table rows, headers first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Consumes the table, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Number of columns (length of the longest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Auto-sized column widths: widest cell plus padding, capped at
    /// [`MAX_COLUMN_WIDTH`]. Widths are measured in display cells.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
            .into_iter()
            .map(|w| (w + COLUMN_PADDING).min(MAX_COLUMN_WIDTH))
            .collect()
    }
}

fn grid_rows(
    assignment: &Assignment,
    layout: &SeatLayout,
    order: ReadingOrder,
) -> Vec<Vec<String>> {
    let mut header = vec![" ".to_string()];
    header.extend((0..layout.cols).map(|c| format!("Col {}", order.label(c, layout.cols))));

    let mut rows = vec![header];
    for r in 0..layout.rows {
        let mut row = vec![format!("Row {}", order.label(r, layout.rows))];
        row.extend((0..layout.cols).map(|c| {
            assignment
                .name_or_empty(order.grid_seat(layout, r, c))
                .to_string()
        }));
        rows.push(row);
    }
    rows
}

fn paired_rows(
    assignment: &Assignment,
    layout: &SeatLayout,
    order: ReadingOrder,
) -> Vec<Vec<String>> {
    let sections = layout.sections();
    let per_section = layout.rows_per_section();

    let mut sections_header = vec![String::new()];
    let mut sides_header = vec!["Row".to_string()];
    for s in 0..sections {
        sections_header.push(format!("Section {}", order.label(s, sections)));
        sections_header.push(String::new());
        sides_header.push("Left".to_string());
        sides_header.push("Right".to_string());
    }

    let mut rows = vec![sections_header, sides_header];
    for r in 0..per_section {
        let mut row = vec![format!("Row {}", order.label(r, per_section))];
        for s in 0..sections {
            let (left, right) = order.pair_seats(layout, s, r);
            row.push(assignment.name_or_empty(left).to_string());
            row.push(assignment.name_or_empty(right).to_string());
        }
        rows.push(row);
    }
    rows
}

impl fmt::Display for SeatingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        for row in &self.rows {
            let mut line = String::new();
            for (cell, &width) in row.iter().zip(&widths) {
                line.push_str(cell);
                let pad = width.saturating_sub(cell.width());
                line.push_str(&" ".repeat(pad));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
