//! Labelled seat view.

use std::fmt;

use serde::Serialize;

use super::{ReadingOrder, EMPTY_SEAT_LABEL};
use crate::models::{Assignment, LayoutKind, SeatLayout};

/// A laid-out assignment: one block per grid row or per section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingView {
    /// Reading order the blocks were built in.
    pub order: ReadingOrder,
    /// Blocks in display order.
    pub blocks: Vec<ViewBlock>,
}

/// A grid row or a paired-layout section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewBlock {
    /// Block heading (e.g. "Row 2", "Section 1").
    pub label: String,
    /// Cells in display order.
    pub cells: Vec<ViewCell>,
}

/// A single displayed seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewCell {
    /// Cell heading (e.g. "Col 3", "Row 1 Left").
    pub label: String,
    /// Underlying seat index.
    pub seat: usize,
    /// Occupant, if any.
    pub occupant: Option<String>,
}

impl SeatingView {
    /// Lays out `assignment` over `layout` in the given reading order.
    ///
    /// # Example
    ///
    /// ```
    /// use u_seating::models::{Assignment, SeatLayout};
    /// use u_seating::view::{ReadingOrder, SeatingView};
    ///
    /// let mut a = Assignment::new();
    /// a.assign(0, "Ann");
    /// let view = SeatingView::render(&a, &SeatLayout::grid(1, 2), ReadingOrder::Reversed);
    ///
    /// assert_eq!(view.blocks[0].cells[1].seat, 0);
    /// assert_eq!(view.blocks[0].cells[1].occupant.as_deref(), Some("Ann"));
    /// ```
    pub fn render(assignment: &Assignment, layout: &SeatLayout, order: ReadingOrder) -> Self {
        let blocks = match layout.kind {
            LayoutKind::Grid => grid_blocks(assignment, layout, order),
            LayoutKind::PairedColumns => paired_blocks(assignment, layout, order),
        };
        Self { order, blocks }
    }

    /// Iterates all cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = &ViewCell> {
        self.blocks.iter().flat_map(|b| b.cells.iter())
    }
}

impl ViewCell {
    fn new(label: String, seat: usize, assignment: &Assignment) -> Self {
        Self {
            label,
            seat,
            occupant: assignment.get(seat).map(String::from),
        }
    }
}

fn grid_blocks(
    assignment: &Assignment,
    layout: &SeatLayout,
    order: ReadingOrder,
) -> Vec<ViewBlock> {
    (0..layout.rows)
        .map(|r| ViewBlock {
            label: format!("Row {}", order.label(r, layout.rows)),
            cells: (0..layout.cols)
                .map(|c| {
                    let label = format!("Col {}", order.label(c, layout.cols));
                    ViewCell::new(label, order.grid_seat(layout, r, c), assignment)
                })
                .collect(),
        })
        .collect()
}

fn paired_blocks(
    assignment: &Assignment,
    layout: &SeatLayout,
    order: ReadingOrder,
) -> Vec<ViewBlock> {
    let sections = layout.sections();
    let rows = layout.rows_per_section();

    (0..sections)
        .map(|s| {
            let mut cells = Vec::with_capacity(rows * 2);
            for r in 0..rows {
                let row_label = order.label(r, rows);
                let (left, right) = order.pair_seats(layout, s, r);
                cells.push(ViewCell::new(format!("Row {row_label} Left"), left, assignment));
                cells.push(ViewCell::new(format!("Row {row_label} Right"), right, assignment));
            }
            ViewBlock {
                label: format!("Section {}", order.label(s, sections)),
                cells,
            }
        })
        .collect()
}

impl fmt::Display for SeatingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            writeln!(f, "{}", block.label)?;
            for cell in &block.cells {
                let occupant = cell.occupant.as_deref().unwrap_or(EMPTY_SEAT_LABEL);
                writeln!(f, "  {}: {}", cell.label, occupant)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_assignment() -> Assignment {
        (0..8).map(|i| (i, format!("P{i}"))).collect()
    }

    #[test]
    fn test_grid_standard() {
        let a = sample_assignment();
        let view = SeatingView::render(&a, &SeatLayout::grid(2, 3), ReadingOrder::Standard);

        assert_eq!(view.blocks.len(), 2);
        assert_eq!(view.blocks[0].label, "Row 1");
        assert_eq!(view.blocks[0].cells[0].label, "Col 1");
        let seats: Vec<usize> = view.cells().map(|c| c.seat).collect();
        assert_eq!(seats, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_grid_reversed() {
        let a = sample_assignment();
        let view = SeatingView::render(&a, &SeatLayout::grid(2, 3), ReadingOrder::Reversed);

        assert_eq!(view.blocks[0].label, "Row 2");
        assert_eq!(view.blocks[0].cells[0].label, "Col 3");
        let seats: Vec<usize> = view.cells().map(|c| c.seat).collect();
        assert_eq!(seats, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_paired_standard() {
        let a = sample_assignment();
        let view = SeatingView::render(&a, &SeatLayout::paired(2, 2), ReadingOrder::Standard);

        assert_eq!(view.blocks.len(), 2);
        assert_eq!(view.blocks[1].label, "Section 2");
        assert_eq!(view.blocks[0].cells[0].label, "Row 1 Left");
        assert_eq!(view.blocks[0].cells[1].label, "Row 1 Right");
        let seats: Vec<usize> = view.cells().map(|c| c.seat).collect();
        assert_eq!(seats, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_paired_reversed_swaps_pairs() {
        let a = sample_assignment();
        let view = SeatingView::render(&a, &SeatLayout::paired(2, 2), ReadingOrder::Reversed);

        assert_eq!(view.blocks[0].label, "Section 2");
        assert_eq!(view.blocks[0].cells[0].label, "Row 2 Left");
        let seats: Vec<usize> = view.cells().map(|c| c.seat).collect();
        assert_eq!(seats, vec![7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_reversal_keeps_mapping() {
        let a = sample_assignment();
        let layout = SeatLayout::paired(2, 2);
        let view = SeatingView::render(&a, &layout, ReadingOrder::Reversed);
        for cell in view.cells() {
            assert_eq!(cell.occupant.as_deref(), a.get(cell.seat));
        }
    }

    #[test]
    fn test_display_marks_empty_seats() {
        let mut a = Assignment::new();
        a.assign(0, "Ann");
        let text = SeatingView::render(&a, &SeatLayout::grid(1, 2), ReadingOrder::Standard)
            .to_string();
        assert_eq!(text, "Row 1\n  Col 1: Ann\n  Col 2: (empty)\n");
    }
}
