//! Seating layout model.
//!
//! A layout is a topology plus two integers. The integers are reinterpreted
//! per topology:
//!
//! | Topology | `rows` | `cols` | Seats |
//! |----------|--------|--------|-------|
//! | `Grid` | rows | columns | `rows * cols` |
//! | `PairedColumns` | sections | rows per section | `rows * cols * 2` |
//!
//! Keeping the pair overloaded (rather than separate section fields) keeps
//! the persisted configuration schema identical across topologies.

use serde::{Deserialize, Serialize};

/// Layout topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Rectangular `rows × cols` seating, indexed row-major.
    #[default]
    #[serde(alias = "default")]
    Grid,
    /// Sections of left/right seat pairs, one pair per row-position.
    #[serde(alias = "pairs")]
    PairedColumns,
}

/// A concrete layout: topology and its two dimension parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatLayout {
    /// Topology.
    pub kind: LayoutKind,
    /// Rows (`Grid`) or number of sections (`PairedColumns`).
    pub rows: usize,
    /// Columns (`Grid`) or rows per section (`PairedColumns`).
    pub cols: usize,
}

/// A seat's position on the output grid (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatPosition {
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
}

impl SeatLayout {
    /// Creates a layout.
    pub fn new(kind: LayoutKind, rows: usize, cols: usize) -> Self {
        Self { kind, rows, cols }
    }

    /// Creates a `rows × cols` grid layout.
    pub fn grid(rows: usize, cols: usize) -> Self {
        Self::new(LayoutKind::Grid, rows, cols)
    }

    /// Creates a paired-columns layout.
    pub fn paired(sections: usize, rows_per_section: usize) -> Self {
        Self::new(LayoutKind::PairedColumns, sections, rows_per_section)
    }

    /// Size of the seat universe.
    pub fn total_seats(&self) -> usize {
        match self.kind {
            LayoutKind::Grid => self.rows * self.cols,
            LayoutKind::PairedColumns => self.rows * self.cols * 2,
        }
    }

    /// Number of sections (`PairedColumns`); 0 for grids.
    pub fn sections(&self) -> usize {
        match self.kind {
            LayoutKind::Grid => 0,
            LayoutKind::PairedColumns => self.rows,
        }
    }

    /// Rows per section (`PairedColumns`); 0 for grids.
    pub fn rows_per_section(&self) -> usize {
        match self.kind {
            LayoutKind::Grid => 0,
            LayoutKind::PairedColumns => self.cols,
        }
    }

    /// Whether `index` is inside the seat universe.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.total_seats()
    }

    /// Seat index of the left seat at (`section`, `row`) in a paired layout.
    ///
    /// The right seat is the returned index plus one.
    #[inline]
    pub fn pair_index(&self, section: usize, row: usize) -> usize {
        section * self.cols * 2 + row * 2
    }

    /// Both dimensions are positive.
    pub fn is_well_formed(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }
}

impl Default for SeatLayout {
    fn default() -> Self {
        Self::grid(5, 6)
    }
}

impl SeatPosition {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
