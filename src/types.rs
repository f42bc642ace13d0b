//! Domain types for tictactoe-history.
//!
//! Boards are small `Copy` values: every play builds a new snapshot,
//! nothing is edited in place once it lands in the history.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Cells per row (and rows per board).
pub const SIDE: usize = 3;

/// A player's mark. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves at the given history index.
    ///
    /// Even pointers belong to X, odd ones to O.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid coordinates of a cell, derived from its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Location of cell `index` (row-major, 3 wide).
    pub fn of(index: usize) -> Self {
        Location {
            row: index / SIDE,
            col: index % SIDE,
        }
    }
}

/// Rendered as `(row, col)`.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// One immutable 9-cell board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Board([Option<Mark>; CELL_COUNT]);

impl Board {
    /// The all-empty board every game starts from.
    pub fn empty() -> Self {
        Board([None; CELL_COUNT])
    }

    /// Build a board from raw cells.
    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Board(cells)
    }

    /// Cell value at `index`; `None` for empty or out-of-range.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.0.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        index < CELL_COUNT && self.0[index].is_none()
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.0
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// A copy of this board with `index` set to `mark`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.0;
        cells[index] = Some(mark);
        Board(cells)
    }

    /// Index of the first cell that differs from `earlier`.
    ///
    /// For consecutive history entries this is the cell that was played.
    pub fn changed_from(&self, earlier: &Board) -> Option<usize> {
        self.0
            .iter()
            .zip(earlier.0.iter())
            .position(|(now, before)| now != before)
    }

    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }
}

// ============================================================================
// OUTCOMES
// ============================================================================

/// A detected three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Win {
    /// The mark occupying the line.
    pub winner: Mark,
    /// The three cell indices of the line, in priority-table order.
    pub line: [usize; 3],
}

impl Win {
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Display order of the history list. Storage order never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// "Ascending" / "Descending", as shown on the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// Output format for replay transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable board and history.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Initial history display order.
    pub sort: SortOrder,
    /// Where tracing output goes. None = default location.
    pub log_file: Option<PathBuf>,
}

/// Configuration for a non-interactive replay.
#[derive(Debug, Clone, Default)]
pub struct ReplayConfig {
    /// Cell indices to click, in order.
    pub cells: Vec<usize>,
    /// History step to jump to after all clicks.
    pub jump: Option<usize>,
    /// History display order.
    pub sort: SortOrder,
    /// Transcript format.
    pub format: OutputFormat,
}

// ============================================================================
// TESTS
// ============================================================================
