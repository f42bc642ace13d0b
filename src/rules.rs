//! Win and draw evaluation.
//!
//! Pure functions over a single [`Board`]. Whether a full board without
//! a line counts as a draw is asked separately via [`is_draw`].

use crate::types::{Board, Win};

/// The eight winning triples, in priority order.
///
/// Rows top to bottom, columns left to right, then the two diagonals.
/// When more than one line is complete, the earliest entry wins.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the first complete line on the board.
pub fn calculate_winner(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(Win {
            winner: mark,
            line: [a, b, c],
        })
    })
}

/// Every cell filled and nobody has a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && calculate_winner(board).is_none()
}

// ============================================================================
// TESTS
// ============================================================================
