//! Game session controller.
//!
//! Owns the board history, the current move pointer and the history
//! display order. All mutation goes through [`Game::play`],
//! [`Game::jump_to`] and [`Game::toggle_sort_order`]. Invalid input is
//! ignored, never reported: each operation returns whether it changed
//! anything so callers can log it.

use tracing::debug;

use crate::rules::{calculate_winner, is_draw};
use crate::types::{Board, Location, Mark, SortOrder, Win, CELL_COUNT};

/// One game session: history of snapshots plus a pointer into it.
///
/// Invariants:
/// - `history` is never empty and `history[0]` is the empty board
/// - `current_move < history.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
    sort: SortOrder,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A fresh game at the start position, history listed ascending.
    pub fn new() -> Self {
        Game::with_sort_order(SortOrder::Ascending)
    }

    pub fn with_sort_order(sort: SortOrder) -> Self {
        Game {
            history: vec![Board::empty()],
            current_move: 0,
            sort,
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// All snapshots, chronological.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// The snapshot at the current pointer.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whose turn it is at the current pointer.
    pub fn next_player(&self) -> Mark {
        Mark::to_move_at(self.current_move)
    }

    pub fn winner(&self) -> Option<Win> {
        calculate_winner(self.current_board())
    }

    pub fn is_draw(&self) -> bool {
        is_draw(self.current_board())
    }

    /// Location of the cell played to reach history entry `step`.
    ///
    /// Always diffs `history[step - 1]` against `history[step]`, so the
    /// answer does not depend on display order. None for the start.
    pub fn move_location(&self, step: usize) -> Option<Location> {
        if step == 0 {
            return None;
        }
        let before = self.history.get(step - 1)?;
        let after = self.history.get(step)?;
        after.changed_from(before).map(Location::of)
    }

    /// History steps in display order.
    pub fn display_order(&self) -> Vec<usize> {
        let steps = 0..self.history.len();
        match self.sort {
            SortOrder::Ascending => steps.collect(),
            SortOrder::Descending => steps.rev().collect(),
        }
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Play the current player's mark at `index`.
    ///
    /// Ignored when the position is already won, the cell is taken, or
    /// the index is off the board. Playing from an earlier pointer drops
    /// every later snapshot first.
    pub fn play(&mut self, index: usize) -> bool {
        if index >= CELL_COUNT {
            debug!(index, "click ignored: off the board");
            return false;
        }
        if let Some(win) = self.winner() {
            debug!(index, winner = %win.winner, "click ignored: game already won");
            return false;
        }
        let board = *self.current_board();
        if !board.is_empty_at(index) {
            debug!(index, "click ignored: cell occupied");
            return false;
        }

        let mark = self.next_player();
        let next = board.with_mark(index, mark);

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            index,
            mark = %mark,
            step = self.current_move,
            discarded,
            "move played"
        );
        true
    }

    /// Move the pointer to history entry `step`. History is untouched.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            debug!(step, len = self.history.len(), "jump ignored: no such move");
            return false;
        }
        self.current_move = step;
        debug!(step, "jumped");
        true
    }

    /// Flip the history display order.
    pub fn toggle_sort_order(&mut self) {
        self.sort = self.sort.toggled();
        debug!(order = self.sort.label(), "sort order toggled");
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn played(cells: &[usize]) -> Game {
        let mut game = Game::new();
        for &cell in cells {
            assert!(game.play(cell), "cell {} should be playable", cell);
        }
        game
    }

    #[test]
    fn new_game_starts_empty_with_x_to_move() {
        let game = Game::new();
        assert_eq!(game.history(), &[Board::empty()]);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.next_player(), Mark::X);
        assert_eq!(game.winner(), None);
        assert!(!game.is_draw());
    }

    #[test]
    fn play_alternates_marks() {
        let game = played(&[4, 0]);
        assert_eq!(game.current_board().get(4), Some(Mark::X));
        assert_eq!(game.current_board().get(0), Some(Mark::O));
        assert_eq!(game.next_player(), Mark::X);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn parity_after_n_plays() {
        let cells = [0, 1, 2, 4, 3, 5, 7, 6];
        for n in 0..cells.len() {
            let game = played(&cells[..n]);
            let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(game.next_player(), expected, "after {} plays", n);
        }
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let mut game = played(&[4]);
        let before = game.clone();
        assert!(!game.play(4));
        assert_eq!(game, before);
    }

    #[test]
    fn off_board_index_is_ignored() {
        let mut game = Game::new();
        assert!(!game.play(9));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn top_row_win_scenario() {
        let mut game = played(&[0, 4, 1, 7, 2]);
        let win = game.winner().expect("X should have won");
        assert_eq!(win.winner, Mark::X);
        assert_eq!(win.line, [0, 1, 2]);

        let before = game.clone();
        assert!(!game.play(8), "no play after a win");
        assert_eq!(game, before);
    }

    #[test]
    fn full_board_draw() {
        // X O X / X O O / O X X
        let game = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.winner(), None);
        assert!(game.is_draw());
    }

    #[test]
    fn branching_truncates_future_history() {
        let mut game = played(&[0, 4, 1, 7]);
        assert_eq!(game.history().len(), 5);

        assert!(game.jump_to(1));
        assert_eq!(game.history().len(), 5, "jumping keeps history");
        assert_eq!(game.next_player(), Mark::O);

        assert!(game.play(8));
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.current_board().get(8), Some(Mark::O));
        assert_eq!(game.current_board().get(4), None);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut game = played(&[0]);
        assert!(!game.jump_to(2));
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn jumping_back_before_a_win_allows_play() {
        let mut game = played(&[0, 4, 1, 7, 2]);
        assert!(game.jump_to(4));
        assert!(game.winner().is_none());
        assert!(game.play(8));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn move_location_diffs_consecutive_snapshots() {
        let game = played(&[4, 0, 8]);
        assert_eq!(game.move_location(0), None);
        assert_eq!(game.move_location(1), Some(Location { row: 1, col: 1 }));
        assert_eq!(game.move_location(2), Some(Location { row: 0, col: 0 }));
        assert_eq!(game.move_location(3), Some(Location { row: 2, col: 2 }));
        assert_eq!(game.move_location(4), None);
    }

    #[test]
    fn toggle_twice_restores_listing() {
        let mut game = played(&[0, 4, 1]);
        let listing = game.display_order();
        let history = game.history().to_vec();

        game.toggle_sort_order();
        assert_eq!(game.display_order(), vec![3, 2, 1, 0]);
        game.toggle_sort_order();

        assert_eq!(game.display_order(), listing);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_move(), 3);
    }
}
