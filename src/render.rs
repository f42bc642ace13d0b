//! Pure projection: Game → everything a front end needs to draw.
//!
//! No I/O, no terminal types. The TUI view and the replay transcript
//! both consume a [`GameView`], so the wording lives in one place.

use crate::game::Game;
use crate::types::{Location, Mark, SortOrder, Win, CELL_COUNT};

/// Derived display state for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// "Winner: X", "It's a draw!" or "Next player: O".
    pub status: String,
    pub win: Option<Win>,
    pub draw: bool,
    /// One entry per cell, index order.
    pub cells: [CellView; CELL_COUNT],
    pub sort: SortOrder,
    /// Label of the sort toggle control.
    pub toggle_label: String,
    /// History entries in display order.
    pub entries: Vec<HistoryEntry>,
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    pub value: Option<Mark>,
    /// Part of the winning line.
    pub highlighted: bool,
    pub location: Location,
}

/// One line of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Chronological index, independent of display order.
    pub step: usize,
    pub label: String,
    /// The entry at the current pointer: a static marker, not a control.
    pub is_current: bool,
}

/// Project the game into its display state.
pub fn project(game: &Game) -> GameView {
    let board = game.current_board();
    let win = game.winner();
    let draw = game.is_draw();

    let cells = std::array::from_fn(|index| CellView {
        index,
        value: board.get(index),
        highlighted: win.is_some_and(|w| w.contains(index)),
        location: Location::of(index),
    });

    let entries = game
        .display_order()
        .into_iter()
        .map(|step| history_entry(game, step))
        .collect();

    GameView {
        status: status_text(win, draw, game.next_player()),
        win,
        draw,
        cells,
        sort: game.sort_order(),
        toggle_label: toggle_label(game.sort_order()),
        entries,
    }
}

/// Status line text.
pub fn status_text(win: Option<Win>, draw: bool, next: Mark) -> String {
    match win {
        Some(win) => format!("Winner: {}", win.winner),
        None if draw => "It's a draw!".to_string(),
        None => format!("Next player: {}", next),
    }
}

pub fn toggle_label(sort: SortOrder) -> String {
    format!("Toggle Sort Order ({})", sort.label())
}

fn history_entry(game: &Game, step: usize) -> HistoryEntry {
    let is_current = step == game.current_move();
    let label = if is_current {
        format!("You are at move # {}", step)
    } else {
        match game.move_location(step) {
            Some(location) => format!("Go to move # {} {}", step, location),
            None => "Go to game start".to_string(),
        }
    };
    HistoryEntry {
        step,
        label,
        is_current,
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
            game.play(cell);
        }
        game
    }

    fn labels(view: &GameView) -> Vec<&str> {
        view.entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn fresh_game_projection() {
        let view = project(&Game::new());
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.toggle_label, "Toggle Sort Order (Ascending)");
        assert_eq!(labels(&view), vec!["You are at move # 0"]);
        assert!(view.cells.iter().all(|c| c.value.is_none() && !c.highlighted));
    }

    #[test]
    fn winning_line_is_highlighted() {
        let view = project(&played(&[0, 4, 1, 7, 2]));
        assert_eq!(view.status, "Winner: X");
        let lit: Vec<usize> = view
            .cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.index)
            .collect();
        assert_eq!(lit, vec![0, 1, 2]);
    }

    #[test]
    fn draw_status() {
        let view = project(&played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]));
        assert_eq!(view.status, "It's a draw!");
        assert!(view.draw);
        assert!(view.win.is_none());
    }

    #[test]
    fn next_player_status_follows_parity() {
        assert_eq!(project(&played(&[4])).status, "Next player: O");
        assert_eq!(project(&played(&[4, 0])).status, "Next player: X");
    }

    #[test]
    fn history_labels_ascending() {
        let view = project(&played(&[4, 0]));
        assert_eq!(
            labels(&view),
            vec![
                "Go to game start",
                "Go to move # 1 (1, 1)",
                "You are at move # 2",
            ]
        );
    }

    #[test]
    fn history_labels_descending_keep_true_locations() {
        let mut game = played(&[4, 0, 8]);
        game.jump_to(1);
        game.toggle_sort_order();
        let view = project(&game);
        assert_eq!(view.toggle_label, "Toggle Sort Order (Descending)");
        assert_eq!(
            labels(&view),
            vec![
                "Go to move # 3 (2, 2)",
                "Go to move # 2 (0, 0)",
                "You are at move # 1",
                "Go to game start",
            ]
        );
        let steps: Vec<usize> = view.entries.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![3, 2, 1, 0]);
    }

    #[test]
    fn only_the_current_entry_is_static() {
        let mut game = played(&[0, 1, 2]);
        game.jump_to(2);
        let view = project(&game);
        let current: Vec<usize> = view
            .entries
            .iter()
            .filter(|e| e.is_current)
            .map(|e| e.step)
            .collect();
        assert_eq!(current, vec![2]);
    }

    #[test]
    fn cells_carry_locations() {
        let view = project(&Game::new());
        assert_eq!(view.cells[5].location.to_string(), "(1, 2)");
    }
}
