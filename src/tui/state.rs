//! TUI state algebra: pure types, zero effects.
//!
//! The game itself (history, pointer, sort order) lives in [`Game`].
//! `App` adds only what the terminal needs on top of it: which pane has
//! keyboard focus and where the two cursors sit.

use crate::game::Game;
use crate::types::CELL_COUNT;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct App {
    /// The game session. Mutated only through its own operations.
    pub game: Game,

    /// Which pane receives cursor keys.
    pub focus: Focus,

    /// Focused cell on the board (0..9).
    pub cell_cursor: usize,

    /// Focused row of the history list, in display order.
    pub history_cursor: usize,
}

/// Keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Board,
    History,
}

impl Focus {
    pub fn other(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Switch focus between board and history.
    SwitchFocus,
    /// Play the focused cell, or jump to the focused history entry.
    Activate,
    /// Play a specific cell (digit key or mouse click).
    PlayCell(usize),
    /// Jump to a specific history step (mouse click).
    JumpTo(usize),
    /// Flip the history display order.
    ToggleSort,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the event loop either keeps
/// drawing or tears the terminal down.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep running with this state.
    Continue(App),
    /// Quit the application, handing back the final game.
    Quit(Game),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Wrap a game, cursors on the centre cell and the current move.
    pub fn new(game: Game) -> Self {
        let history_cursor = display_position(&game, game.current_move());
        App {
            game,
            focus: Focus::Board,
            cell_cursor: CELL_COUNT / 2,
            history_cursor,
        }
    }

    /// Step under the history cursor.
    pub fn focused_step(&self) -> Option<usize> {
        self.game.display_order().get(self.history_cursor).copied()
    }
}

/// Row at which `step` appears in the game's history listing.
pub fn display_position(game: &Game, step: usize) -> usize {
    game.display_order()
        .iter()
        .position(|&s| s == step)
        .unwrap_or(0)
}

// ============================================================================
// TESTS
// ============================================================================
