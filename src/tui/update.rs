//! Pure state transitions: (App, Action) → Transition.
//!
//! Fully testable without a terminal. Game mutations go through the
//! controller's own operations, so a rejected click stays a no-op here
//! too. Cursor movement clamps at the edges.

use crate::types::SIDE;

use super::state::{display_position, Action, App, Focus, Transition};

/// Pure state transition function.
pub fn update(mut app: App, action: &Action) -> Transition {
    match action {
        Action::Quit => return Transition::Quit(app.game),
        Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
            match app.focus {
                Focus::Board => app.cell_cursor = move_cell_cursor(app.cell_cursor, action),
                Focus::History => {
                    app.history_cursor =
                        move_history_cursor(app.history_cursor, app.game.history().len(), action)
                }
            }
        }
        Action::SwitchFocus => {
            app.focus = app.focus.other();
            if app.focus == Focus::History {
                app.history_cursor = display_position(&app.game, app.game.current_move());
            }
        }
        Action::Activate => match app.focus {
            Focus::Board => {
                let cell = app.cell_cursor;
                play(&mut app, cell);
            }
            Focus::History => {
                if let Some(step) = app.focused_step() {
                    app.game.jump_to(step);
                }
            }
        },
        Action::PlayCell(cell) => {
            app.cell_cursor = *cell;
            play(&mut app, *cell);
        }
        Action::JumpTo(step) => {
            if app.game.jump_to(*step) {
                app.history_cursor = display_position(&app.game, *step);
            }
        }
        Action::ToggleSort => {
            // Keep the cursor on the same step after the listing flips
            let step = app.focused_step();
            app.game.toggle_sort_order();
            if let Some(step) = step {
                app.history_cursor = display_position(&app.game, step);
            }
        }
    }
    Transition::Continue(app)
}

// ============================================================================
// HELPERS
// ============================================================================

/// Play a cell; on success, park the history cursor on the new move.
fn play(app: &mut App, cell: usize) {
    if app.game.play(cell) {
        app.history_cursor = display_position(&app.game, app.game.current_move());
    }
}

/// Move within the 3x3 grid, clamping at the edges.
fn move_cell_cursor(cursor: usize, action: &Action) -> usize {
    let (row, col) = (cursor / SIDE, cursor % SIDE);
    let (row, col) = match action {
        Action::MoveUp => (row.saturating_sub(1), col),
        Action::MoveDown => ((row + 1).min(SIDE - 1), col),
        Action::MoveLeft => (row, col.saturating_sub(1)),
        Action::MoveRight => (row, (col + 1).min(SIDE - 1)),
        _ => (row, col),
    };
    row * SIDE + col
}

/// Move within the history listing. Left/right do nothing there.
fn move_history_cursor(cursor: usize, len: usize, action: &Action) -> usize {
    match action {
        Action::MoveUp => cursor.saturating_sub(1),
        Action::MoveDown => {
            if len == 0 {
                0
            } else {
                (cursor + 1).min(len - 1)
            }
        }
        _ => cursor,
    }
}

// ============================================================================
// TESTS
// ============================================================================
