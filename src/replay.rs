//! Non-interactive sessions: apply a list of clicks to a fresh game.
//!
//! Clicks go through [`Game::play`] exactly as the UI sends them, so an
//! occupied cell or a click after a win is silently skipped. Only the
//! arguments themselves are validated.

use tracing::{info, warn};

use crate::error::AppError;
use crate::game::Game;
use crate::types::{ReplayConfig, CELL_COUNT};

/// Parse a cell argument ("0".."8").
pub fn parse_cell(arg: &str) -> Result<usize, AppError> {
    let index: usize = arg
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidCell(arg.to_string()))?;
    if index >= CELL_COUNT {
        return Err(AppError::CellOutOfRange(index));
    }
    Ok(index)
}

/// Parse every cell argument, stopping at the first bad one.
pub fn parse_cells<S: AsRef<str>>(args: &[S]) -> Result<Vec<usize>, AppError> {
    args.iter().map(|a| parse_cell(a.as_ref())).collect()
}

/// Play the configured clicks, then apply the optional jump.
pub fn replay(config: &ReplayConfig) -> Result<Game, AppError> {
    let mut game = Game::with_sort_order(config.sort);

    let mut ignored = 0;
    for &cell in &config.cells {
        if !game.play(cell) {
            ignored += 1;
        }
    }
    if ignored > 0 {
        warn!(ignored, "some clicks were ignored (occupied cell or game over)");
    }

    if let Some(step) = config.jump {
        if !game.jump_to(step) {
            return Err(AppError::JumpOutOfRange {
                step,
                history_len: game.history().len(),
            });
        }
    }

    info!(
        clicks = config.cells.len(),
        moves = game.history().len() - 1,
        current = game.current_move(),
        "replay finished"
    );
    Ok(game)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn config(cells: &[usize]) -> ReplayConfig {
        ReplayConfig {
            cells: cells.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn parse_cell_accepts_board_indices() {
        assert_eq!(parse_cell("0").unwrap(), 0);
        assert_eq!(parse_cell(" 8 ").unwrap(), 8);
    }

    #[test]
    fn parse_cell_rejects_garbage_and_off_board() {
        assert!(matches!(parse_cell("x"), Err(AppError::InvalidCell(_))));
        assert!(matches!(parse_cell("-1"), Err(AppError::InvalidCell(_))));
        assert!(matches!(parse_cell("9"), Err(AppError::CellOutOfRange(9))));
    }

    #[test]
    fn parse_cells_stops_at_first_error() {
        assert_eq!(parse_cells(&["0", "4", "1"]).unwrap(), vec![0, 4, 1]);
        assert!(parse_cells(&["0", "nine", "1"]).is_err());
    }

    #[test]
    fn replay_skips_rejected_clicks() {
        let game = replay(&config(&[0, 0, 4])).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_board().get(4), Some(Mark::O));
    }

    #[test]
    fn replay_applies_jump() {
        let cfg = ReplayConfig {
            jump: Some(1),
            ..config(&[0, 4, 1])
        };
        let game = replay(&cfg).unwrap();
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn replay_rejects_unreachable_jump() {
        let cfg = ReplayConfig {
            jump: Some(5),
            ..config(&[0])
        };
        assert!(matches!(
            replay(&cfg),
            Err(AppError::JumpOutOfRange { step: 5, history_len: 2 })
        ));
    }
}
