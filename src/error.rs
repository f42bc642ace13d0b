//! Errors for the command-line surface.
//!
//! The game itself never fails: rejected clicks are no-ops. Only
//! argument parsing, the terminal and log setup can go wrong.

use std::io;
use std::path::PathBuf;

use crate::types::CELL_COUNT;

/// Anything that stops the program before or during a session.
#[derive(Debug)]
pub enum AppError {
    /// A replay cell argument was not a number.
    InvalidCell(String),

    /// A replay cell argument was a number but not on the board.
    CellOutOfRange(usize),

    /// `--jump` named a move the replay never reached.
    JumpOutOfRange { step: usize, history_len: usize },

    /// The log file could not be created.
    LogFile { path: PathBuf, source: io::Error },

    /// Terminal setup, drawing or event reading failed.
    Terminal(io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidCell(arg) => {
                write!(f, "Invalid cell '{}': expected a number 0-{}", arg, CELL_COUNT - 1)
            }
            AppError::CellOutOfRange(index) => {
                write!(f, "Cell {} is off the board (expected 0-{})", index, CELL_COUNT - 1)
            }
            AppError::JumpOutOfRange { step, history_len } => write!(
                f,
                "Cannot jump to move {}: history has moves 0-{}",
                step,
                history_len.saturating_sub(1)
            ),
            AppError::LogFile { path, source } => {
                write!(f, "Cannot open log file {}: {}", path.display(), source)
            }
            AppError::Terminal(e) => write!(f, "Terminal error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::LogFile { source, .. } => Some(source),
            AppError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Terminal(e)
    }
}

// ============================================================================
// TESTS
// ============================================================================
