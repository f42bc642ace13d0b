//! tictactoe-history: tic-tac-toe with a move history you can jump through.

pub mod error;
pub mod game;
pub mod logging;
pub mod render;
pub mod replay;
pub mod report;
pub mod rules;
pub mod tui;
pub mod types;
