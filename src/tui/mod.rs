//! TUI module for the interactive game.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering and click geometry
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
