//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer.
//!
//! Color semantics:
//! - Yellow background: the winning line
//! - Cyan: X marks and interactive controls
//! - Magenta: O marks
//! - Reversed: keyboard cursor
//! - Dim: help text and coordinates

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// MARKS
// ============================================================================

pub const STYLE_X: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

pub const STYLE_O: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);

/// Cell on the winning line.
pub const STYLE_WINNING: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Status line ("Next player: X").
pub const STYLE_STATUS: Style = Style::new().add_modifier(Modifier::BOLD);

/// Clickable control (toggle, history jumps).
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// The static "You are at move # N" marker.
pub const STYLE_CURRENT_MOVE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Keyboard cursor, on the board or in the list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Border of the pane that has focus.
pub const STYLE_FOCUSED_BORDER: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
