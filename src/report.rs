//! Transcript formatting for replayed games.
//!
//! Pure functions: (Game, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::game::Game;
use crate::render::{project, CellView, GameView};
use crate::types::{Mark, OutputFormat, SortOrder};

/// Format a game's current display state for output.
pub fn format_transcript(game: &Game, format: OutputFormat) -> String {
    let view = project(game);
    match format {
        OutputFormat::Human => format_human(&view),
        OutputFormat::Json => format_json(game, &view),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(view: &GameView) -> String {
    let mut out = String::new();

    out.push_str(&view.status);
    out.push_str("\n\n");

    for (row, cells) in view.cells.chunks(3).enumerate() {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let rendered: Vec<String> = cells.iter().map(format_cell).collect();
        out.push_str(&rendered.join("|"));
        out.push('\n');
    }
    out.push('\n');

    out.push_str(&view.toggle_label);
    out.push('\n');
    for (position, entry) in view.entries.iter().enumerate() {
        let marker = if entry.is_current { ">" } else { " " };
        out.push_str(&format!("{}{:>3}. {}\n", marker, position + 1, entry.label));
    }

    out
}

/// Three characters wide. Winning cells are bracketed.
fn format_cell(cell: &CellView) -> String {
    let symbol = cell.value.map_or(".", Mark::as_str);
    if cell.highlighted {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct Transcript<'a> {
    status: &'a str,
    winner: Option<Mark>,
    winning_line: Option<[usize; 3]>,
    draw: bool,
    current_move: usize,
    sort: SortOrder,
    board: [Option<Mark>; 9],
    history: Vec<TranscriptEntry<'a>>,
}

#[derive(Serialize)]
struct TranscriptEntry<'a> {
    step: usize,
    label: &'a str,
    current: bool,
}

fn format_json(game: &Game, view: &GameView) -> String {
    let transcript = Transcript {
        status: &view.status,
        winner: view.win.map(|w| w.winner),
        winning_line: view.win.map(|w| w.line),
        draw: view.draw,
        current_move: game.current_move(),
        sort: view.sort,
        board: *game.current_board().cells(),
        history: view
            .entries
            .iter()
            .map(|e| TranscriptEntry {
                step: e.step,
                label: &e.label,
                current: e.is_current,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&transcript).unwrap_or_else(|e| {
        // Plain structs of strings and numbers cannot fail to serialize
        panic!("Failed to serialize transcript to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
