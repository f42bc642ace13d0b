//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Single-threaded: each input event runs to completion, then the whole
//! frame is redrawn.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::game::Game;
use crate::render::project;
use crate::types::SessionConfig;

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::{regions, render, Regions};

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),

        // Play / jump
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char(c @ '1'..='9') => Some(Action::PlayCell((c as u8 - b'1') as usize)),

        KeyCode::Char('s') => Some(Action::ToggleSort),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

/// Map a mouse event to an Action using the last frame's geometry.
///
/// Only left-button presses count as clicks.
pub fn map_mouse(mouse: MouseEvent, regions: &Regions) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => regions.action_at(mouse.column, mouse.row),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run an interactive session until the user quits.
///
/// The terminal is restored on every exit path, including errors from
/// the loop itself.
pub fn run(config: &SessionConfig) -> io::Result<Game> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let app = App::new(Game::with_sort_order(config.sort));

    info!(sort = config.sort.label(), "session started");

    let result = event_loop(&mut terminal, app);
    restore_terminal()?;

    if let Ok(game) = &result {
        info!(
            moves = game.history().len() - 1,
            current = game.current_move(),
            "session ended"
        );
    }
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<Game> {
    loop {
        let area = terminal.draw(|frame| render(&app, frame))?.area;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
            Event::Mouse(mouse) => map_mouse(mouse, &regions(area, &project(&app.game))),
            // Resize just falls through to the next draw
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };
        debug!(?action, "input");

        match update(app, &action) {
            Transition::Continue(next) => app = next,
            Transition::Quit(game) => return Ok(game),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn sample_regions() -> Regions {
        regions(Rect::new(0, 0, 70, 22), &project(&Game::new()))
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn q_and_esc_quit() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn vim_and_arrow_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::MoveLeft));
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::MoveRight));
        assert_eq!(map_key(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Right)), Some(Action::MoveRight));
    }

    #[test]
    fn digits_map_to_cells() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), Some(Action::PlayCell(0)));
        assert_eq!(map_key(key(KeyCode::Char('9'))), Some(Action::PlayCell(8)));
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn enter_space_and_tab() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::Activate));
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::SwitchFocus));
        assert_eq!(map_key(key(KeyCode::Char('s'))), Some(Action::ToggleSort));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let event = KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(event), None);
    }

    #[test]
    fn left_click_on_cell_plays() {
        let r = sample_regions();
        let cell = r.cells[0];
        let click = mouse(MouseEventKind::Down(MouseButton::Left), cell.x + 1, cell.y + 1);
        assert_eq!(map_mouse(click, &r), Some(Action::PlayCell(0)));
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let r = sample_regions();
        let cell = r.cells[0];
        let right = mouse(MouseEventKind::Down(MouseButton::Right), cell.x + 1, cell.y + 1);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), cell.x + 1, cell.y + 1);
        let moved = mouse(MouseEventKind::Moved, cell.x + 1, cell.y + 1);
        assert_eq!(map_mouse(right, &r), None);
        assert_eq!(map_mouse(up, &r), None);
        assert_eq!(map_mouse(moved, &r), None);
    }
}
