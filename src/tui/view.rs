//! Pure rendering: map App state to ratatui widget trees.
//!
//! Geometry is computed once by [`regions`] and shared with the event
//! loop, so a mouse click is hit-tested against exactly the rectangles
//! that were drawn.

use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::render::{project, CellView, GameView};
use crate::types::{Mark, CELL_COUNT, SIDE};

use super::state::{Action, App, Focus};
use super::theme;

/// Cell size in terminal columns/rows, borders included.
const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Grid plus pane borders and one column of padding each side.
const BOARD_PANE_WIDTH: u16 = CELL_WIDTH * SIDE as u16 + 4;

/// Rows above the first history entry: toggle control and a gap.
const HISTORY_HEADER_ROWS: u16 = 2;

// ============================================================================
// LAYOUT
// ============================================================================

/// Screen rectangles for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    pub title: Rect,
    pub help: Rect,
    pub board_pane: Rect,
    pub history_pane: Rect,
    pub status: Rect,
    pub cells: [Rect; CELL_COUNT],
    /// Line under the grid naming the cursor cell's location.
    pub cursor_info: Rect,
    pub toggle: Rect,
    /// Visible history entries, in display order.
    pub entries: Vec<EntryRegion>,
}

/// Where one history entry was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRegion {
    pub step: usize,
    pub is_current: bool,
    pub area: Rect,
}

/// Compute every rectangle for a frame of the given size.
///
/// Anything that does not fit is clipped; entries past the bottom of
/// the history pane are dropped.
pub fn regions(area: Rect, view: &GameView) -> Regions {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let panes = Layout::horizontal([
        Constraint::Length(BOARD_PANE_WIDTH),
        Constraint::Min(0),
    ])
    .split(chunks[1]);

    let board_pane = panes[0];
    let history_pane = panes[1];

    let board_inner = Block::bordered().inner(board_pane);
    let status = line_at(board_inner, board_inner.y);

    let grid_x = board_inner.x.saturating_add(1);
    let grid_y = board_inner.y.saturating_add(2);
    let cells = std::array::from_fn(|index| {
        let row = (index / SIDE) as u16;
        let col = (index % SIDE) as u16;
        Rect::new(
            grid_x.saturating_add(col * CELL_WIDTH),
            grid_y.saturating_add(row * CELL_HEIGHT),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board_inner)
    });
    let cursor_info = line_at(
        board_inner,
        grid_y.saturating_add(SIDE as u16 * CELL_HEIGHT + 1),
    );

    let history_inner = Block::bordered().inner(history_pane);
    let toggle = line_at(history_inner, history_inner.y);

    let first_entry_y = history_inner.y.saturating_add(HISTORY_HEADER_ROWS);
    let entries = view
        .entries
        .iter()
        .enumerate()
        .map_while(|(row, entry)| {
            let y = first_entry_y.saturating_add(row as u16);
            (y < history_inner.bottom()).then(|| EntryRegion {
                step: entry.step,
                is_current: entry.is_current,
                area: line_at(history_inner, y),
            })
        })
        .collect();

    Regions {
        title: chunks[0],
        help: chunks[2],
        board_pane,
        history_pane,
        status,
        cells,
        cursor_info,
        toggle,
        entries,
    }
}

/// A one-row strip of `within` at row `y`, empty if `y` is outside it.
fn line_at(within: Rect, y: u16) -> Rect {
    Rect::new(within.x, y, within.width, 1).intersection(within)
}

impl Regions {
    /// The action a left click at (column, row) stands for.
    ///
    /// The current history entry is a static marker, not a control.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);

        if let Some(index) = self.cells.iter().position(|r| r.contains(position)) {
            return Some(Action::PlayCell(index));
        }
        if self.toggle.contains(position) {
            return Some(Action::ToggleSort);
        }
        self.entries
            .iter()
            .find(|e| !e.is_current && e.area.contains(position))
            .map(|e| Action::JumpTo(e.step))
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole app to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let view = project(&app.game);
    let regions = regions(frame.area(), &view);

    frame.render_widget(render_title(app), regions.title);
    frame.render_widget(render_help(app.focus), regions.help);

    render_board(app, &view, &regions, frame);
    render_history(app, &view, &regions, frame);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(app: &App) -> Paragraph<'static> {
    let moves = app.game.history().len() - 1;
    Paragraph::new(Line::from(vec![
        Span::styled("tictactoe-history", theme::STYLE_TITLE),
        Span::styled(
            format!("  move {} of {}", app.game.current_move(), moves),
            theme::STYLE_DIM,
        ),
    ]))
}

fn render_help(focus: Focus) -> Paragraph<'static> {
    let help_text = match focus {
        Focus::Board => "[arrows] move  [Enter] play  [1-9] cell  [Tab] history  [s] sort  [q] quit",
        Focus::History => "[j/k] move  [Enter] jump  [Tab] board  [s] sort  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn pane(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        theme::STYLE_FOCUSED_BORDER
    } else {
        theme::STYLE_DIM
    };
    Block::bordered().title(title).border_style(border)
}

// ============================================================================
// BOARD
// ============================================================================

fn render_board(app: &App, view: &GameView, regions: &Regions, frame: &mut Frame) {
    let focused = app.focus == Focus::Board;
    frame.render_widget(pane(" Board ", focused), regions.board_pane);

    frame.render_widget(
        Paragraph::new(Span::styled(view.status.clone(), theme::STYLE_STATUS)),
        regions.status,
    );

    for (cell, area) in view.cells.iter().zip(regions.cells) {
        let is_cursor = focused && cell.index == app.cell_cursor;
        frame.render_widget(render_cell(cell, is_cursor), area);
    }

    let cursor_location = view.cells[app.cell_cursor.min(CELL_COUNT - 1)].location;
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Cell {}", cursor_location),
            theme::STYLE_DIM,
        )),
        regions.cursor_info,
    );
}

fn render_cell(cell: &CellView, is_cursor: bool) -> Paragraph<'static> {
    let mut style = match cell.value {
        Some(Mark::X) => theme::STYLE_X,
        Some(Mark::O) => theme::STYLE_O,
        None => Style::new(),
    };
    if cell.highlighted {
        style = style.patch(theme::STYLE_WINNING);
    }
    if is_cursor {
        style = style.patch(theme::STYLE_CURSOR);
    }

    let symbol = cell.value.map_or(" ", Mark::as_str);
    Paragraph::new(symbol)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered().border_style(theme::STYLE_DIM))
}

// ============================================================================
// HISTORY
// ============================================================================

fn render_history(app: &App, view: &GameView, regions: &Regions, frame: &mut Frame) {
    let focused = app.focus == Focus::History;
    frame.render_widget(pane(" History ", focused), regions.history_pane);

    frame.render_widget(
        Paragraph::new(Span::styled(
            view.toggle_label.clone(),
            theme::STYLE_INTERACTIVE,
        )),
        regions.toggle,
    );

    for (row, (entry, region)) in view.entries.iter().zip(&regions.entries).enumerate() {
        let mut style = if entry.is_current {
            theme::STYLE_CURRENT_MOVE
        } else {
            theme::STYLE_INTERACTIVE
        };
        if focused && row == app.history_cursor {
            style = style.patch(theme::STYLE_CURSOR);
        }
        let line = format!("{:>2}. {}", row + 1, entry.label);
        frame.render_widget(Paragraph::new(Span::styled(line, style)), region.area);
    }
}

// ============================================================================
// TESTS
// ============================================================================
