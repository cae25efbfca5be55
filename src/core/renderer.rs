//! Ratatui drawing for the board screen
use std::ops::Range;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::board::Cell;
use crate::core::game::BoardView;

const PLAYER_COLORS: [Color; 4] = [Color::Cyan, Color::Yellow, Color::Green, Color::Magenta];

/// Draw the full game screen for `view` into `frame`
pub fn draw_board(frame: &mut Frame, view: &BoardView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Status
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Legend
        ])
        .split(frame.area());

    let header = Paragraph::new(format!("TERMTOE  {0}x{0}", view.board.size()))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(header, chunks[0]);

    let status_style = if view.finished {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status.to_string())
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style);
    frame.render_widget(status, chunks[1]);

    let block = Block::default().borders(Borders::ALL);
    let viewport = Viewport::fit(view.board.size(), view.cursor.position(), block.inner(chunks[2]));
    let board = Paragraph::new(board_lines(view, &viewport))
        .block(block.title(viewport.title(view.board.size())))
        .centered();
    frame.render_widget(board, chunks[2]);

    frame.render_widget(legend(view), chunks[3]);
}

/// Width of a cell in the compact layout, which has no separators
const COMPACT_CELL_WIDTH: usize = 3;

/// The part of the board that fits on screen, always containing the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
struct Viewport {
    rows: Range<usize>,
    cols: Range<usize>,
    compact: bool,
}

impl Viewport {
    fn fit(size: usize, cursor: (usize, usize), area: Rect) -> Self {
        let (height, width) = (area.height as usize, area.width as usize);
        if 2 * size + 1 <= height && 4 * size + 1 <= width {
            return Self {
                rows: 0..size,
                cols: 0..size,
                compact: false,
            };
        }

        let visible_rows = height.min(size).max(1);
        let visible_cols = (width / COMPACT_CELL_WIDTH).min(size).max(1);
        Self {
            rows: window(size, visible_rows, cursor.0),
            cols: window(size, visible_cols, cursor.1),
            compact: true,
        }
    }

    fn title(&self, size: usize) -> String {
        if self.rows.len() >= size && self.cols.len() >= size {
            return "Board".to_string();
        }
        format!(
            "Board rows {}-{} cols {}-{}",
            self.rows.start,
            self.rows.end - 1,
            self.cols.start,
            self.cols.end - 1
        )
    }
}

/// `visible` consecutive indices out of `size`, centered on `focus` where possible
fn window(size: usize, visible: usize, focus: usize) -> Range<usize> {
    let start = focus
        .saturating_sub(visible / 2)
        .min(size.saturating_sub(visible));
    start..start + visible
}

fn board_lines(view: &BoardView<'_>, viewport: &Viewport) -> Vec<Line<'static>> {
    let separator = Line::from(format!("+{}", "---+".repeat(viewport.cols.len())));
    let mut lines = Vec::new();
    if !viewport.compact {
        lines.push(separator.clone());
    }

    let rows = view
        .board
        .rows()
        .enumerate()
        .skip(viewport.rows.start)
        .take(viewport.rows.len());
    for (row_idx, row) in rows {
        let mut spans = Vec::new();
        if !viewport.compact {
            spans.push(Span::raw("|"));
        }
        for col_idx in viewport.cols.clone() {
            let cell = row[col_idx];
            let mut style = cell_style(view, cell);
            if (row_idx, col_idx) == view.cursor.position() && !view.finished {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let empty = if viewport.compact { '·' } else { ' ' };
            let symbol = cell.symbol().unwrap_or(empty);
            spans.push(Span::styled(format!(" {} ", symbol), style));
            if !viewport.compact {
                spans.push(Span::raw("|"));
            }
        }
        lines.push(Line::from(spans));
        if !viewport.compact {
            lines.push(separator.clone());
        }
    }

    lines
}

fn cell_style(view: &BoardView<'_>, cell: Cell) -> Style {
    let owner = cell
        .symbol()
        .and_then(|symbol| view.players.iter().position(|p| p.symbol == symbol));
    match owner {
        Some(idx) => Style::default()
            .fg(PLAYER_COLORS[idx % PLAYER_COLORS.len()])
            .add_modifier(Modifier::BOLD),
        None => Style::default(),
    }
}

fn legend(view: &BoardView<'_>) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (idx, player) in view.players.iter().enumerate() {
        let color = PLAYER_COLORS[idx % PLAYER_COLORS.len()];
        spans.push(Span::styled(
            format!("{} {}", player.symbol, player.name),
            Style::default().fg(color),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        "[arrows] Move  [Enter] Place  [Esc] Quit",
        Style::default().fg(Color::Gray),
    ));

    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title("Players"))
}
