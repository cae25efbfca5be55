//! Crossterm/ratatui terminal wrapper that draws the board and reads keys
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::core::cursor::Direction;
use crate::core::game::{Action, BoardView, InputSource, Renderer};
use crate::core::renderer::draw_board;

pub struct TerminalUi {
    terminal: DefaultTerminal,
}

impl TerminalUi {
    /// Enter raw mode and the alternate screen. Call `ratatui::restore()` when done.
    pub fn init() -> Self {
        Self {
            terminal: ratatui::init(),
        }
    }
}

/// Blocking keyboard reader
pub struct KeyboardInput;

impl Renderer for TerminalUi {
    fn draw(&mut self, view: &BoardView<'_>) -> Result<()> {
        self.terminal
            .draw(|f| draw_board(f, view))
            .context("failed to draw board")?;
        Ok(())
    }
}

impl InputSource for KeyboardInput {
    fn next_action(&mut self) -> Result<Action> {
        loop {
            if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                if let Some(action) = map_key(key) {
                    return Ok(action);
                }
            }
        }
    }
}

/// Translate a key press into an action; releases and unbound keys map to `None`
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Action::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Action::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
