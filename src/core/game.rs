//! Seams between the engine and whatever drives it
use crate::core::board::Board;
use crate::core::cursor::{Cursor, Direction};
use crate::core::engine::{GameEngine, Player};

/// One thing the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Confirm,
    Quit,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub players: &'a [Player],
    pub cursor: Cursor,
    pub current_player: &'a str,
    pub status: &'a str,
    pub finished: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(engine: &'a GameEngine, cursor: Cursor, status: &'a str) -> Self {
        Self {
            board: engine.board(),
            players: engine.players(),
            cursor,
            current_player: &engine.current_player().name,
            status,
            finished: engine.is_over(),
        }
    }
}

/// Supplies the next player action, blocking until one is available
pub trait InputSource {
    fn next_action(&mut self) -> anyhow::Result<Action>;
}

/// Draws the board; could be a terminal, a GUI or a test recorder
pub trait Renderer {
    fn draw(&mut self, view: &BoardView<'_>) -> anyhow::Result<()>;
}
