use anyhow::Result;
use tracing::{debug, info};

use crate::core::cursor::Cursor;
use crate::core::engine::{GameEngine, GameResult};
use crate::core::game::{Action, BoardView, InputSource, Renderer};

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Won(String),
    Draw,
    Quit,
}

/// Turn loop: render, read an action, apply it, repeat until the game ends
pub struct Runner<R: Renderer, I: InputSource> {
    engine: GameEngine,
    cursor: Cursor,
    status: String,
    renderer: R,
    input: I,
}

impl<R: Renderer, I: InputSource> Runner<R, I> {
    pub fn new(engine: GameEngine, renderer: R, input: I) -> Self {
        let cursor = Cursor::new(engine.grid_size());
        let status = turn_prompt(&engine);
        Self {
            engine,
            cursor,
            status,
            renderer,
            input,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        info!(grid_size = self.engine.grid_size(), "session started");

        loop {
            self.render()?;

            match self.input.next_action()? {
                Action::Move(direction) => self.cursor.step(direction),
                Action::Confirm => {
                    let (row, col) = self.cursor.position();
                    let result = self.engine.apply_move(row, col)?;
                    debug!(row, col, ?result, "move confirmed");

                    match result {
                        GameResult::Occupied => {
                            self.status = format!(
                                "Cell ({}, {}) is taken. {}, pick another cell.",
                                row,
                                col,
                                self.engine.current_player().name
                            );
                        }
                        GameResult::InProgress => self.status = turn_prompt(&self.engine),
                        GameResult::Win(name) => {
                            self.status = format!("Congratulations {}! You won!", name);
                            self.render()?;
                            info!(winner = %name, "session finished");
                            return Ok(SessionEnd::Won(name));
                        }
                        GameResult::Draw => {
                            self.status = "It's a draw!".to_string();
                            self.render()?;
                            info!("session finished in a draw");
                            return Ok(SessionEnd::Draw);
                        }
                    }
                }
                Action::Quit => {
                    info!(moves_left = self.engine.moves_left(), "session abandoned");
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let view = BoardView::new(&self.engine, self.cursor, &self.status);
        self.renderer.draw(&view)
    }
}

fn turn_prompt(engine: &GameEngine) -> String {
    format!(
        "{}'s turn. Use arrow keys to move, Enter to select.",
        engine.current_player().name
    )
}
