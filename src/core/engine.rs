use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, info};

use crate::core::board::{Board, Cell};
use crate::core::error::{ConfigError, GameError};
use crate::core::symbols;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 25;

/// Run length needed to win on a board of `grid_size`
pub fn win_threshold(grid_size: usize) -> usize {
    grid_size.div_ceil(2)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub symbol: char,
}

/// Everything needed to start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub num_players: usize,
    pub player_names: Vec<String>,
    pub grid_size: usize,
    /// Name -> symbol. Drawn at random from the pool when absent.
    pub player_symbols: Option<HashMap<String, char>>,
}

impl GameConfig {
    pub fn new(player_names: Vec<String>, grid_size: usize) -> Self {
        Self {
            num_players: player_names.len(),
            player_names,
            grid_size,
            player_symbols: None,
        }
    }

    pub fn with_symbols(mut self, symbols: HashMap<String, char>) -> Self {
        self.player_symbols = Some(symbols);
        self
    }

    /// Check the configuration, stopping at the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_players < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(self.num_players));
        }
        if self.num_players > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.num_players));
        }
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.player_names.len() != self.num_players {
            return Err(ConfigError::NameCountMismatch {
                expected: self.num_players,
                actual: self.player_names.len(),
            });
        }
        if let Some(index) = self.player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::EmptyName { index });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    /// The cell was taken; nothing changed
    Occupied,
    Win(String),
    Draw,
}

impl GameResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameResult::Win(_) | GameResult::Draw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub current_player_index: usize,
    pub moves_left: usize,
}

/// Board plus turn state for a single game
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: Vec<Player>,
    turn: TurnState,
    outcome: Option<GameResult>,
}

impl GameEngine {
    /// Build a game, drawing default symbols from the thread RNG
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;

        let symbols = match &config.player_symbols {
            Some(mapping) => symbols::explicit_symbols(&config.player_names, mapping)?,
            None => symbols::random_symbols(config.num_players, rng)?,
        };

        let players: Vec<Player> = config
            .player_names
            .into_iter()
            .zip(symbols)
            .map(|(name, symbol)| Player { name, symbol })
            .collect();

        let grid_size = config.grid_size;
        info!(
            grid_size,
            players = players.len(),
            need = win_threshold(grid_size),
            "new game"
        );

        Ok(Self {
            board: Board::new(grid_size),
            players,
            turn: TurnState {
                current_player_index: 0,
                moves_left: grid_size * grid_size,
            },
            outcome: None,
        })
    }

    /// Place the current player's symbol at (row, col).
    ///
    /// `Occupied` leaves every piece of state untouched. A `Win` or `Draw`
    /// ends the game, after which every call fails with `GameAlreadyOver`.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameResult, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.board.contains(row, col) {
            return Err(GameError::InvalidCoordinate {
                row,
                col,
                grid_size: self.grid_size(),
            });
        }

        let player = &self.players[self.turn.current_player_index];
        if !self.board.place(row, col, player.symbol) {
            debug!(row, col, player = %player.name, "cell occupied");
            return Ok(GameResult::Occupied);
        }
        self.turn.moves_left -= 1;
        debug!(row, col, player = %player.name, moves_left = self.turn.moves_left, "placed");

        if self.board.has_run(row, col, self.threshold()) {
            info!(winner = %player.name, "game won");
            let result = GameResult::Win(player.name.clone());
            self.outcome = Some(result.clone());
            return Ok(result);
        }

        if self.turn.moves_left == 0 {
            info!("board full, game drawn");
            self.outcome = Some(GameResult::Draw);
            return Ok(GameResult::Draw);
        }

        self.turn.current_player_index = (self.turn.current_player_index + 1) % self.players.len();
        Ok(GameResult::InProgress)
    }

    /// Apply a move to a copy and return the new state (immutable)
    pub fn after_move(&self, row: usize, col: usize) -> Result<(GameEngine, GameResult), GameError> {
        let mut next = self.clone();
        let result = next.apply_move(row, col)?;
        Ok((next, result))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn grid_size(&self) -> usize {
        self.board.size()
    }

    pub fn threshold(&self) -> usize {
        win_threshold(self.grid_size())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn.current_player_index]
    }

    pub fn current_player_index(&self) -> usize {
        self.turn.current_player_index
    }

    pub fn moves_left(&self) -> usize {
        self.turn.moves_left
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Symbol of the first player called `name`
    pub fn symbol_of(&self, name: &str) -> Option<char> {
        self.players.iter().find(|p| p.name == name).map(|p| p.symbol)
    }

    /// `Win` or `Draw` once the game has ended
    pub fn outcome(&self) -> Option<&GameResult> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
