//! Errors returned by the game engine
use thiserror::Error;

/// Why a game configuration was rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("too few players: {0} (at least 2 required)")]
    TooFewPlayers(usize),

    #[error("too many players: {0} (at most 4 allowed)")]
    TooManyPlayers(usize),

    #[error("grid too small: {0} (at least 5 required)")]
    GridTooSmall(usize),

    #[error("grid too large: {0} (at most 25 allowed)")]
    GridTooLarge(usize),

    #[error("expected {expected} player names, got {actual}")]
    NameCountMismatch { expected: usize, actual: usize },

    #[error("player {index} has an empty name")]
    EmptyName { index: usize },

    #[error("symbol pool has {available} symbols, {requested} players requested")]
    SymbolPoolExhausted { requested: usize, available: usize },

    #[error("no symbol given for player '{0}'")]
    MissingSymbol(String),

    #[error("player '{0}' has a blank symbol")]
    BlankSymbol(String),

    #[error("symbol '{0}' is assigned to more than one player")]
    DuplicateSymbol(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("coordinate ({row}, {col}) is outside the {grid_size}x{grid_size} board")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        grid_size: usize,
    },

    #[error("game is already over")]
    GameAlreadyOver,
}
