pub mod core {
	pub mod board;
	pub mod cursor;
	pub mod engine;
	pub mod error;
	pub mod game;
	pub mod renderer;
	pub mod runner;
	pub mod symbols;
	pub mod terminal;
}

pub mod cli;
pub mod config;

// Re-export for convenience
pub use crate::core::engine::{GameConfig, GameEngine, GameResult, Player};
pub use crate::core::error::{ConfigError, GameError};
