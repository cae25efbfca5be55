use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use rand::Rng;

use crate::config::Settings;
use crate::core::engine::{
    GameConfig, GameEngine, MAX_GRID_SIZE, MAX_PLAYERS, MIN_GRID_SIZE, MIN_PLAYERS,
};
use crate::core::error::{ConfigError, GameError};

#[derive(Parser, Debug)]
#[command(name = "termtoe")]
#[command(about = "Terminal grid game for 2-4 players: line up half the board to win")]
#[command(version)]
pub struct Cli {
    /// Number of players (2 to 4)
    #[arg(short, long)]
    pub players: Option<usize>,

    /// Player name, repeat once per player in turn order
    #[arg(short, long = "name")]
    pub names: Vec<String>,

    /// Board width and height (5 to 25)
    #[arg(short, long)]
    pub grid_size: Option<usize>,

    /// Fixed symbol for a player, as NAME=CHAR
    #[arg(short, long = "symbol", value_parser = parse_symbol)]
    pub symbols: Vec<(String, char)>,

    /// Seed for the random symbol assignment
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file with default settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Settings from the config file (if any) overridden by the flags
    pub fn settings(&self) -> Result<Settings> {
        let base = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        Ok(base.merge(Settings {
            players: self.players,
            names: self.names.clone(),
            grid_size: self.grid_size,
            symbols: self.symbols.iter().cloned().collect(),
            seed: self.seed,
            log_file: self.log_file.clone(),
        }))
    }
}

fn parse_symbol(raw: &str) -> Result<(String, char), String> {
    let (name, symbol) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=CHAR, got '{}'", raw))?;

    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !name.is_empty() => Ok((name.to_string(), c)),
        _ => Err(format!("expected NAME=CHAR with a single character, got '{}'", raw)),
    }
}

/// Build the engine, prompting for anything the settings leave out.
///
/// When the engine rejects a configuration that a prompt could still fix,
/// the error is shown and only the missing values are asked for again.
/// Values from the command line or config file are kept on every attempt;
/// a bad one aborts.
pub fn build_engine<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Result<GameEngine> {
    loop {
        let prompted = settings.is_incomplete();
        let config = match settings.to_config() {
            Some(config) => config,
            None => prompt_missing(settings)?,
        };

        match GameEngine::with_rng(config, rng) {
            Ok(engine) => return Ok(engine),
            Err(err) if prompted && fixable_by_prompt(&err, settings) => eprintln!("❌ {}", err),
            Err(err) => return Err(err).context("invalid game configuration"),
        }
    }
}

/// Whether asking again could produce a different outcome, i.e. the error
/// involves a name that was typed at a prompt rather than given up front
fn fixable_by_prompt(err: &GameError, settings: &Settings) -> bool {
    let prompted_name = |name: &String| !settings.names.contains(name);
    match err {
        GameError::InvalidConfig(ConfigError::MissingSymbol(name))
        | GameError::InvalidConfig(ConfigError::BlankSymbol(name)) => prompted_name(name),
        GameError::InvalidConfig(ConfigError::DuplicateSymbol(symbol)) => {
            let fixed = settings
                .names
                .iter()
                .filter(|name| settings.symbols.get(*name) == Some(symbol))
                .count();
            fixed < 2
        }
        _ => false,
    }
}

fn prompt_missing(settings: &Settings) -> Result<GameConfig> {
    let theme = ColorfulTheme::default();

    let num_players = match settings.player_count() {
        Some(count) => count,
        None => Input::<usize>::with_theme(&theme)
            .with_prompt(format!("Number of players ({} to {})", MIN_PLAYERS, MAX_PLAYERS))
            .validate_with(|n: &usize| {
                if (MIN_PLAYERS..=MAX_PLAYERS).contains(n) {
                    Ok(())
                } else {
                    Err(format!("enter a number from {} to {}", MIN_PLAYERS, MAX_PLAYERS))
                }
            })
            .interact_text()?,
    };

    let mut names = settings.names.clone();
    while names.len() < num_players {
        let name = Input::<String>::with_theme(&theme)
            .with_prompt(format!("Name for player {}", names.len() + 1))
            .validate_with(|name: &String| {
                if name.trim().is_empty() {
                    Err("name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        names.push(name.trim().to_string());
    }

    let grid_size = match settings.grid_size {
        Some(size) => size,
        None => Input::<usize>::with_theme(&theme)
            .with_prompt(format!("Grid size ({} to {})", MIN_GRID_SIZE, MAX_GRID_SIZE))
            .validate_with(|n: &usize| {
                if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(n) {
                    Ok(())
                } else {
                    Err(format!("enter a number from {} to {}", MIN_GRID_SIZE, MAX_GRID_SIZE))
                }
            })
            .interact_text()?,
    };

    let mut config = GameConfig::new(names, grid_size);
    config.num_players = num_players;
    if !settings.symbols.is_empty() {
        config = config.with_symbols(settings.symbols.clone());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "termtoe", "-p", "2", "-n", "Ann", "-n", "Bob", "-g", "6", "-s", "Ann=X", "--seed", "3",
        ])
        .unwrap();

        let settings = cli.settings().unwrap();
        assert_eq!(settings.players, Some(2));
        assert_eq!(settings.names, vec!["Ann", "Bob"]);
        assert_eq!(settings.grid_size, Some(6));
        assert_eq!(settings.symbols.get("Ann"), Some(&'X'));
        assert_eq!(settings.seed, Some(3));
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!(parse_symbol("Ann=@"), Ok(("Ann".to_string(), '@')));
        assert!(parse_symbol("Ann").is_err());
        assert!(parse_symbol("Ann=xy").is_err());
        assert!(parse_symbol("=x").is_err());
    }

    #[test]
    fn test_bad_symbol_flag_rejected() {
        assert!(Cli::try_parse_from(["termtoe", "--symbol", "Ann"]).is_err());
    }

    #[test]
    fn test_build_engine_without_prompts() {
        let settings = Settings {
            names: vec!["Ann".into(), "Bob".into()],
            grid_size: Some(5),
            ..Default::default()
        };
        let engine = build_engine(&settings, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(engine.players().len(), 2);
        assert_eq!(engine.moves_left(), 25);
    }

    #[test]
    fn test_build_engine_aborts_on_bad_flags() {
        let settings = Settings {
            names: vec!["Ann".into(), "Bob".into()],
            grid_size: Some(26),
            ..Default::default()
        };
        let err = build_engine(&settings, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::InvalidConfig(ConfigError::GridTooLarge(26)))
        );
    }

    #[test]
    fn test_complete_flags_keep_symbols_and_abort() {
        let settings = Settings {
            names: vec!["Ann".into(), "Bob".into()],
            grid_size: Some(7),
            symbols: HashMap::from([("Ann".to_string(), 'X')]),
            ..Default::default()
        };
        let err = build_engine(&settings, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::InvalidConfig(ConfigError::MissingSymbol("Bob".into())))
        );
    }

    #[test]
    fn test_only_prompted_names_are_retried() {
        let settings = Settings {
            players: Some(3),
            names: vec!["Ann".into(), "Bob".into()],
            grid_size: Some(7),
            symbols: HashMap::from([("Ann".to_string(), 'X'), ("Bob".to_string(), 'O')]),
            ..Default::default()
        };
        let missing = |name: &str| {
            GameError::InvalidConfig(ConfigError::MissingSymbol(name.to_string()))
        };

        // a third name typed at the prompt has no symbol yet
        assert!(fixable_by_prompt(&missing("Cid"), &settings));
        assert!(!fixable_by_prompt(&missing("Bob"), &settings));
        assert!(!fixable_by_prompt(
            &GameError::InvalidConfig(ConfigError::GridTooLarge(26)),
            &settings
        ));
    }

    #[test]
    fn test_duplicate_symbol_retry_depends_on_fixed_names() {
        let mut settings = Settings {
            players: Some(3),
            names: vec!["Ann".into()],
            symbols: HashMap::from([("Ann".to_string(), 'X'), ("Bob".to_string(), 'X')]),
            ..Default::default()
        };
        let duplicate = GameError::InvalidConfig(ConfigError::DuplicateSymbol('X'));

        // Bob was typed at a prompt and can be renamed
        assert!(fixable_by_prompt(&duplicate, &settings));

        settings.names.push("Bob".into());
        assert!(!fixable_by_prompt(&duplicate, &settings));
    }
}
