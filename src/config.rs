use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

use crate::core::engine::GameConfig;

/// Game settings gathered from a TOML file and the command line.
/// Anything left unset is asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub players: Option<usize>,
    pub names: Vec<String>,
    pub grid_size: Option<usize>,
    pub symbols: HashMap<String, char>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Layer `overrides` on top of `self`; set values in `overrides` win
    pub fn merge(mut self, overrides: Settings) -> Settings {
        if overrides.players.is_some() {
            self.players = overrides.players;
        }
        if !overrides.names.is_empty() {
            self.names = overrides.names;
        }
        if overrides.grid_size.is_some() {
            self.grid_size = overrides.grid_size;
        }
        self.symbols.extend(overrides.symbols);
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self
    }

    /// Player count: explicit, or implied by the names given
    pub fn player_count(&self) -> Option<usize> {
        self.players
            .or_else(|| (!self.names.is_empty()).then_some(self.names.len()))
    }

    /// Whether some value still has to be asked for
    pub fn is_incomplete(&self) -> bool {
        match (self.player_count(), self.grid_size) {
            (Some(count), Some(_)) => self.names.len() < count,
            _ => true,
        }
    }

    /// Build a game config when nothing is missing
    pub fn to_config(&self) -> Option<GameConfig> {
        if self.is_incomplete() {
            return None;
        }
        let mut config = GameConfig::new(self.names.clone(), self.grid_size?);
        config.num_players = self.player_count()?;
        if !self.symbols.is_empty() {
            config = config.with_symbols(self.symbols.clone());
        }
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let settings = Settings::from_toml(
            r#"
            players = 2
            names = ["Ann", "Bob"]
            grid_size = 7
            seed = 11

            [symbols]
            Ann = "X"
            Bob = "O"
            "#,
        )
        .unwrap();

        assert_eq!(settings.players, Some(2));
        assert_eq!(settings.names, vec!["Ann", "Bob"]);
        assert_eq!(settings.grid_size, Some(7));
        assert_eq!(settings.symbols.get("Bob"), Some(&'O'));
        assert_eq!(settings.seed, Some(11));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Settings::from_toml("board = 5").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let file = Settings {
            players: Some(3),
            names: vec!["A".into(), "B".into(), "C".into()],
            grid_size: Some(9),
            ..Default::default()
        };
        let cli = Settings {
            grid_size: Some(5),
            ..Default::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.grid_size, Some(5));
        assert_eq!(merged.players, Some(3));
        assert_eq!(merged.names.len(), 3);
    }

    #[test]
    fn test_player_count_from_names() {
        let settings = Settings {
            names: vec!["A".into(), "B".into()],
            grid_size: Some(5),
            ..Default::default()
        };
        assert_eq!(settings.player_count(), Some(2));
        assert!(!settings.is_incomplete());

        let config = settings.to_config().unwrap();
        assert_eq!(config.num_players, 2);
        assert_eq!(config.player_symbols, None);
    }

    #[test]
    fn test_missing_names_is_incomplete() {
        let settings = Settings {
            players: Some(3),
            names: vec!["A".into()],
            grid_size: Some(5),
            ..Default::default()
        };
        assert!(settings.is_incomplete());
        assert_eq!(settings.to_config(), None);
    }

    #[test]
    fn test_extra_names_left_for_validation() {
        let settings = Settings {
            players: Some(2),
            names: vec!["A".into(), "B".into(), "C".into()],
            grid_size: Some(5),
            ..Default::default()
        };
        let config = settings.to_config().unwrap();
        assert_eq!(config.num_players, 2);
        assert_eq!(config.player_names.len(), 3);
    }
}
