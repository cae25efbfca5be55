use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::ConfigError;

/// Candidate symbols handed out to players
pub const SYMBOL_POOL: [char; 4] = ['#', '$', '%', '&'];

/// Shuffle the pool and take one symbol per player, in player order
pub fn random_symbols<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<char>, ConfigError> {
    if count > SYMBOL_POOL.len() {
        return Err(ConfigError::SymbolPoolExhausted {
            requested: count,
            available: SYMBOL_POOL.len(),
        });
    }

    let mut pool = SYMBOL_POOL;
    pool.shuffle(rng);
    Ok(pool[..count].to_vec())
}

/// Resolve an explicit name -> symbol mapping into one symbol per player
pub fn explicit_symbols(
    names: &[String],
    mapping: &HashMap<String, char>,
) -> Result<Vec<char>, ConfigError> {
    let mut seen = HashSet::new();
    let mut symbols = Vec::with_capacity(names.len());

    for name in names {
        let symbol = *mapping
            .get(name)
            .ok_or_else(|| ConfigError::MissingSymbol(name.clone()))?;
        if symbol.is_whitespace() {
            return Err(ConfigError::BlankSymbol(name.clone()));
        }
        if !seen.insert(symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        symbols.push(symbol);
    }

    Ok(symbols)
}
