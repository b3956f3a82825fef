//! Game configuration (players and end-of-game roll policy)

use crate::types::{OverflowPolicy, DEFAULT_PLAYER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Players in turn order; empty means a single guest.
    pub players: Vec<String>,
    pub overflow: OverflowPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            overflow: OverflowPolicy::Fail,
        }
    }
}

impl GameConfig {
    pub fn new(players: Vec<String>) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Create from environment variables
    ///
    /// - `TENPIN_PLAYERS`: comma-separated player names
    /// - `TENPIN_OVERFLOW`: `fail` or `ignore`
    pub fn from_env() -> Self {
        use std::env;

        let players = env::var("TENPIN_PLAYERS")
            .map(|s| parse_player_list(&s))
            .unwrap_or_default();

        let overflow = env::var("TENPIN_OVERFLOW")
            .ok()
            .and_then(|s| OverflowPolicy::from_str(&s))
            .unwrap_or_default();

        Self::new(players).with_overflow(overflow)
    }

    /// Player list with the guest default applied
    pub fn resolved_players(&self) -> Vec<String> {
        if self.players.is_empty() {
            vec![DEFAULT_PLAYER.to_string()]
        } else {
            self.players.clone()
        }
    }
}

/// Split a comma-separated list, trimming names and dropping blanks
pub fn parse_player_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
