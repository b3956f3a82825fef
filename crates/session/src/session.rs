//! Session: registry + active game + history.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::info;

use crate::core::{GameConfig, GameEngine, GameError, GameSummary};
use crate::history::{GameRecord, History};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("player {0:?} is already registered")]
    DuplicatePlayer(String),

    #[error("player {0:?} is not registered")]
    UnknownPlayer(String),

    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("no game in progress. start a game first.")]
    NoActiveGame,

    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: GameConfig,
    players: Vec<String>,
    active: Option<GameEngine>,
    history: History,
}

impl Session {
    /// Create a session; `config.players` seeds the registry.
    pub fn new(config: GameConfig) -> Self {
        let players = config.players.clone();
        Self {
            config,
            players,
            active: None,
            history: History::new(),
        }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }
        if self.players.iter().any(|p| p == name) {
            return Err(SessionError::DuplicatePlayer(name.to_string()));
        }
        self.players.push(name.to_string());
        info!(player = name, "player registered");
        Ok(())
    }

    /// Remove a player from the registry; the active game is unaffected.
    pub fn remove_player(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        let idx = self
            .players
            .iter()
            .position(|p| p == name)
            .ok_or_else(|| SessionError::UnknownPlayer(name.to_string()))?;
        self.players.remove(idx);
        info!(player = name, "player removed");
        Ok(())
    }

    /// Start a new game over the registered players (a guest if none).
    ///
    /// A game already in progress is archived first.
    pub fn start_game(&mut self) -> Result<&GameEngine, SessionError> {
        let config = GameConfig {
            players: self.players.clone(),
            overflow: self.config.overflow,
        };
        let game = GameEngine::with_config(config)?;

        if let Some(previous) = self.active.take() {
            self.archive(&previous);
        }
        Ok(self.active.insert(game))
    }

    /// Drop the active game, archiving it first when `save` is set.
    pub fn cancel_game(&mut self, save: bool) -> Result<(), SessionError> {
        let game = self.active.take().ok_or(SessionError::NoActiveGame)?;
        if save {
            self.archive(&game);
        } else {
            info!("game discarded");
        }
        Ok(())
    }

    pub fn active_game(&self) -> Option<&GameEngine> {
        self.active.as_ref()
    }

    /// Roll for the current player; out-of-range pins are rejected by the game.
    pub fn roll(&mut self, pins: i32) -> Result<(), SessionError> {
        let game = self.active.as_mut().ok_or(SessionError::NoActiveGame)?;
        game.roll_input(pins)?;
        Ok(())
    }

    pub fn current_player(&self) -> Result<&str, SessionError> {
        Ok(self.game()?.current_player())
    }

    pub fn score(&self) -> Result<IndexMap<String, u32>, SessionError> {
        Ok(self.game()?.score())
    }

    pub fn summary(&self) -> Result<GameSummary, SessionError> {
        Ok(self.game()?.summary())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_json(&self) -> serde_json::Result<String> {
        self.history.to_json()
    }

    fn game(&self) -> Result<&GameEngine, SessionError> {
        self.active.as_ref().ok_or(SessionError::NoActiveGame)
    }

    fn archive(&mut self, game: &GameEngine) {
        let record = GameRecord::from(game);
        info!(
            completed = record.completed,
            games = self.history.len() + 1,
            "game archived"
        );
        self.history.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OverflowPolicy;

    #[test]
    fn test_registry_add_remove() {
        let mut s = Session::default();
        s.add_player("ann").unwrap();
        s.add_player(" bob ").unwrap();
        assert_eq!(s.players(), ["ann".to_string(), "bob".to_string()]);

        assert_eq!(
            s.add_player("ann"),
            Err(SessionError::DuplicatePlayer("ann".to_string()))
        );
        assert_eq!(s.add_player("  "), Err(SessionError::EmptyPlayerName));

        s.remove_player("ann").unwrap();
        assert_eq!(s.players(), ["bob".to_string()]);
        assert_eq!(
            s.remove_player("ann"),
            Err(SessionError::UnknownPlayer("ann".to_string()))
        );
    }

    #[test]
    fn test_calls_without_game_fail() {
        let mut s = Session::default();
        assert_eq!(s.roll(3), Err(SessionError::NoActiveGame));
        assert_eq!(s.current_player(), Err(SessionError::NoActiveGame));
        assert_eq!(s.cancel_game(true), Err(SessionError::NoActiveGame));
    }

    #[test]
    fn test_start_without_players_uses_guest() {
        let mut s = Session::default();
        s.start_game().unwrap();
        assert_eq!(s.current_player().unwrap(), "guest");
    }

    #[test]
    fn test_restart_archives_previous_game() {
        let mut s = Session::default();
        s.add_player("ann").unwrap();
        s.start_game().unwrap();
        s.roll(4).unwrap();
        s.start_game().unwrap();

        assert_eq!(s.history().len(), 1);
        let record = s.history().last().unwrap();
        assert!(!record.completed);
        assert_eq!(record.summary["ann"].score, 4);
        assert_eq!(s.score().unwrap()["ann"], 0);
    }

    #[test]
    fn test_cancel_with_and_without_save() {
        let mut s = Session::default();
        s.start_game().unwrap();
        s.cancel_game(false).unwrap();
        assert!(s.history().is_empty());
        assert!(s.active_game().is_none());

        s.start_game().unwrap();
        s.cancel_game(true).unwrap();
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_game_errors_pass_through() {
        let mut s = Session::default();
        s.start_game().unwrap();
        assert!(matches!(
            s.roll(11),
            Err(SessionError::Game(GameError::IllegalRoll { .. }))
        ));
    }

    #[test]
    fn test_default_config_does_not_register_guest() {
        let mut s = Session::new(GameConfig::default());
        s.add_player("ann").unwrap();
        s.start_game().unwrap();
        let score = s.score().unwrap();
        assert_eq!(score.keys().map(String::as_str).collect::<Vec<_>>(), ["ann"]);
    }

    #[test]
    fn test_negative_roll_is_illegal() {
        let mut s = Session::default();
        s.start_game().unwrap();
        assert!(matches!(
            s.roll(-1),
            Err(SessionError::Game(GameError::IllegalRoll { pins: -1, .. }))
        ));
    }

    #[test]
    fn test_overflow_policy_carries_into_games() {
        let config = GameConfig::default().with_overflow(OverflowPolicy::Ignore);
        let mut s = Session::new(config);
        assert!(s.players().is_empty());
        s.start_game().unwrap();
        for _ in 0..25 {
            s.roll(0).unwrap();
        }
        assert_eq!(s.score().unwrap()["guest"], 0);
    }
}
