use thiserror::Error;

/// Errors surfaced by [`crate::GameEngine`].
///
/// Every variant is raised before any state is touched, so a failed call
/// leaves the game exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Pins out of range, or more than the pins left standing in a regular frame.
    #[error("more than 10 pins rolled for frame")]
    IllegalRoll { pins: i32, standing: u8 },

    #[error("game is over. please start a new game.")]
    GameOver,

    #[error("player {0:?} is already in the game")]
    DuplicatePlayer(String),

    #[error("player name must not be empty")]
    EmptyPlayerName,
}
