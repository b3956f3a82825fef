//! Core scoring module - pure, deterministic, and testable
//!
//! This module contains the ten-pin rules: frame state, roll legality, bonus
//! attribution, turn rotation and end-of-game detection. It has **no
//! dependencies** on terminals, files or networking, making it:
//!
//! - **Deterministic**: the same rolls always produce the same summary
//! - **Incremental**: the summary is patched on every roll, never replayed
//! - **Testable**: every rule is covered by unit and property tests
//!
//! # Module Structure
//!
//! - [`frame`]: one frame's rolls and its strike/spare/complete predicates
//! - [`score_sheet`]: a player's ordered frames plus a full-replay scorer
//! - [`bonus`]: incremental strike/spare credit into the displayed summary
//! - [`game`]: roll validation, frame advancement and turn rotation
//! - [`summary`]: serializable score card types
//! - [`config`]: players and end-of-game roll policy
//!
//! # Example
//!
//! ```
//! use tenpin_core::GameEngine;
//!
//! let mut game = GameEngine::new(["ann"]).unwrap();
//! game.roll(10).unwrap(); // strike
//! game.roll(1).unwrap();
//! game.roll(2).unwrap();
//!
//! assert_eq!(game.score()["ann"], 16);
//! assert_eq!(game.player_summary("ann").unwrap().frame(1).unwrap().bonus, Some(3));
//! ```

pub mod bonus;
pub mod config;
pub mod error;
pub mod frame;
pub mod game;
pub mod score_sheet;
pub mod summary;

#[cfg(test)]
mod tests_props;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use bonus::BonusAttributor;
pub use config::GameConfig;
pub use error::GameError;
pub use frame::{BonusRolls, Frame};
pub use game::{GameEngine, TurnPhase};
pub use score_sheet::ScoreSheet;
pub use summary::{FrameSummary, GameSummary, PlayerSummary};
