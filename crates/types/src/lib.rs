//! Core types module - shared constants and small value types
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! in any context (scoring core, session bookkeeping, terminal rendering).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS_PER_FRAME` | 10 | Pins standing at the start of a regular frame |
//! | `FRAMES_PER_GAME` | 10 | Regular frames per player |
//! | `BONUS_FRAME_NUMBER` | 11 | Summary key for the consolidated tenth-frame bonus rolls |
//! | `MAX_SHEET_FRAMES` | 11 | Regular frames plus the one synthetic bonus frame |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{OverflowPolicy, RollSlot, FRAMES_PER_GAME, PINS_PER_FRAME};
//!
//! assert_eq!(PINS_PER_FRAME, 10);
//! assert_eq!(FRAMES_PER_GAME, 10);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(OverflowPolicy::from_str("Ignore"), Some(OverflowPolicy::Ignore));
//! assert_eq!(RollSlot::First.next(), Some(RollSlot::Second));
//! ```

/// Pins standing at the start of every regular frame
pub const PINS_PER_FRAME: u8 = 10;

/// Regular frames each player bowls
pub const FRAMES_PER_GAME: u8 = 10;

/// Summary key for rolls earned by a strike or spare in the tenth frame
pub const BONUS_FRAME_NUMBER: u8 = 11;

/// Upper bound on frames in one player's sheet (ten regular + one bonus frame)
pub const MAX_SHEET_FRAMES: usize = FRAMES_PER_GAME as usize + 1;

/// Player name used when a game is started without any registered players
pub const DEFAULT_PLAYER: &str = "guest";

/// Highest score a single player can reach (twelve strikes)
pub const PERFECT_SCORE: u32 = 300;


/// Ball position within a displayed frame
///
/// Regular frames only ever use `First` and `Second`. The tenth frame can show
/// a `Third` ball once bonus rolls have been earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollSlot {
    First,
    Second,
    Third,
}

impl RollSlot {
    /// Following slot, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::RollSlot;
    ///
    /// assert_eq!(RollSlot::First.next(), Some(RollSlot::Second));
    /// assert_eq!(RollSlot::Third.next(), None);
    /// ```
    pub fn next(&self) -> Option<Self> {
        match self {
            RollSlot::First => Some(RollSlot::Second),
            RollSlot::Second => Some(RollSlot::Third),
            RollSlot::Third => None,
        }
    }

    /// Convert to lowercase string (matches the summary field names)
    pub fn as_str(&self) -> &'static str {
        match self {
            RollSlot::First => "first",
            RollSlot::Second => "second",
            RollSlot::Third => "third",
        }
    }
}

/// What to do with a roll submitted after the game has ended
///
/// - **Fail**: reject the roll with a game-over error (default)
/// - **Ignore**: accept and discard the roll, leaving the game untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    #[default]
    Fail,
    Ignore,
}

impl OverflowPolicy {
    /// Parse policy from string (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::OverflowPolicy;
    ///
    /// assert_eq!(OverflowPolicy::from_str("fail"), Some(OverflowPolicy::Fail));
    /// assert_eq!(OverflowPolicy::from_str("Ignore"), Some(OverflowPolicy::Ignore));
    /// assert_eq!(OverflowPolicy::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Some(OverflowPolicy::Fail),
            "ignore" => Some(OverflowPolicy::Ignore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Fail => "fail",
            OverflowPolicy::Ignore => "ignore",
        }
    }
}
