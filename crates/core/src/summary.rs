//! Summary types - the displayed, incrementally maintained score card
//!
//! Serialized shape (per player):
//!
//! ```text
//! {"score": 40, "frames": {"1": {"first": 5, "second": 5, "bonus": 5}, ...}}
//! ```
//!
//! Frame keys are frame numbers; `11` holds the tenth-frame bonus rolls.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{RollSlot, BONUS_FRAME_NUMBER, FRAMES_PER_GAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameSummary {
    pub first: Option<u8>,
    pub second: Option<u8>,
    /// Only the tenth frame ever shows a third ball.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third: Option<u8>,
    /// Pins credited to this frame by later rolls. Absent for the tenth frame
    /// once bonus rolls start, and for the bonus frame itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<u16>,
}

impl FrameSummary {
    /// Untouched frame as it appears before any roll
    pub fn empty() -> Self {
        Self {
            first: None,
            second: None,
            third: None,
            bonus: Some(0),
        }
    }

    pub fn ball(&self, slot: RollSlot) -> Option<u8> {
        match slot {
            RollSlot::First => self.first,
            RollSlot::Second => self.second,
            RollSlot::Third => self.third,
        }
    }

    pub fn set_ball(&mut self, slot: RollSlot, pins: u8) {
        match slot {
            RollSlot::First => self.first = Some(pins),
            RollSlot::Second => self.second = Some(pins),
            RollSlot::Third => self.third = Some(pins),
        }
    }

    /// First slot with no ball yet
    pub fn open_slot(&self) -> Option<RollSlot> {
        let mut slot = Some(RollSlot::First);
        while let Some(s) = slot {
            if self.ball(s).is_none() {
                return Some(s);
            }
            slot = s.next();
        }
        None
    }

    /// Pins knocked down in this frame plus any credited bonus
    pub fn value(&self) -> u32 {
        [self.first, self.second, self.third]
            .iter()
            .flatten()
            .map(|&p| p as u32)
            .sum::<u32>()
            + self.bonus.unwrap_or(0) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub score: u32,
    pub frames: BTreeMap<u8, FrameSummary>,
}

impl Default for PlayerSummary {
    fn default() -> Self {
        Self {
            score: 0,
            frames: (1..=FRAMES_PER_GAME)
                .map(|n| (n, FrameSummary::empty()))
                .collect(),
        }
    }
}

impl PlayerSummary {
    pub fn frame(&self, number: u8) -> Option<&FrameSummary> {
        self.frames.get(&number)
    }

    /// The consolidated tenth-frame bonus rolls, once any have been thrown
    pub fn bonus_frame(&self) -> Option<&FrameSummary> {
        self.frames.get(&BONUS_FRAME_NUMBER)
    }

    /// Sum of every credited bonus field
    pub fn bonus_total(&self) -> u32 {
        self.frames
            .values()
            .filter_map(|f| f.bonus)
            .map(u32::from)
            .sum()
    }
}

/// Per-player summaries in turn order
pub type GameSummary = IndexMap<String, PlayerSummary>;
