//! Score sheet - one player's ordered frames
//!
//! Frames are numbered from 1. A sheet holds at most ten regular frames plus a
//! single synthetic bonus frame, so it lives in a fixed-capacity `ArrayVec`.

use arrayvec::ArrayVec;

use crate::error::GameError;
use crate::frame::{BonusRolls, Frame};
use crate::types::{RollSlot, FRAMES_PER_GAME, MAX_SHEET_FRAMES, PINS_PER_FRAME};

/// A sheet always has an open frame; earlier frames are closed.
///
/// At most ten frames are ever closed (the tenth closes when its bonus frame opens).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSheet {
    closed: ArrayVec<Frame, { MAX_SHEET_FRAMES - 1 }>,
    open: Frame,
}

impl Default for ScoreSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSheet {
    /// New sheet with frame 1 open
    pub fn new() -> Self {
        Self {
            closed: ArrayVec::new(),
            open: Frame::new(),
        }
    }

    /// Number of frames started so far (including a bonus frame)
    pub fn len(&self) -> usize {
        self.closed.len() + 1
    }

    /// Frames in order, the open one last
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.closed.iter().chain(std::iter::once(&self.open))
    }

    /// Frame by 1-based number
    pub fn frame(&self, number: usize) -> Option<&Frame> {
        match number.checked_sub(1)? {
            i if i < self.closed.len() => self.closed.get(i),
            i if i == self.closed.len() => Some(&self.open),
            _ => None,
        }
    }

    /// The frame currently receiving rolls
    pub fn current(&self) -> &Frame {
        &self.open
    }

    /// Close the open frame and start `frame`; returns false if the sheet is full
    pub fn push(&mut self, frame: Frame) -> bool {
        if self.closed.try_push(self.open).is_err() {
            return false;
        }
        self.open = frame;
        true
    }

    /// Record `pins` into the open frame and return the slot it landed in.
    ///
    /// Nothing changes when the roll does not fit.
    pub fn record_roll(&mut self, pins: u8) -> Result<RollSlot, GameError> {
        let illegal = GameError::IllegalRoll {
            pins: i32::from(pins),
            standing: self.open.standing_pins(),
        };
        if !roll_fits(&self.open, pins) {
            return Err(illegal);
        }
        self.open.record(pins).ok_or(illegal)
    }

    /// Whether all ten regular frames have been started
    pub fn on_last_frame(&self) -> bool {
        self.len() >= FRAMES_PER_GAME as usize
    }

    /// Bonus rolls owed by a completed tenth frame, if none have been granted yet
    pub fn owed_bonus_rolls(&self) -> Option<BonusRolls> {
        if self.len() != FRAMES_PER_GAME as usize {
            return None;
        }
        if self.open.is_strike() {
            Some(BonusRolls::Two)
        } else if self.open.is_spare() {
            Some(BonusRolls::One)
        } else {
            None
        }
    }

    /// Whether this player has nothing left to roll
    pub fn is_finished(&self) -> bool {
        self.on_last_frame() && self.owed_bonus_rolls().is_none() && self.open.is_complete()
    }

    /// Every roll in throw order, bonus rolls included
    pub fn rolls(&self) -> impl Iterator<Item = u8> + '_ {
        self.frames().flat_map(|f| [f.first(), f.second()]).flatten()
    }

    /// Score computed from scratch over the rolls thrown so far.
    ///
    /// A strike or spare only collects the follow-up rolls that exist yet, so
    /// mid-game this agrees with the running total kept by the attributor.
    pub fn replay_score(&self) -> u32 {
        let rolls: Vec<u32> = self.rolls().map(u32::from).collect();
        let mut score = 0;
        let mut i = 0;

        for frame in self.frames().filter(|f| !f.is_bonus()) {
            if frame.is_awaiting_first_roll() {
                break;
            }
            let thrown = if frame.second().is_some() { 2 } else { 1 };
            let carried = if frame.is_strike() {
                2
            } else if frame.is_spare() {
                1
            } else {
                0
            };
            score += rolls[i..].iter().take(thrown + carried).sum::<u32>();
            i += thrown;
        }

        score
    }

    /// Total pins knocked down in regular frames, ignoring bonuses
    pub fn pin_total(&self) -> u32 {
        self.frames()
            .filter(|f| !f.is_bonus())
            .map(|f| u32::from(f.total()))
            .sum()
    }
}

/// Whether `pins` can legally be added to `frame`
pub fn roll_fits(frame: &Frame, pins: u8) -> bool {
    if pins > PINS_PER_FRAME {
        return false;
    }
    frame.is_bonus() || pins <= frame.standing_pins()
}
