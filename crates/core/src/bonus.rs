//! Bonus attribution - incremental strike/spare credit for one player
//!
//! Every roll patches the displayed summary in place: the roll's own frame is
//! rewritten, its pins join the running score, and the same pins are credited
//! to the earlier frames still collecting bonus balls:
//!
//! - previous frame a strike: credited
//! - previous frame a spare: credited on the first roll of the current frame only
//! - previous two frames both strikes: the older one is credited too, again
//!   only on the first roll of the current frame
//!
//! Rolls in the synthetic bonus frame are folded into the tenth frame's display
//! and mirrored under key 11. The tenth frame never carries a bonus field of its
//! own; its bonus balls count straight into the score.

use tracing::debug;

use crate::score_sheet::ScoreSheet;
use crate::summary::{FrameSummary, PlayerSummary};
use crate::types::{RollSlot, BONUS_FRAME_NUMBER, FRAMES_PER_GAME};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BonusAttributor {
    summary: PlayerSummary,
}

impl BonusAttributor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> &PlayerSummary {
        &self.summary
    }

    pub fn score(&self) -> u32 {
        self.summary.score
    }

    /// Score a roll that has just been recorded into `sheet`'s current frame.
    pub fn record_roll(&mut self, pins: u8, sheet: &ScoreSheet) {
        let current = sheet.current();
        let number = sheet.len();

        if current.is_bonus() {
            self.record_bonus_roll(pins, sheet);
            return;
        }

        self.summary
            .frames
            .insert(number as u8, current.summary_dump());
        self.summary.score += u32::from(pins);

        let Some(previous) = number.checked_sub(1).and_then(|n| sheet.frame(n)) else {
            return;
        };
        // The roll just recorded is the current frame's first ball.
        let opening_ball = current.second().is_none();

        if previous.is_strike() || (previous.is_spare() && opening_ball) {
            self.credit(number - 1, pins);
        }

        let older_strike =
            number > 2 && sheet.frame(number - 2).is_some_and(|f| f.is_strike());
        if previous.is_strike() && opening_ball && older_strike {
            self.credit(number - 2, pins);
        }
    }

    fn record_bonus_roll(&mut self, pins: u8, sheet: &ScoreSheet) {
        let tenth_number = FRAMES_PER_GAME as usize;
        let bonus_frame = sheet.current();

        self.summary.score += u32::from(pins);
        self.summary.frames.insert(
            BONUS_FRAME_NUMBER,
            FrameSummary {
                bonus: None,
                ..bonus_frame.summary_dump()
            },
        );

        let display = self
            .summary
            .frames
            .entry(FRAMES_PER_GAME)
            .or_insert_with(FrameSummary::empty);
        display.bonus = None;

        // After a strike the first bonus ball fills `second`; otherwise it is the third ball.
        let slot = display.open_slot().unwrap_or(RollSlot::Third);
        display.set_ball(slot, pins);

        // First ball after a tenth-frame strike also finishes a ninth-frame strike.
        let ninth_strike = sheet
            .frame(tenth_number - 1)
            .is_some_and(|f| f.is_strike());
        if slot == RollSlot::Second && ninth_strike {
            self.credit(tenth_number - 1, pins);
        }

        debug!(
            pins,
            slot = slot.as_str(),
            score = self.summary.score,
            "bonus roll attributed to tenth frame"
        );
    }

    fn credit(&mut self, number: usize, pins: u8) {
        if number == 0 {
            return;
        }
        let frame = self
            .summary
            .frames
            .entry(number as u8)
            .or_insert_with(FrameSummary::empty);
        *frame.bonus.get_or_insert(0) += u16::from(pins);
        self.summary.score += u32::from(pins);
        debug!(frame = number, pins, "bonus credited");
    }
}
