//! Frame module - one player's rolls for a single frame
//!
//! A frame is either a regular frame (1..=10) holding up to two rolls capped at
//! ten pins combined, or the synthetic bonus frame appended after a strike or
//! spare in the tenth. Bonus frames have no combined-pins cap and are never
//! strikes or spares themselves.

use crate::summary::FrameSummary;
use crate::types::{RollSlot, PINS_PER_FRAME};

/// Number of rolls a synthetic bonus frame delivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusRolls {
    /// Earned by a spare in the tenth frame
    One,
    /// Earned by a strike in the tenth frame
    Two,
}

impl BonusRolls {
    pub fn count(&self) -> u8 {
        match self {
            BonusRolls::One => 1,
            BonusRolls::Two => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    first: Option<u8>,
    second: Option<u8>,
    bonus_rolls: Option<BonusRolls>,
}

impl Frame {
    /// Create an empty regular frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bonus frame holding `rolls` tenth-frame bonus rolls
    pub fn bonus(rolls: BonusRolls) -> Self {
        Self {
            first: None,
            second: None,
            bonus_rolls: Some(rolls),
        }
    }

    pub fn first(&self) -> Option<u8> {
        self.first
    }

    pub fn second(&self) -> Option<u8> {
        self.second
    }

    pub fn bonus_rolls(&self) -> Option<BonusRolls> {
        self.bonus_rolls
    }

    pub fn is_bonus(&self) -> bool {
        self.bonus_rolls.is_some()
    }

    pub fn record_first(&mut self, pins: u8) {
        self.first = Some(pins);
    }

    pub fn record_second(&mut self, pins: u8) {
        self.second = Some(pins);
    }

    /// Slot the next roll lands in, or `None` once the frame is complete
    pub fn next_slot(&self) -> Option<RollSlot> {
        if self.is_complete() {
            None
        } else if self.first.is_none() {
            Some(RollSlot::First)
        } else {
            Some(RollSlot::Second)
        }
    }

    /// Record `pins` in the next free slot; `None` if the frame is already complete
    pub fn record(&mut self, pins: u8) -> Option<RollSlot> {
        let slot = self.next_slot()?;
        match slot {
            RollSlot::First => self.record_first(pins),
            _ => self.record_second(pins),
        }
        Some(slot)
    }

    pub fn is_awaiting_first_roll(&self) -> bool {
        self.first.is_none()
    }

    /// Sum of the rolls thrown so far (a missing roll counts as zero)
    pub fn total(&self) -> u8 {
        self.first.unwrap_or(0) + self.second.unwrap_or(0)
    }

    /// Pins still standing for the next roll of a regular frame
    ///
    /// Bonus frames always offer a full rack.
    pub fn standing_pins(&self) -> u8 {
        if self.is_bonus() {
            PINS_PER_FRAME
        } else {
            PINS_PER_FRAME - self.first.unwrap_or(0)
        }
    }

    pub fn is_strike(&self) -> bool {
        !self.is_bonus() && self.first == Some(PINS_PER_FRAME)
    }

    pub fn is_spare(&self) -> bool {
        !self.is_bonus()
            && !self.is_strike()
            && self.second.is_some()
            && self.total() == PINS_PER_FRAME
    }

    /// Whether the frame accepts no further rolls
    pub fn is_complete(&self) -> bool {
        match self.bonus_rolls {
            Some(BonusRolls::Two) => self.second.is_some(),
            Some(BonusRolls::One) => self.first.is_some(),
            None => self.is_strike() || (self.first.is_some() && self.second.is_some()),
        }
    }

    /// Displayed state of the frame; the bonus is filled in later by the attributor
    pub fn summary_dump(&self) -> FrameSummary {
        FrameSummary {
            first: self.first,
            second: self.second,
            third: None,
            bonus: Some(0),
        }
    }
}
