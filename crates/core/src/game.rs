//! Game engine - roll legality, frame advancement, and turn rotation
//!
//! This module ties together the per-player score sheets and bonus attributors.
//! Turns rotate round-robin after every completed frame, except that bonus
//! rolls earned in the tenth frame are taken immediately by the same player.
//! The game ends once the last player's final frame is complete.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::bonus::BonusAttributor;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::frame::Frame;
use crate::score_sheet::ScoreSheet;
use crate::summary::{GameSummary, PlayerSummary};
use crate::types::{OverflowPolicy, DEFAULT_PLAYER};

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// Current player is bowling one of their ten regular frames.
    Regular,
    /// Current player is taking tenth-frame bonus rolls.
    Bonus,
    GameOver,
}

/// One player's lane: frames plus the incremental score card.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Lane {
    name: String,
    sheet: ScoreSheet,
    attributor: BonusAttributor,
}

impl Lane {
    fn new(name: String) -> Self {
        Self {
            name,
            sheet: ScoreSheet::new(),
            attributor: BonusAttributor::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    lanes: Vec<Lane>,
    /// Index of the player whose turn it is.
    cursor: usize,
    phase: TurnPhase,
    overflow: OverflowPolicy,
}

impl Default for GameEngine {
    /// Single-player game for the guest
    fn default() -> Self {
        Self {
            lanes: vec![Lane::new(DEFAULT_PLAYER.to_string())],
            cursor: 0,
            phase: TurnPhase::Regular,
            overflow: OverflowPolicy::Fail,
        }
    }
}

impl GameEngine {
    /// Create a game for `players` in turn order (a single guest if empty)
    pub fn new<I, S>(players: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(GameConfig::new(
            players.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        let players = config.resolved_players();

        let mut lanes: Vec<Lane> = Vec::with_capacity(players.len());
        for name in players {
            if name.trim().is_empty() {
                return Err(GameError::EmptyPlayerName);
            }
            if lanes.iter().any(|l| l.name == name) {
                return Err(GameError::DuplicatePlayer(name));
            }
            lanes.push(Lane::new(name));
        }

        info!(
            players = lanes.len(),
            overflow = config.overflow.as_str(),
            "new game"
        );

        Ok(Self {
            lanes,
            cursor: 0,
            phase: TurnPhase::Regular,
            overflow: config.overflow,
        })
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Player names in turn order
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.lanes.iter().map(|l| l.name.as_str())
    }

    pub fn current_player(&self) -> &str {
        &self.lanes[self.cursor].name
    }

    /// Number of the frame the current player is on (11 while taking bonus rolls)
    pub fn frame_number(&self) -> usize {
        self.lanes[self.cursor].sheet.len()
    }

    /// Pins available to the next roll
    pub fn standing_pins(&self) -> u8 {
        self.lanes[self.cursor].sheet.current().standing_pins()
    }

    pub fn sheet(&self, player: &str) -> Option<&ScoreSheet> {
        self.lane(player).map(|l| &l.sheet)
    }

    pub fn player_summary(&self, player: &str) -> Option<&PlayerSummary> {
        self.lane(player).map(|l| l.attributor.summary())
    }

    /// Running score per player, in turn order
    pub fn score(&self) -> IndexMap<String, u32> {
        self.lanes
            .iter()
            .map(|l| (l.name.clone(), l.attributor.score()))
            .collect()
    }

    pub fn summary(&self) -> GameSummary {
        self.lanes
            .iter()
            .map(|l| (l.name.clone(), l.attributor.summary().clone()))
            .collect()
    }

    /// Record one roll for the current player.
    ///
    /// All checks run before any state changes; on error the game is untouched.
    pub fn roll(&mut self, pins: u8) -> Result<(), GameError> {
        if self.is_over() {
            return self.roll_after_game_over(i32::from(pins));
        }

        let lane = &mut self.lanes[self.cursor];
        let slot = lane.sheet.record_roll(pins)?;
        let complete = lane.sheet.current().is_complete();
        lane.attributor.record_roll(pins, &lane.sheet);

        debug!(
            player = %lane.name,
            frame = lane.sheet.len(),
            slot = slot.as_str(),
            pins,
            score = lane.attributor.score(),
            "roll recorded"
        );

        if complete {
            self.next_frame();
        }
        Ok(())
    }

    /// Record a roll given as unchecked input such as a typed number.
    ///
    /// Game over is reported first, exactly as [`GameEngine::roll`] does; any
    /// other value outside `0..=10` is an illegal roll.
    pub fn roll_input(&mut self, pins: i32) -> Result<(), GameError> {
        if self.is_over() {
            return self.roll_after_game_over(pins);
        }
        match u8::try_from(pins) {
            Ok(pins) => self.roll(pins),
            Err(_) => Err(GameError::IllegalRoll {
                pins,
                standing: self.standing_pins(),
            }),
        }
    }

    fn roll_after_game_over(&self, pins: i32) -> Result<(), GameError> {
        match self.overflow {
            OverflowPolicy::Fail => Err(GameError::GameOver),
            OverflowPolicy::Ignore => {
                warn!(pins, "roll after game over ignored");
                Ok(())
            }
        }
    }

    /// Move on after the current frame completes.
    fn next_frame(&mut self) {
        let sheet = &mut self.lanes[self.cursor].sheet;

        if !sheet.on_last_frame() {
            self.rotate();
            return;
        }

        if let Some(owed) = sheet.owed_bonus_rolls() {
            sheet.push(Frame::bonus(owed));
            self.phase = TurnPhase::Bonus;
            debug!(
                player = %self.lanes[self.cursor].name,
                rolls = owed.count(),
                "bonus rolls granted"
            );
            return;
        }

        if self.last_player_finished() {
            self.phase = TurnPhase::GameOver;
            info!(scores = ?self.score(), "game over");
            return;
        }

        self.rotate();
    }

    /// Hand the turn to the next player and open their next frame.
    fn rotate(&mut self) {
        self.cursor = (self.cursor + 1) % self.lanes.len();
        self.phase = TurnPhase::Regular;

        let lane = &mut self.lanes[self.cursor];
        if lane.sheet.current().is_complete() && !lane.sheet.is_finished() {
            lane.sheet.push(Frame::new());
        }
        debug!(player = %lane.name, frame = lane.sheet.len(), "turn started");
    }

    /// The last player has started all ten frames and their final frame is done.
    fn last_player_finished(&self) -> bool {
        self.lanes
            .last()
            .is_some_and(|l| l.sheet.on_last_frame() && l.sheet.is_finished())
    }

    fn lane(&self, player: &str) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.name == player)
    }
}
