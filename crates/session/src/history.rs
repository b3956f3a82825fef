//! In-memory archive of finished or saved games.

use serde::{Deserialize, Serialize};

use crate::core::{GameEngine, GameSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Players in turn order.
    pub players: Vec<String>,
    /// False when the game was archived before its last roll.
    pub completed: bool,
    pub summary: GameSummary,
}

impl From<&GameEngine> for GameRecord {
    fn from(game: &GameEngine) -> Self {
        Self {
            players: game.players().map(str::to_string).collect(),
            completed: game.is_over(),
            summary: game.summary(),
        }
    }
}

impl GameRecord {
    /// Player with the highest score (first in turn order on a tie)
    pub fn leader(&self) -> Option<(&str, u32)> {
        self.summary
            .iter()
            .map(|(name, s)| (name.as_str(), s.score))
            .fold(None, |best, (name, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((name, score)),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<GameRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&GameRecord> {
        self.records.last()
    }

    /// Pretty JSON for persistence collaborators
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
