//! ScorecardView: maps a `core::GameSummary` into printable lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{FrameSummary, GameSummary, PlayerSummary};
use crate::types::{FRAMES_PER_GAME, PINS_PER_FRAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    /// Ball marks for one player; `current` when it is their turn.
    Marks { current: bool },
    /// Cumulative score under each frame.
    Totals,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardLine {
    pub kind: LineKind,
    pub text: String,
}

/// Scorecard layout.
pub struct ScorecardView {
    /// Width of the player-name column.
    name_w: usize,
    /// Width of a regular frame cell.
    frame_w: usize,
}

impl Default for ScorecardView {
    fn default() -> Self {
        Self {
            name_w: 10,
            frame_w: 3,
        }
    }
}

impl ScorecardView {
    pub fn new(name_w: usize, frame_w: usize) -> Self {
        // Two balls need at least two columns.
        Self {
            name_w,
            frame_w: frame_w.max(2),
        }
    }

    fn tenth_w(&self) -> usize {
        self.frame_w + 2
    }

    /// Render a header plus two lines (marks, running totals) per player.
    pub fn render(&self, summary: &GameSummary, current: Option<&str>) -> Vec<ScorecardLine> {
        let mut lines = Vec::with_capacity(1 + summary.len() * 2);
        lines.push(ScorecardLine {
            kind: LineKind::Header,
            text: self.header(),
        });

        for (name, player) in summary {
            let is_current = current == Some(name.as_str());
            let prefix = if is_current { '>' } else { ' ' };
            let label: String = name.chars().take(self.name_w).collect();

            let mut marks = format!("{}{:<w$}", prefix, label, w = self.name_w);
            let mut totals = format!(" {:<w$}", "", w = self.name_w);

            let running = running_totals(player);
            for n in 1..=FRAMES_PER_GAME {
                let w = self.cell_w(n);
                let frame = player.frame(n).copied().unwrap_or_else(FrameSummary::empty);
                marks.push_str(&format!("|{:<w$}", frame_marks(&frame), w = w));
                let total = running[n as usize - 1]
                    .map(|t| t.to_string())
                    .unwrap_or_default();
                totals.push_str(&format!("|{:>w$}", total, w = w));
            }
            marks.push_str(&format!("| {:>3}", player.score));
            totals.push('|');

            lines.push(ScorecardLine {
                kind: LineKind::Marks {
                    current: is_current,
                },
                text: marks,
            });
            lines.push(ScorecardLine {
                kind: LineKind::Totals,
                text: totals,
            });
        }

        lines
    }

    fn header(&self) -> String {
        let mut s = format!(" {:<w$}", "player", w = self.name_w);
        for n in 1..=FRAMES_PER_GAME {
            s.push_str(&format!("|{:^w$}", n, w = self.cell_w(n)));
        }
        s.push_str("| total");
        s
    }

    fn cell_w(&self, n: u8) -> usize {
        if n == FRAMES_PER_GAME {
            self.tenth_w()
        } else {
            self.frame_w
        }
    }
}

/// Standard marks for a displayed frame (`X`, `/`, `-`, digits).
///
/// The tenth frame may show three balls; the rack resets after a strike or spare.
pub fn frame_marks(frame: &FrameSummary) -> String {
    let mut out = String::new();
    // Pins from the first ball on the current rack, if one has been thrown.
    let mut rack_first: Option<u8> = None;

    for pins in [frame.first, frame.second, frame.third].into_iter().flatten() {
        match rack_first {
            Some(prev) if prev + pins == PINS_PER_FRAME => {
                out.push('/');
                rack_first = None;
            }
            // Only bonus balls can follow a non-strike with a full rack.
            Some(_) if pins == PINS_PER_FRAME => {
                out.push('X');
                rack_first = None;
            }
            Some(_) => {
                out.push(digit(pins));
                rack_first = None;
            }
            None if pins == PINS_PER_FRAME => out.push('X'),
            None => {
                out.push(digit(pins));
                rack_first = Some(pins);
            }
        }
    }

    out
}

fn digit(pins: u8) -> char {
    if pins == 0 {
        '-'
    } else {
        char::from_digit(u32::from(pins), 10).unwrap_or('?')
    }
}

/// Cumulative score per frame; `None` until the frame has a ball.
fn running_totals(player: &PlayerSummary) -> [Option<u32>; FRAMES_PER_GAME as usize] {
    let mut out = [None; FRAMES_PER_GAME as usize];
    let mut sum = 0;
    for n in 1..=FRAMES_PER_GAME {
        match player.frame(n) {
            Some(f) if f.first.is_some() => {
                sum += f.value();
                out[n as usize - 1] = Some(sum);
            }
            _ => break,
        }
    }
    out
}
