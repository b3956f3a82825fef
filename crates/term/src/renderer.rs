//! Scorecard printing: encodes scorecard lines into crossterm commands.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::scorecard::{LineKind, ScorecardLine};

/// Writes scorecards to a terminal (stdout by default), one flush per card.
pub struct ScorecardPrinter<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl ScorecardPrinter {
    pub fn new(color: bool) -> Self {
        Self::with_writer(io::stdout(), color)
    }
}

impl<W: Write> ScorecardPrinter<W> {
    pub fn with_writer(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            color,
        }
    }

    pub fn print(&mut self, lines: &[ScorecardLine]) -> Result<()> {
        self.buf.clear();
        encode_scorecard_into(lines, self.color, &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encode scorecard lines into `out`, one terminal line each.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// With `color` off the output is plain text.
pub fn encode_scorecard_into(lines: &[ScorecardLine], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        if color {
            apply_style_into(out, line.kind)?;
        }
        out.queue(Print(&line.text))?;
        if color {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, kind: LineKind) -> Result<()> {
    match kind {
        LineKind::Header => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        LineKind::Marks { current: true } => {
            out.queue(SetForegroundColor(Color::Yellow))?;
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        LineKind::Marks { current: false } => {}
        LineKind::Totals => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
    }
    Ok(())
}
