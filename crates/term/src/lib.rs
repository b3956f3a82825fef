//! Terminal scorecard module.
//!
//! Renders a game summary as a classic bowling score sheet for line-oriented
//! terminals. The view is pure (summary in, text lines out) and the renderer
//! turns lines into crossterm command bytes, so both can be unit-tested.
//!
//! Goals:
//! - Keep `core` free of any presentation concerns
//! - Standard marks: `X` strike, `/` spare, `-` gutter
//! - Color is optional so output can be piped or compared in tests

pub mod renderer;
pub mod scorecard;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use renderer::{encode_scorecard_into, ScorecardPrinter};
pub use scorecard::{frame_marks, LineKind, ScorecardLine, ScorecardView};
