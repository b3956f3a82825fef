//! Session module - player registry and game history around the scoring core
//!
//! A [`Session`] is what a front end (the REPL, a test harness) holds on to
//! between games. It keeps:
//!
//! - **Registry**: the players who will take part in the next game
//! - **Active game**: at most one [`GameEngine`] at a time
//! - **History**: summaries of finished or saved games, kept in memory
//!
//! Starting a new game while one is active archives the old one first;
//! cancelling drops it, archiving only on request.
//!
//! # Example
//!
//! ```
//! use tenpin_session::Session;
//!
//! let mut session = Session::default();
//! session.add_player("ann").unwrap();
//! session.start_game().unwrap();
//! session.roll(7).unwrap();
//! session.roll(3).unwrap();
//! assert_eq!(session.score().unwrap()["ann"], 10);
//! ```

pub mod history;
pub mod session;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use history::{GameRecord, History};
pub use session::{Session, SessionError};
