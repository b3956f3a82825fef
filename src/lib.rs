//! Ten-pin bowling scorer (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tenpin::{core,session,term,types}` and hosts the REPL
//! used by the `tenpin` binary.

pub mod repl;

pub use tenpin_core as core;
pub use tenpin_session as session;
pub use tenpin_term as term;
pub use tenpin_types as types;
