//! Session management
//!
//! Holds the tree and the current directory for one simulator run.

pub mod state;

pub use state::Session;
