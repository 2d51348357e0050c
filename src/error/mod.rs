//! Error handling
//!
//! Defines error types and handling for the simulator.

pub mod handlers;
pub mod types;

pub use types::*;
