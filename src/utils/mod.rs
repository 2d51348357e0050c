//! Utility functions
//!
//! Provides logging setup and input validation utilities.

pub mod logging;
pub mod validation;
