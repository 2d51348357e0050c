//! Error handlers
//!
//! Provides error reporting and exit status mapping.

use crate::error::types::SimulatorError;
use log::error;

/// Handle a simulator error
pub fn handle_error(err: &SimulatorError) {
    error!("Simulator error: {}", err);
}

/// Convert error to a process exit status
pub fn error_to_exit_code(err: &SimulatorError) -> i32 {
    match err {
        SimulatorError::Config(_) => 2,
        SimulatorError::Storage(_) => 1,
        SimulatorError::Navigate(_) => 1,
        SimulatorError::IoError(_) => 1,
    }
}
