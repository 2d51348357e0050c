//! File System Simulator - Entry Point
//!
//! An in-memory directory tree driven by a small shell command language.

use log::info;

use fs_simulator::error::SimulatorError;
use fs_simulator::error::handlers::{error_to_exit_code, handle_error};
use fs_simulator::utils::logging::setup_logging;
use fs_simulator::{Shell, SimulatorConfig};

#[tokio::main]
async fn main() {
    let config = match SimulatorConfig::load() {
        Ok(config) => config,
        Err(e) => fail(SimulatorError::from(e)),
    };

    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging(&config.log_level);

    info!("Launching filesystem simulator...");

    let mut shell = Shell::new(config);
    if let Err(e) = shell.start().await {
        fail(SimulatorError::from(e));
    }
}

fn fail(err: SimulatorError) -> ! {
    setup_logging("error");
    handle_error(&err);
    std::process::exit(error_to_exit_code(&err));
}
