pub mod commands;
pub mod config;
pub mod error;
pub mod navigate;
pub mod session;
pub mod shell;
pub mod storage;
pub mod utils;

pub use crate::config::SimulatorConfig;
pub use session::Session;
pub use shell::Shell;
