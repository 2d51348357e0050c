//! Error types
//!
//! Defines domain-specific error types for each module of the simulator.

use std::fmt;
use std::io;

/// Storage module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    InvalidName(String),
    AlreadyExists(String),
    NotFound(String),
    NotAFile(String),
    DepthLimitExceeded(usize),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidName(n) => write!(f, "Invalid name: {}", n),
            StorageError::AlreadyExists(n) => write!(f, "'{}' already exists", n),
            StorageError::NotFound(n) => write!(f, "File or directory not found: {}", n),
            StorageError::NotAFile(n) => write!(f, "Not a file: {}", n),
            StorageError::DepthLimitExceeded(max) => {
                write!(f, "Maximum directory depth of {} reached", max)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Navigate module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    DirectoryNotFound(String),
    AlreadyAtRoot,
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
            NavigateError::AlreadyAtRoot => write!(f, "Already at root directory"),
        }
    }
}

impl std::error::Error for NavigateError {}

/// General simulator error that encompasses all error types
#[derive(Debug)]
pub enum SimulatorError {
    Storage(StorageError),
    Navigate(NavigateError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::Storage(e) => write!(f, "Storage error: {}", e),
            SimulatorError::Navigate(e) => write!(f, "Navigate error: {}", e),
            SimulatorError::Config(e) => write!(f, "Configuration error: {}", e),
            SimulatorError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SimulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulatorError::Storage(e) => Some(e),
            SimulatorError::Navigate(e) => Some(e),
            SimulatorError::Config(e) => Some(e),
            SimulatorError::IoError(e) => Some(e),
        }
    }
}

impl From<StorageError> for SimulatorError {
    fn from(error: StorageError) -> Self {
        SimulatorError::Storage(error)
    }
}

impl From<NavigateError> for SimulatorError {
    fn from(error: NavigateError) -> Self {
        SimulatorError::Navigate(error)
    }
}

impl From<config::ConfigError> for SimulatorError {
    fn from(error: config::ConfigError) -> Self {
        SimulatorError::Config(error)
    }
}

impl From<io::Error> for SimulatorError {
    fn from(error: io::Error) -> Self {
        SimulatorError::IoError(error)
    }
}
