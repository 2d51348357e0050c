//! Navigate module
//!
//! Handles directory navigation for the session, including path
//! resolution, changing directories and rendering the current path.

mod operations;

// Re-export public types and functions
pub use operations::{change_directory, current_path, resolve_path, split_path};
