//! In-memory storage
//!
//! Handles the node tree, name validation, and the operations shell
//! commands perform on it.

pub mod node;
pub mod operations;
pub mod results;
pub mod tree;
pub mod validation;

// Re-export commonly used types
pub use node::{Directory, File, Node, NodeId};
pub use results::{EntryInfo, EntryKind, ListResult, NodeSummary};
pub use tree::Tree;
pub use validation::{MAX_DIRECTORY_DEPTH, RESERVED_CHARS, is_valid_name};
