//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::fmt;

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub kind: EntryKind,
    pub name: String,
    pub size: u64,
}

/// Result of a directory listing operation
#[derive(Debug, Clone)]
pub struct ListResult {
    pub entries: Vec<EntryInfo>,
    pub path: String,
}

impl ListResult {
    /// An empty directory is a valid listing with no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

/// Result of a stat operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSummary {
    File { name: String, size: u64 },
    Directory { name: String, items: usize, size: u64 },
}

impl fmt::Display for NodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeSummary::File { name, size } => {
                write!(f, "File: {} (size: {} bytes)", name, size)
            }
            NodeSummary::Directory { name, items, size } => write!(
                f,
                "Directory: {} ({} items, total size: {} bytes)",
                name, items, size
            ),
        }
    }
}
