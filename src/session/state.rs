//! Module `session`
//!
//! Defines the `Session` struct: the filesystem tree plus the current
//! directory, and the command API the shell drives.

use log::{debug, warn};

use crate::config::SimulatorConfig;
use crate::error::{NavigateError, StorageError};
use crate::navigate;
use crate::storage::operations;
use crate::storage::{ListResult, NodeId, NodeSummary, Tree, MAX_DIRECTORY_DEPTH};

const ROOT_NAME: &str = "root";

/// State of one simulator run.
///
/// Owns the whole tree and tracks the directory that relative paths and
/// listings are evaluated against. Failed operations never change state.
#[derive(Debug)]
pub struct Session {
    tree: Tree,
    current: NodeId,
    max_directory_depth: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MAX_DIRECTORY_DEPTH)
    }
}

impl Session {
    /// Starts a session at an empty root directory
    pub fn new(max_directory_depth: usize) -> Self {
        let tree = Tree::new(ROOT_NAME);
        let current = tree.root();
        Self {
            tree,
            current,
            max_directory_depth,
        }
    }

    pub fn from_config(config: &SimulatorConfig) -> Self {
        Self::new(config.max_directory_depth)
    }

    /// Read-only view of the tree
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// The current directory. A handle whose node has been freed falls back
    /// to the root.
    pub fn current(&self) -> NodeId {
        if self.tree.directory(self.current).is_some() {
            self.current
        } else {
            self.tree.root()
        }
    }

    /// Writes back the root fallback of [`Session::current`] if the stored
    /// directory got detached.
    fn reattach(&mut self) -> NodeId {
        let current = self.current();
        if current != self.current {
            warn!("Current directory was detached, resetting to /");
            self.current = current;
        }
        current
    }

    /// Creates a directory in the current directory
    pub fn mkdir(&mut self, name: &str) -> Result<(), StorageError> {
        let cwd = self.reattach();
        operations::create_directory(&mut self.tree, cwd, name, self.max_directory_depth)?;
        Ok(())
    }

    /// Creates an empty file in the current directory
    pub fn touch(&mut self, name: &str) -> Result<(), StorageError> {
        let cwd = self.reattach();
        operations::create_file(&mut self.tree, cwd, name)?;
        Ok(())
    }

    /// Lists the current directory
    pub fn ls(&self) -> ListResult {
        operations::list_directory(&self.tree, self.current(), &self.pwd())
    }

    /// Changes the current directory; leaves it unchanged on failure
    pub fn cd(&mut self, path: &str) -> Result<(), NavigateError> {
        let cwd = self.reattach();
        let target = navigate::change_directory(&self.tree, cwd, path)?;
        self.current = target;
        debug!("Changed directory to {}", self.pwd());
        Ok(())
    }

    /// Absolute path of the current directory
    pub fn pwd(&self) -> String {
        navigate::current_path(&self.tree, self.current())
    }

    /// Removes a file or directory (with its contents) from the current directory
    pub fn rm(&mut self, name: &str) -> Result<(), StorageError> {
        let cwd = self.reattach();
        operations::remove_entry(&mut self.tree, cwd, name)?;
        self.reattach();
        Ok(())
    }

    /// Replaces the content of a file in the current directory
    pub fn write(&mut self, name: &str, content: &[u8]) -> Result<u64, StorageError> {
        let cwd = self.reattach();
        operations::write_file(&mut self.tree, cwd, name, content)
    }

    /// Content of a file in the current directory
    pub fn cat(&self, name: &str) -> Result<&[u8], StorageError> {
        operations::read_file(&self.tree, self.current(), name)
    }

    /// Describes a file or directory in the current directory
    pub fn stat(&self, name: &str) -> Result<NodeSummary, StorageError> {
        operations::describe_entry(&self.tree, self.current(), name)
    }

    /// Total size of the current directory
    pub fn size(&self) -> u64 {
        self.tree.size(self.current())
    }
}
