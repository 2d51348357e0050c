//! Tree nodes
//!
//! A node is either a `Directory` or a `File`. Both carry their name and a
//! non-owning link to their parent directory inside the arena.

use std::fmt;

/// Handle to a node stored in a [`Tree`](crate::storage::tree::Tree).
///
/// The generation is bumped every time a slot is freed, so a handle that
/// outlives its node never resolves to whatever reuses the slot later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Get the raw slot index
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

/// Directory node: an ordered list of owned children.
#[derive(Debug, Clone)]
pub struct Directory {
    name: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_child(&mut self, id: NodeId) {
        self.children.push(id);
    }

    pub(crate) fn take_child(&mut self, id: NodeId) {
        self.children.retain(|&child| child != id);
    }

    pub(crate) fn take_children(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.children)
    }
}

/// File node: opaque content, size is its length in bytes.
#[derive(Debug, Clone)]
pub struct File {
    name: String,
    content: Vec<u8>,
    parent: Option<NodeId>,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_content(name, Vec::new())
    }

    pub fn with_content(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<Vec<u8>>) {
        self.content = content.into();
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File: {} (size: {} bytes)", self.name, self.size())
    }
}

/// A file or a directory
#[derive(Debug, Clone)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Directory(dir) => dir.name(),
            Node::File(file) => file.name(),
        }
    }

    /// Parent directory, `None` for the root and for detached nodes
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Directory(dir) => dir.parent,
            Node::File(file) => file.parent,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            Node::Directory(dir) => dir.parent = parent,
            Node::File(file) => file.parent = parent,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub(crate) fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut File> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}
