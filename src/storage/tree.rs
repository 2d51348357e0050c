//! Arena-backed directory tree
//!
//! Every node lives in a single `Vec` of slots and is referenced by
//! [`NodeId`]. Directories own their children through the ids they hold;
//! the parent link stored in each node is a plain id and owns nothing.
//! Removing a child frees its whole subtree at once and bumps the slot
//! generations, so stale ids stop resolving instead of aliasing new nodes.

use log::debug;

use crate::error::StorageError;
use crate::storage::node::{Directory, File, Node, NodeId};
use crate::storage::results::{EntryInfo, EntryKind};

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// The whole filesystem: an arena of nodes plus the root directory id.
#[derive(Debug)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
}

impl Tree {
    /// Create a tree holding only an empty root directory
    pub fn new(root_name: &str) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        };
        tree.root = tree.allocate(Directory::new(root_name).into());
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` still refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub fn directory(&self, id: NodeId) -> Option<&Directory> {
        self.get(id)?.as_directory()
    }

    pub fn file(&self, id: NodeId) -> Option<&File> {
        self.get(id)?.as_file()
    }

    pub fn file_mut(&mut self, id: NodeId) -> Option<&mut File> {
        self.get_mut(id)?.as_file_mut()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent()
    }

    /// Number of parent links between `id` and the root
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Child of `dir` named exactly `name`, of either kind
    pub fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.directory(dir)?
            .children()
            .iter()
            .copied()
            .find(|&child| self.get(child).is_some_and(|node| node.name() == name))
    }

    /// Child directory of `dir` named `name`; files with that name don't match
    pub fn find_directory(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.find_child(dir, name)
            .filter(|&child| self.get(child).is_some_and(Node::is_directory))
    }

    /// Append `node` to the children of `dir`.
    ///
    /// Fails without touching the tree if `dir` is not a live directory or
    /// already has a child with the same name.
    pub fn add_child(&mut self, dir: NodeId, mut node: Node) -> Result<NodeId, StorageError> {
        if self.directory(dir).is_none() {
            return Err(StorageError::NotFound(self.display_name(dir)));
        }

        if self.find_child(dir, node.name()).is_some() {
            return Err(StorageError::AlreadyExists(node.name().to_string()));
        }

        node.set_parent(Some(dir));
        let id = self.allocate(node);

        if let Some(parent) = self.get_mut(dir).and_then(Node::as_directory_mut) {
            parent.push_child(id);
        }

        Ok(id)
    }

    /// Detach the child of `dir` named `name` and free its subtree.
    ///
    /// The returned node has no parent; a returned directory is already
    /// empty since its descendants are destroyed with it.
    pub fn remove_child(&mut self, dir: NodeId, name: &str) -> Result<Node, StorageError> {
        let id = self
            .find_child(dir, name)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;

        if let Some(parent) = self.get_mut(dir).and_then(Node::as_directory_mut) {
            parent.take_child(id);
        }

        let (mut node, freed) = self
            .release(id)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;
        node.set_parent(None);
        debug!("Released '{}' and {} descendant(s)", name, freed);

        Ok(node)
    }

    /// Total size in bytes: content length for files, sum over all
    /// descendants for directories. Dead ids have size 0.
    pub fn size(&self, id: NodeId) -> u64 {
        let mut total = 0;
        let mut pending = vec![id];

        while let Some(next) = pending.pop() {
            match self.get(next) {
                Some(Node::File(file)) => total += file.size(),
                Some(Node::Directory(dir)) => pending.extend_from_slice(dir.children()),
                None => {}
            }
        }

        total
    }

    /// One entry per child of `dir`, in insertion order
    pub fn list_contents(&self, dir: NodeId) -> Vec<EntryInfo> {
        let Some(directory) = self.directory(dir) else {
            return Vec::new();
        };

        directory
            .children()
            .iter()
            .filter_map(|&child| {
                let node = self.get(child)?;
                let kind = if node.is_directory() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                Some(EntryInfo {
                    kind,
                    name: node.name().to_string(),
                    size: self.size(child),
                })
            })
            .collect()
    }

    fn display_name(&self, id: NodeId) -> String {
        self.get(id)
            .map(|node| node.name().to_string())
            .unwrap_or_else(|| format!("#{}", id.index))
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn free_slot(&mut self, index: usize) -> Option<Node> {
        let slot = &mut self.slots[index];
        let node = slot.node.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        node
    }

    /// Free `id` and everything below it. Returns the top node and the
    /// number of descendants freed with it.
    fn release(&mut self, id: NodeId) -> Option<(Node, usize)> {
        if !self.contains(id) {
            return None;
        }
        let mut top = self.free_slot(id.index)?;

        let mut pending = top
            .as_directory_mut()
            .map(Directory::take_children)
            .unwrap_or_default();
        let mut freed = 0;

        while let Some(child) = pending.pop() {
            if !self.contains(child) {
                continue;
            }
            if let Some(mut node) = self.free_slot(child.index) {
                if let Some(dir) = node.as_directory_mut() {
                    pending.extend(dir.take_children());
                }
                freed += 1;
            }
        }

        Some((top, freed))
    }
}
