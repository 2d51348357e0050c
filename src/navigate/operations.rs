//! Navigation operations implementation

use log::debug;

use crate::error::NavigateError;
use crate::storage::{NodeId, Tree};

/// Splits a path on `/`, dropping empty segments
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Resolves `path` to a directory, starting at the root for absolute paths
/// and at `current` otherwise.
///
/// `..` moves up one level and stays put at the top. Every other segment
/// must name an existing child directory or the whole lookup fails.
pub fn resolve_path(tree: &Tree, current: NodeId, path: &str) -> Option<NodeId> {
    if path.is_empty() {
        return Some(current);
    }

    let mut target = if path.starts_with('/') {
        tree.root()
    } else {
        current
    };

    for segment in split_path(path) {
        if segment == ".." {
            if let Some(parent) = tree.parent(target) {
                target = parent;
            }
        } else {
            target = tree.find_directory(target, segment)?;
        }
    }

    Some(target)
}

/// Changes the working directory, returning the new one.
///
/// A lone `..` reports `AlreadyAtRoot` at the top; `/` and `~` jump to the
/// root; anything else goes through [`resolve_path`].
pub fn change_directory(
    tree: &Tree,
    current: NodeId,
    target_path: &str,
) -> Result<NodeId, NavigateError> {
    match target_path {
        ".." => tree.parent(current).ok_or(NavigateError::AlreadyAtRoot),
        "/" | "~" => Ok(tree.root()),
        _ => {
            let target = resolve_path(tree, current, target_path)
                .ok_or_else(|| NavigateError::DirectoryNotFound(target_path.to_string()))?;
            debug!("Resolved '{}' to node #{}", target_path, target.index());
            Ok(target)
        }
    }
}

/// Absolute path of `dir`, built by walking parent links up to the root
pub fn current_path(tree: &Tree, dir: NodeId) -> String {
    let mut names = Vec::new();
    let mut current = dir;

    while current != tree.root() {
        let Some(node) = tree.get(current) else {
            break;
        };
        names.push(node.name());
        match node.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    names.reverse();
    format!("/{}", names.join("/"))
}
