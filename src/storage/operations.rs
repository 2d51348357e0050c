//! Storage operations
//!
//! Handles tree mutations and queries for shell commands including create,
//! list, remove, write, read and stat. Every operation works on one child of
//! a given directory and leaves the tree untouched when it fails.

use log::info;

use crate::error::StorageError;
use crate::storage::node::{Directory, File, Node, NodeId};
use crate::storage::results::{ListResult, NodeSummary};
use crate::storage::tree::Tree;
use crate::storage::validation::validate_name;

/// Creates an empty directory `name` inside `dir`
pub fn create_directory(
    tree: &mut Tree,
    dir: NodeId,
    name: &str,
    max_depth: usize,
) -> Result<NodeId, StorageError> {
    validate_name(name)?;

    if tree.find_child(dir, name).is_some() {
        return Err(StorageError::AlreadyExists(name.to_string()));
    }

    if tree.depth(dir) + 1 > max_depth {
        return Err(StorageError::DepthLimitExceeded(max_depth));
    }

    let id = tree.add_child(dir, Directory::new(name).into())?;
    info!("Created directory '{}'", name);
    Ok(id)
}

/// Creates an empty file `name` inside `dir`
pub fn create_file(tree: &mut Tree, dir: NodeId, name: &str) -> Result<NodeId, StorageError> {
    validate_name(name)?;

    if tree.find_child(dir, name).is_some() {
        return Err(StorageError::AlreadyExists(name.to_string()));
    }

    let id = tree.add_child(dir, File::new(name).into())?;
    info!("Created file '{}'", name);
    Ok(id)
}

/// Lists the contents of a directory
pub fn list_directory(tree: &Tree, dir: NodeId, path: &str) -> ListResult {
    let entries = tree.list_contents(dir);
    info!("Listed directory {} - {} entries", path, entries.len());

    ListResult {
        entries,
        path: path.to_string(),
    }
}

/// Removes `name` from `dir` along with everything below it
pub fn remove_entry(tree: &mut Tree, dir: NodeId, name: &str) -> Result<Node, StorageError> {
    validate_name(name)?;

    let node = tree.remove_child(dir, name)?;
    info!("Removed '{}'", name);
    Ok(node)
}

/// Replaces the content of the file `name` inside `dir`
pub fn write_file(
    tree: &mut Tree,
    dir: NodeId,
    name: &str,
    content: &[u8],
) -> Result<u64, StorageError> {
    let id = lookup_file(tree, dir, name)?;
    let file = tree
        .file_mut(id)
        .ok_or_else(|| StorageError::NotAFile(name.to_string()))?;

    file.set_content(content);
    info!("Wrote {} bytes to '{}'", file.size(), name);
    Ok(file.size())
}

/// Returns the content of the file `name` inside `dir`
pub fn read_file<'a>(tree: &'a Tree, dir: NodeId, name: &str) -> Result<&'a [u8], StorageError> {
    let id = lookup_file(tree, dir, name)?;
    tree.file(id)
        .map(File::content)
        .ok_or_else(|| StorageError::NotAFile(name.to_string()))
}

/// Describes the child `name` of `dir`
pub fn describe_entry(tree: &Tree, dir: NodeId, name: &str) -> Result<NodeSummary, StorageError> {
    validate_name(name)?;

    let id = tree
        .find_child(dir, name)
        .ok_or_else(|| StorageError::NotFound(name.to_string()))?;

    match tree.get(id) {
        Some(Node::File(file)) => Ok(NodeSummary::File {
            name: file.name().to_string(),
            size: file.size(),
        }),
        Some(Node::Directory(directory)) => Ok(NodeSummary::Directory {
            name: directory.name().to_string(),
            items: directory.len(),
            size: tree.size(id),
        }),
        None => Err(StorageError::NotFound(name.to_string())),
    }
}

fn lookup_file(tree: &Tree, dir: NodeId, name: &str) -> Result<NodeId, StorageError> {
    validate_name(name)?;

    let id = tree
        .find_child(dir, name)
        .ok_or_else(|| StorageError::NotFound(name.to_string()))?;

    if tree.file(id).is_none() {
        return Err(StorageError::NotAFile(name.to_string()));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::results::EntryKind;

    #[test]
    fn test_create_checks_name_before_collision() {
        let mut tree = Tree::new("root");
        let root = tree.root();

        assert_eq!(
            create_directory(&mut tree, root, "..", 8),
            Err(StorageError::InvalidName("..".into()))
        );
        assert_eq!(
            create_file(&mut tree, root, "a:b"),
            Err(StorageError::InvalidName("a:b".into()))
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_create_rejects_existing_name() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        create_file(&mut tree, root, "same").unwrap();

        assert_eq!(
            create_directory(&mut tree, root, "same", 8),
            Err(StorageError::AlreadyExists("same".into()))
        );
        assert_eq!(
            create_file(&mut tree, root, "same"),
            Err(StorageError::AlreadyExists("same".into()))
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let a = create_directory(&mut tree, root, "a", 2).unwrap();
        let b = create_directory(&mut tree, a, "b", 2).unwrap();

        assert_eq!(
            create_directory(&mut tree, b, "c", 2),
            Err(StorageError::DepthLimitExceeded(2))
        );
        // files are leaves and are not limited
        assert!(create_file(&mut tree, b, "leaf").is_ok());
    }

    #[test]
    fn test_list_directory() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        create_directory(&mut tree, root, "d", 8).unwrap();
        create_file(&mut tree, root, "f").unwrap();

        let listing = list_directory(&tree, root, "/");
        assert_eq!(listing.path, "/");
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.entries[0].kind, EntryKind::Directory);
        assert_eq!(listing.entries[1].kind, EntryKind::File);
        assert_eq!(listing.names().collect::<Vec<_>>(), vec!["d", "f"]);
    }

    #[test]
    fn test_remove_entry_validates_name() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        assert!(matches!(
            remove_entry(&mut tree, root, ""),
            Err(StorageError::InvalidName(_))
        ));
        assert!(matches!(
            remove_entry(&mut tree, root, "nothing"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_write_and_read_file() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        create_file(&mut tree, root, "notes").unwrap();

        assert_eq!(write_file(&mut tree, root, "notes", b"hello world"), Ok(11));
        assert_eq!(read_file(&tree, root, "notes"), Ok(&b"hello world"[..]));
        assert_eq!(tree.size(root), 11);
    }

    #[test]
    fn test_write_to_directory_fails() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        create_directory(&mut tree, root, "dir", 8).unwrap();

        assert_eq!(
            write_file(&mut tree, root, "dir", b"x"),
            Err(StorageError::NotAFile("dir".into()))
        );
        assert_eq!(
            read_file(&tree, root, "dir"),
            Err(StorageError::NotAFile("dir".into()))
        );
        assert_eq!(
            read_file(&tree, root, "missing"),
            Err(StorageError::NotFound("missing".into()))
        );
    }

    #[test]
    fn test_describe_entry() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let docs = create_directory(&mut tree, root, "docs", 8).unwrap();
        create_file(&mut tree, docs, "a").unwrap();
        create_file(&mut tree, docs, "b").unwrap();
        write_file(&mut tree, docs, "a", b"1234").unwrap();

        let summary = describe_entry(&tree, root, "docs").unwrap();
        assert_eq!(
            summary.to_string(),
            "Directory: docs (2 items, total size: 4 bytes)"
        );

        let summary = describe_entry(&tree, docs, "a").unwrap();
        assert_eq!(summary.to_string(), "File: a (size: 4 bytes)");
    }
}
