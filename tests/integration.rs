use fs_simulator::Session;
use fs_simulator::error::{NavigateError, StorageError};
use fs_simulator::storage::{EntryKind, ListResult, RESERVED_CHARS};

fn names(listing: &ListResult) -> Vec<String> {
    listing.entries.iter().map(|entry| entry.name.clone()).collect()
}

#[test]
fn test_mkdir_then_ls_and_duplicate() {
    let mut session = Session::default();
    for name in ["docs", "a1", "Report_2024"] {
        session.mkdir(name).unwrap();

        let listing = session.ls();
        let entry = listing
            .entries
            .iter()
            .find(|entry| entry.name == name)
            .expect("created directory is listed");
        assert_eq!(entry.kind, EntryKind::Directory);

        assert_eq!(
            session.mkdir(name),
            Err(StorageError::AlreadyExists(name.to_string()))
        );
    }
}

#[test]
fn test_touch_then_rm_restores_listing() {
    let mut session = Session::default();
    session.mkdir("keep").unwrap();
    session.touch("also").unwrap();
    let before = names(&session.ls());

    session.touch("temp").unwrap();
    assert_ne!(names(&session.ls()), before);
    session.rm("temp").unwrap();

    assert_eq!(names(&session.ls()), before);
}

#[test]
fn test_child_count_tracks_creations_and_removals() {
    let mut session = Session::default();
    let mut created = 0;
    let mut removed = 0;

    for i in 0..6 {
        session.mkdir(&format!("dir{i}")).unwrap();
        session.touch(&format!("file{i}")).unwrap();
        created += 2;
    }
    for i in (0..6).step_by(2) {
        session.rm(&format!("dir{i}")).unwrap();
        session.rm(&format!("file{i}")).unwrap();
        removed += 2;
    }

    assert_eq!(session.ls().len(), created - removed);
}

#[test]
fn test_cd_parent_at_root() {
    let mut session = Session::default();
    assert_eq!(session.cd(".."), Err(NavigateError::AlreadyAtRoot));
    assert_eq!(session.pwd(), "/");
}

#[test]
fn test_nested_navigation() {
    let mut session = Session::default();
    session.mkdir("a").unwrap();
    session.cd("a").unwrap();
    session.mkdir("b").unwrap();
    session.cd("b").unwrap();
    assert_eq!(session.pwd(), "/a/b");

    session.cd("..").unwrap();
    session.cd("..").unwrap();
    assert_eq!(session.pwd(), "/");
}

#[test]
fn test_cd_root_from_any_depth() {
    let mut session = Session::default();
    for name in ["x", "y", "z"] {
        session.mkdir(name).unwrap();
        session.cd(name).unwrap();
    }
    assert_eq!(session.pwd(), "/x/y/z");

    session.cd("/").unwrap();
    assert_eq!(session.pwd(), "/");

    session.cd("/x/y").unwrap();
    session.cd("~").unwrap();
    assert_eq!(session.pwd(), "/");
}

#[test]
fn test_relative_and_absolute_paths() {
    let mut session = Session::default();
    session.mkdir("a").unwrap();
    session.mkdir("c").unwrap();
    session.cd("a").unwrap();
    session.mkdir("b").unwrap();

    session.cd("b/../../c").unwrap();
    assert_eq!(session.pwd(), "/c");

    session.cd("/a/b").unwrap();
    assert_eq!(session.pwd(), "/a/b");

    session.cd("//a///").unwrap();
    assert_eq!(session.pwd(), "/a");
}

#[test]
fn test_failed_cd_never_moves() {
    let mut session = Session::default();
    session.mkdir("a").unwrap();
    session.cd("a").unwrap();
    session.touch("file").unwrap();

    for path in ["missing", "file", "/nope", "../a/missing", "./"] {
        assert!(session.cd(path).is_err(), "{path:?} should fail");
        assert_eq!(session.pwd(), "/a");
    }
}

#[test]
fn test_name_validation() {
    let mut session = Session::default();

    for c in RESERVED_CHARS {
        let name = format!("x{c}y");
        assert_eq!(session.mkdir(&name), Err(StorageError::InvalidName(name.clone())));
        assert_eq!(session.touch(&name), Err(StorageError::InvalidName(name.clone())));
        assert_eq!(session.rm(&name), Err(StorageError::InvalidName(name.clone())));
    }
    for name in ["", ".", ".."] {
        assert_eq!(session.mkdir(name), Err(StorageError::InvalidName(name.to_string())));
        assert_eq!(session.touch(name), Err(StorageError::InvalidName(name.to_string())));
    }
    assert!(session.ls().is_empty());

    for name in ["abc", "A1", "123"] {
        assert!(session.mkdir(name).is_ok());
    }
}

#[test]
fn test_directory_size_is_sum_of_descendants() {
    let mut session = Session::default();
    session.touch("top").unwrap();
    session.write("top", b"0123456789").unwrap();
    session.mkdir("a").unwrap();
    session.cd("a").unwrap();
    session.touch("one").unwrap();
    session.write("one", b"abcd").unwrap();
    session.mkdir("b").unwrap();
    session.cd("b").unwrap();
    session.touch("two").unwrap();
    session.write("two", b"xyz").unwrap();
    session.touch("empty").unwrap();

    assert_eq!(session.size(), 3);
    session.cd("..").unwrap();
    assert_eq!(session.size(), 7);
    session.cd("/").unwrap();
    assert_eq!(session.size(), 17);

    let children: u64 = session.ls().entries.iter().map(|entry| entry.size).sum();
    assert_eq!(session.size(), children);
}

#[test]
fn test_rm_directory_removes_descendants() {
    let mut session = Session::default();
    session.mkdir("a").unwrap();
    session.cd("a").unwrap();
    session.touch("inner").unwrap();
    session.cd("..").unwrap();
    let live_before = session.tree().len();

    session.rm("a").unwrap();

    assert_eq!(session.tree().len(), live_before - 2);
    assert_eq!(session.cd("a"), Err(NavigateError::DirectoryNotFound("a".into())));
    assert_eq!(session.cd("/a"), Err(NavigateError::DirectoryNotFound("/a".into())));

    // a new directory with the same name starts out empty
    session.mkdir("a").unwrap();
    session.cd("a").unwrap();
    assert!(session.ls().is_empty());
    assert_eq!(session.stat("inner"), Err(StorageError::NotFound("inner".into())));
}
