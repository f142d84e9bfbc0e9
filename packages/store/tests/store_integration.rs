//! End-to-end tests against the real file system.
//!
//! Each test pins the home directory to a fresh temporary directory, so
//! the on-disk layout (`<home>/.<namespace>/<relative-path>`) can be
//! inspected directly.

use std::fs;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use dotstash_store::{rel_path, DiskFs, Error, Stash};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Bookmark {
    url: String,
    tags: Vec<String>,
}

fn disk_stash(home: &TempDir) -> Stash {
    let mut stash = Stash::with_fs(DiskFs::with_home(home.path()));
    stash.set_namespace("Disk Test");
    stash
}

#[test]
fn record_lands_under_the_hidden_namespace_folder() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    let bookmark = Bookmark {
        url: "https://example.com".to_string(),
        tags: vec!["reading".to_string()],
    };
    stash
        .save_record(&bookmark, &rel_path!("bookmarks/first.json"))
        .unwrap();

    let on_disk = home.path().join(".disk-test/bookmarks/first.json");
    assert!(on_disk.is_file());

    // The bytes are plain serde_json output.
    let raw = fs::read_to_string(&on_disk).unwrap();
    let parsed: Bookmark = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, bookmark);
}

#[test]
fn deep_path_materializes_every_intermediate_directory() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    stash.save_record(&1u32, &rel_path!("x/y/z.json")).unwrap();

    assert!(home.path().join(".disk-test/x").is_dir());
    assert!(home.path().join(".disk-test/x/y").is_dir());
    assert!(home.path().join(".disk-test/x/y/z.json").is_file());
}

#[test]
fn record_roundtrip_on_disk() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    let bookmark = Bookmark {
        url: "https://example.com/a?b=c".to_string(),
        tags: vec!["one".to_string(), "two".to_string()],
    };
    stash
        .save_record(&bookmark, &rel_path!("deep/ly/nested/bookmark.json"))
        .unwrap();

    let loaded: Bookmark = stash
        .load_record(&rel_path!("deep/ly/nested/bookmark.json"))
        .unwrap();
    assert_eq!(loaded, bookmark);
}

#[test]
fn overwrite_leaves_only_the_second_value() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);
    let path = rel_path!("state.json");

    stash
        .save_record(&vec![1, 2, 3, 4, 5, 6, 7, 8], &path)
        .unwrap();
    stash.save_record(&vec![9], &path).unwrap();

    let loaded: Vec<u32> = stash.load_record(&path).unwrap();
    assert_eq!(loaded, vec![9]);
}

#[test]
fn text_file_is_separator_joined_utf8() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    stash
        .save_text(&["alpha", "beta", "gamma"], &rel_path!("lists/words.txt"))
        .unwrap();

    let raw = fs::read_to_string(home.path().join(".disk-test/lists/words.txt")).unwrap();
    assert_eq!(raw, "alpha\nbeta\ngamma");

    assert_eq!(
        stash.load_text(&rel_path!("lists/words.txt")).unwrap(),
        vec!["alpha", "beta", "gamma"]
    );
}

#[test]
fn trailing_newline_on_disk_loads_without_empty_element() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    // Resolve so the namespace root exists, then plant the file by hand.
    stash.resolve(&rel_path!("history.txt")).unwrap();
    fs::write(home.path().join(".disk-test/history.txt"), "a\nb\n").unwrap();

    assert_eq!(
        stash.load_text(&rel_path!("history.txt")).unwrap(),
        vec!["a", "b"]
    );
}

#[test]
fn listing_matches_written_files() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    stash
        .save_record(&true, &rel_path!("folder/a.json"))
        .unwrap();
    stash.save_text(&["x"], &rel_path!("folder/b.txt")).unwrap();

    let mut names = stash.list_dir(&rel_path!("folder")).unwrap();
    names.sort();
    assert_eq!(names, vec!["a.json".to_string(), "b.txt".to_string()]);
}

#[test]
fn listing_creates_the_directory_when_absent() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    assert!(stash.list_dir(&rel_path!("fresh")).unwrap().is_empty());
    assert!(home.path().join(".disk-test/fresh").is_dir());
}

#[test]
fn missing_file_is_not_found() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    let err = stash
        .load_record::<Bookmark>(&rel_path!("nothing/here.json"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn directory_collision_with_a_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let mut stash = disk_stash(&home);

    // `blocker` is a file; resolving `blocker/inner.json` must fail
    // rather than clobber it.
    stash.save_text(&["data"], &rel_path!("blocker")).unwrap();

    let err = stash
        .save_record(&1u32, &rel_path!("blocker/inner.json"))
        .unwrap_err();
    assert!(matches!(err, Error::Fs(_)));

    // The original file is untouched.
    assert!(home.path().join(".disk-test/blocker").is_file());
}

#[test]
fn two_namespaces_are_disjoint_roots() {
    let home = tempfile::tempdir().unwrap();

    let mut first = Stash::with_fs(DiskFs::with_home(home.path()));
    first.set_namespace("tool one");
    first.save_record(&1u32, &rel_path!("v.json")).unwrap();

    let mut second = Stash::with_fs(DiskFs::with_home(home.path()));
    second.set_namespace("tool two");
    second.save_record(&2u32, &rel_path!("v.json")).unwrap();

    assert!(home.path().join(".tool-one/v.json").is_file());
    assert!(home.path().join(".tool-two/v.json").is_file());

    let v: u32 = first.load_record(&rel_path!("v.json")).unwrap();
    assert_eq!(v, 1);
}
