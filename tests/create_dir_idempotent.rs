//! `create_directory` is idempotent: creating twice succeeds both times.

use dirwatch::fs_ops;

#[test]
fn create_twice_succeeds_both_times() {
    let td = tempfile::tempdir().unwrap();
    let target = td.path().join("fresh");
    let raw = target.to_string_lossy().into_owned();

    fs_ops::create_directory(&raw).expect("first create");
    assert!(target.is_dir());

    fs_ops::create_directory(&raw).expect("second create is a no-op success");
    assert!(target.is_dir());
}

#[test]
fn create_makes_missing_parent_segments() {
    let td = tempfile::tempdir().unwrap();
    let target = td.path().join("a").join("b").join("c");

    fs_ops::create_directory(&target.to_string_lossy()).expect("nested create");
    assert!(target.is_dir());
}

#[test]
fn create_trims_surrounding_whitespace() {
    let td = tempfile::tempdir().unwrap();
    let target = td.path().join("padded");
    let raw = format!("  {}  ", target.display());

    fs_ops::create_directory(&raw).expect("trimmed create");
    assert!(target.is_dir());
}
