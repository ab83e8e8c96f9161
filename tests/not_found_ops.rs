//! Missing targets fail with `NotFound` before any mutation happens.

use std::fs;

use dirwatch::OpError;
use dirwatch::fs_ops;

#[test]
fn directory_exists_reports_missing_directory() {
    let td = tempfile::tempdir().unwrap();
    let missing = td.path().join("nope");

    let err = fs_ops::directory_exists(&missing.to_string_lossy()).unwrap_err();
    assert!(matches!(err, OpError::DirectoryNotFound(_)));
}

#[test]
fn delete_of_missing_file_fails_and_mutates_nothing() {
    let td = tempfile::tempdir().unwrap();
    let missing = td.path().join("nope.txt");

    let err = fs_ops::delete_file(&missing.to_string_lossy()).unwrap_err();
    assert!(matches!(err, OpError::FileNotFound(_)));
    assert_eq!(fs::read_dir(td.path()).unwrap().count(), 0, "directory was touched");
}

#[test]
fn copy_into_missing_directory_fails_before_any_write() {
    let td = tempfile::tempdir().unwrap();
    let src = td.path().join("src.txt");
    fs::write(&src, "payload").unwrap();
    let missing_dir = td.path().join("dest");

    let err = fs_ops::copy_file_to_directory(
        &src.to_string_lossy(),
        &missing_dir.to_string_lossy(),
    )
    .unwrap_err();
    assert!(matches!(err, OpError::DirectoryNotFound(_)));
    // The destination directory must not have been conjured into existence.
    assert!(!missing_dir.exists());
}

#[test]
fn copy_of_missing_source_fails_and_leaves_destination_untouched() {
    let td = tempfile::tempdir().unwrap();
    let dest_dir = td.path().join("dest");
    fs::create_dir(&dest_dir).unwrap();
    let missing_src = td.path().join("ghost.txt");

    let err = fs_ops::copy_file_to_directory(
        &missing_src.to_string_lossy(),
        &dest_dir.to_string_lossy(),
    )
    .unwrap_err();
    assert!(matches!(err, OpError::FileNotFound(_)));
    assert_eq!(fs::read_dir(&dest_dir).unwrap().count(), 0, "destination was touched");
}

#[test]
fn missing_directory_check_precedes_missing_source_check() {
    // Both the source file and the destination directory are absent; the
    // directory check wins, so the failure is deterministic.
    let td = tempfile::tempdir().unwrap();
    let err = fs_ops::copy_file_to_directory(
        &td.path().join("ghost.txt").to_string_lossy(),
        &td.path().join("nowhere").to_string_lossy(),
    )
    .unwrap_err();
    assert!(matches!(err, OpError::DirectoryNotFound(_)));
}

#[test]
fn list_of_missing_directory_fails() {
    let td = tempfile::tempdir().unwrap();
    let err = fs_ops::read_files_from_directory(&td.path().join("nope").to_string_lossy())
        .unwrap_err();
    assert!(matches!(err, OpError::DirectoryNotFound(_)));
}
