//! Live watch session: create, modify and delete a file while the session is
//! active and check the delivered event sequence.
//!
//! Platforms may coalesce rapid successive modifications, so the assertions
//! require at least one modify event between create and delete rather than an
//! exact count. Settle delays keep the backend from batching across steps.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use dirwatch::watch::{ChangeKind, watch_directory};
use serial_test::serial;

const SETTLE: Duration = Duration::from_millis(400);

#[test]
#[serial]
fn create_modify_delete_arrive_in_program_order() {
    let td = tempfile::tempdir().unwrap();
    let dir = td.path().to_path_buf();
    let raw = dir.to_string_lossy().into_owned();

    let events: Arc<Mutex<Vec<(ChangeKind, String)>>> = Arc::default();
    let sink = Arc::clone(&events);

    watch_directory(
        &raw,
        move |ev| sink.lock().unwrap().push((ev.kind, ev.file.name.clone())),
        || {
            let target = dir.join("x.txt");
            thread::sleep(SETTLE);

            fs::write(&target, b"one").unwrap();
            thread::sleep(SETTLE);

            let mut f = OpenOptions::new().append(true).open(&target).unwrap();
            f.write_all(b"two").unwrap();
            f.sync_all().unwrap();
            drop(f);
            thread::sleep(SETTLE);

            fs::remove_file(&target).unwrap();
            thread::sleep(SETTLE);
        },
    )
    .expect("watch session");

    let seen: Vec<ChangeKind> = events
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, name)| name == "x.txt")
        .map(|(kind, _)| *kind)
        .collect();

    assert!(!seen.is_empty(), "no events delivered");
    assert_eq!(seen.first(), Some(&ChangeKind::Created), "events: {seen:?}");
    assert_eq!(seen.last(), Some(&ChangeKind::Deleted), "events: {seen:?}");

    let delete_at = seen.len() - 1;
    let modified_between = seen[1..delete_at]
        .iter()
        .any(|k| *k == ChangeKind::Modified);
    assert!(
        modified_between,
        "no modify event between create and delete: {seen:?}"
    );
}

#[test]
#[serial]
fn rename_is_reported_once_at_the_new_name() {
    let td = tempfile::tempdir().unwrap();
    let old = td.path().join("old.txt");
    fs::write(&old, b"payload").unwrap();
    let new = td.path().join("new.txt");
    let raw = td.path().to_string_lossy().into_owned();

    let events: Arc<Mutex<Vec<(ChangeKind, String)>>> = Arc::default();
    let sink = Arc::clone(&events);

    watch_directory(
        &raw,
        move |ev| sink.lock().unwrap().push((ev.kind, ev.file.name.clone())),
        || {
            thread::sleep(SETTLE);
            fs::rename(&old, &new).unwrap();
            thread::sleep(SETTLE);
        },
    )
    .expect("watch session");

    let renames: Vec<String> = events
        .lock()
        .unwrap()
        .iter()
        .filter(|(kind, _)| *kind == ChangeKind::Renamed)
        .map(|(_, name)| name.clone())
        .collect();

    assert!(
        !renames.iter().any(|name| name == "old.txt"),
        "old name was reported in a rename event: {renames:?}"
    );
    assert_eq!(
        renames,
        vec!["new.txt".to_string()],
        "expected exactly one rename at the new name"
    );
}

#[test]
#[serial]
fn events_in_subdirectories_are_not_reported() {
    let td = tempfile::tempdir().unwrap();
    let sub = td.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let raw = td.path().to_string_lossy().into_owned();

    let events: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&events);

    watch_directory(
        &raw,
        move |ev| sink.lock().unwrap().push(ev.file.name.clone()),
        || {
            thread::sleep(SETTLE);
            fs::write(sub.join("deep.txt"), b"hidden").unwrap();
            thread::sleep(SETTLE);
        },
    )
    .expect("watch session");

    let seen = events.lock().unwrap();
    assert!(
        !seen.iter().any(|name| name == "deep.txt"),
        "non-recursive watch leaked a nested event: {seen:?}"
    );
}
