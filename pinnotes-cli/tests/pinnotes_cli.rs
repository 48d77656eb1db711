use std::path::Path;
use std::process::{Command, Output};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn setup_config(seed_defaults: bool) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    let data_directory = dir.child("data").path().to_owned();
    write_config(&dir, &data_directory, seed_defaults);
    dir
}

fn write_config(dir: &TempDir, data_directory: &Path, seed_defaults: bool) {
    dir.child("pinnotes.toml")
        .write_str(
            &format!(
                "data_directory = '{}'\nseed_defaults = {seed_defaults}\n",
                data_directory.display(),
            )
        )
        .expect("failed to write config");
}

fn call(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pinnotes"))
        .arg(
            format!(
                "--config-file={}",
                dir.child("pinnotes.toml").path().display(),
            )
        )
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run pinnotes")
}

fn call_ok(dir: &TempDir, args: &[&str]) -> String {
    let output = call(dir, args);
    assert!(
        output.status.success(),
        "pinnotes {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr),
    );
    String::from_utf8(output.stdout).expect("stdout is not utf-8")
}

fn call_err(dir: &TempDir, args: &[&str]) -> String {
    let output = call(dir, args);
    assert_eq!(output.status.code(), Some(1), "pinnotes {args:?} should fail");
    String::from_utf8(output.stderr).expect("stderr is not utf-8")
}

fn add(dir: &TempDir, title: &str, content: &str) -> String {
    call_ok(dir, &["add", "--title", title, "--content", content])
        .trim()
        .to_owned()
}

fn stored_notes(dir: &TempDir) -> Vec<serde_json::Value> {
    let data = std::fs::read_to_string(dir.child("data/notes.json").path())
        .expect("failed to read slot");
    serde_json::from_str(&data).expect("slot is not a json array")
}

#[test]
fn add_and_list() {
    let dir = setup_config(false);
    let id = add(&dir, "Groceries", "Milk and eggs");
    assert!(id.parse::<u64>().is_ok(), "not an id: {id}");
    let list = call_ok(&dir, &["list"]);
    assert_eq!(list, format!("{id}\t \tGroceries\n"));
}

#[test]
fn notes_are_persisted_with_camel_case_keys() {
    let dir = setup_config(false);
    add(&dir, "  Title ", " Body ");
    dir.child("data/notes.json").assert(predicate::path::is_file());
    let notes = stored_notes(&dir);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "Title");
    assert_eq!(notes[0]["content"], "Body");
    assert_eq!(notes[0]["subtitle"], "");
    assert_eq!(notes[0]["isPinned"], false);
    assert_eq!(notes[0]["createdAt"], notes[0]["lastEdited"]);
}

#[test]
fn blank_title_is_rejected() {
    let dir = setup_config(false);
    let stderr = call_err(&dir, &["add", "--title", "  ", "--content", "x"]);
    assert!(stderr.contains("error: title must not be empty"), "{stderr}");
    assert!(stored_notes(&dir).is_empty());
}

#[test]
fn edit_keeps_omitted_fields() {
    let dir = setup_config(false);
    let id = add(&dir, "Old title", "Old content");
    call_ok(&dir, &["edit", id.as_str(), "--title", "New title"]);
    let notes = stored_notes(&dir);
    assert_eq!(notes[0]["title"], "New title");
    assert_eq!(notes[0]["content"], "Old content");
}

#[test]
fn edit_unknown_note_fails() {
    let dir = setup_config(false);
    let stderr = call_err(&dir, &["edit", "12345", "--title", "x"]);
    assert!(stderr.contains("error: note 12345 not found"), "{stderr}");
}

#[test]
fn delete_is_idempotent() {
    let dir = setup_config(false);
    let id = add(&dir, "a", "b");
    call_ok(&dir, &["delete", id.as_str()]);
    call_ok(&dir, &["delete", id.as_str()]);
    assert!(stored_notes(&dir).is_empty());
}

#[test]
fn pin_toggles_and_orders_first() {
    let dir = setup_config(false);
    let first = add(&dir, "first", "x");
    let second = add(&dir, "second", "x");
    assert_eq!(call_ok(&dir, &["pin", first.as_str()]), format!("pinned note {first}\n"));
    let list = call_ok(&dir, &["list"]);
    assert_eq!(
        list,
        format!("{first}\t*\tfirst\n{second}\t \tsecond\n"),
    );
    let pinned = call_ok(&dir, &["list", "--filter", "pinned"]);
    assert_eq!(pinned, format!("{first}\t*\tfirst\n"));
    assert_eq!(call_ok(&dir, &["pin", first.as_str()]), format!("unpinned note {first}\n"));
}

#[test]
fn eighth_pin_is_rejected() {
    let dir = setup_config(false);
    let ids = (0..8)
        .map(|i| add(&dir, &format!("note {i}"), "x"))
        .collect::<Vec<_>>();
    for id in &ids[..7] {
        call_ok(&dir, &["pin", id.as_str()]);
    }
    let stderr = call_err(&dir, &["pin", ids[7].as_str()]);
    assert!(stderr.contains("error: cannot pin more than 7 notes"), "{stderr}");
    let pinned = stored_notes(&dir)
        .iter()
        .filter(|note| note["isPinned"] == true)
        .count();
    assert_eq!(pinned, 7);
}

#[test]
fn search_ignores_case() {
    let dir = setup_config(false);
    add(&dir, "Groceries", "Milk");
    let books = add(&dir, "Books", "Read more MILKMAN novels");
    add(&dir, "Chores", "Laundry");
    let list = call_ok(&dir, &["list", "--search", "milkman"]);
    assert_eq!(list, format!("{books}\t \tBooks\n"));
}

#[test]
fn show_prints_details() {
    let dir = setup_config(false);
    let id = add(&dir, "Title", "Body");
    let text = call_ok(&dir, &["show", id.as_str()]);
    assert!(text.starts_with("Title\n\nBody\n"), "{text}");
    assert!(text.contains(&format!("id: {id}")), "{text}");
}

#[test]
fn empty_slot_is_seeded_with_examples() {
    let dir = setup_config(true);
    let list = call_ok(&dir, &["list"]);
    assert!(list.contains("Welcome to your notes"), "{list}");
    assert_eq!(stored_notes(&dir).len(), list.lines().count());
}

#[test]
fn malformed_slot_is_fatal() {
    let dir = setup_config(false);
    dir.child("data/notes.json").write_str("{not json").unwrap();
    let stderr = call_err(&dir, &["list"]);
    assert!(stderr.contains("could not load notes"), "{stderr}");
    dir.child("data/notes.json").assert("{not json");
}

#[test]
fn missing_config_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let stderr = call_err(&dir, &["list"]);
    assert!(stderr.contains("does not exist"), "{stderr}");
}

// the data directory sits under a dangling symlink: the slot reads as
// empty, but it cannot be created
#[cfg(unix)]
#[test]
fn unsaved_changes_are_reported_as_warning() {
    let dir = TempDir::new().expect("failed to create temp dir");
    std::os::unix::fs::symlink(
        dir.child("missing").path(),
        dir.child("dangling").path(),
    ).expect("failed to create symlink");
    write_config(&dir, dir.child("dangling/data").path(), false);

    let output = call(&dir, &["add", "--title", "Title", "--content", "Body"]);
    assert!(output.status.success(), "add should not fail");
    let stdout = String::from_utf8(output.stdout).expect("stdout is not utf-8");
    assert!(stdout.trim().parse::<u64>().is_ok(), "not an id: {stdout}");
    let stderr = String::from_utf8(output.stderr).expect("stderr is not utf-8");
    assert!(
        stderr.lines().any(|line| line.starts_with("warning: changes were not saved")),
        "{stderr}",
    );
    dir.child("missing").assert(predicate::path::missing());
}
