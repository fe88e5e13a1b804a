//! E2E smoke tests for the wraplist binary
//!
//! These tests drive the compiled binary through a pseudo-terminal.
//! They are gated behind the `e2e-tests` feature flag.
//!
//! Run with: `cargo test --features e2e-tests`

#![cfg(feature = "e2e-tests")]

use std::path::PathBuf;
use std::time::Duration;

use expectrl::{spawn, ControlCode, Eof, Regex};

fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_wraplist")
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/items.txt")
}

#[test]
fn smoke_help_flag() {
    let mut session = spawn(format!("{} --help", binary())).expect("Failed to spawn wraplist");

    let _ = session
        .expect(Regex("soft-wrapping list"))
        .expect("Failed to find description");
    let _ = session
        .expect(Regex("Usage:"))
        .expect("Failed to find help output");
    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_app_starts_and_quits() {
    let mut session = spawn(format!("{} {}", binary(), fixture().display()))
        .expect("Failed to spawn wraplist");

    std::thread::sleep(Duration::from_millis(500));
    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should be running after startup");

    session.send("q").expect("Failed to send quit command");
    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_navigation_and_selection_do_not_crash() {
    let mut session = spawn(format!("{} --relative {}", binary(), fixture().display()))
        .expect("Failed to spawn wraplist");

    std::thread::sleep(Duration::from_millis(500));

    for keys in ["j", "2j", "k", " ", "m", "v", "s", "+", "-", "r", "G", "g"] {
        session.send(keys).expect("Failed to send keys");
        std::thread::sleep(Duration::from_millis(50));
    }

    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should survive navigation");

    session
        .send(ControlCode::EndOfText)
        .expect("Failed to send Ctrl-C");
    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_enter_prints_selection() {
    let mut session = spawn(format!("{} {}", binary(), fixture().display()))
        .expect("Failed to spawn wraplist");

    std::thread::sleep(Duration::from_millis(500));

    // Select "apple" (second item) and accept.
    session.send("j ").expect("Failed to toggle item");
    std::thread::sleep(Duration::from_millis(50));
    session.send("\r").expect("Failed to send enter");

    let _ = session
        .expect(Regex("apple"))
        .expect("Selection should be printed");
    let _ = session.expect(Eof).expect("Process should exit");
}
