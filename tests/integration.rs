//! Integration tests for the skirmish binary.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine_with_args(args: &[&str], commands: &[&str]) -> (bool, Vec<String>) {
    let exe = env!("CARGO_BIN_EXE_skirmish");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start skirmish");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    (status.success(), lines)
}

fn run_engine(commands: &[&str]) -> Vec<String> {
    let (ok, lines) = run_engine_with_args(&[], commands);
    assert!(ok);
    lines
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["foobar", "nonsense", "quit"]);
    assert!(lines.is_empty());
}

#[test]
fn empty_lines_are_ignored() {
    let lines = run_engine(&["", "  ", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn end_of_input_exits_cleanly() {
    let lines = run_engine(&["isready"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn commands_after_quit_are_not_processed() {
    let lines = run_engine(&["quit", "isready"]);
    assert!(lines.is_empty());
}

#[test]
fn warrior_versus_ogre_session() {
    let lines = run_engine(&[
        "newgame",
        "place p1 warrior 3 3",
        "endturn",
        "place p2 ogre 3 4",
        "endturn",
        "endturn",
        "endturn",
        "status",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec![
            "ok",
            "placed 0",
            "round 1 attacks 0 casualties 0",
            "placed 1",
            "round 2 attacks 2 casualties 0",
            "round 3 attacks 2 casualties 1",
            "result p2",
            "error the game is already over",
            "result p2",
        ]
    );
}

#[test]
fn wrong_player_and_budget_errors() {
    let lines = run_engine(&[
        "newgame",
        "place p2 archer 0 0",
        "place p1 ogre 0 0",
        "place p1 ogre 0 1",
        "place p1 archer 9 9",
        "budget p1",
        "quit",
    ]);
    assert_eq!(lines[0], "ok");
    assert_eq!(lines[1], "error it is not that player's placement phase");
    assert_eq!(lines[2], "placed 0");
    assert_eq!(lines[3], "error p1 has no ogre left to place");
    assert_eq!(lines[4], "error position (9, 9) is outside the board");
    assert_eq!(lines[5], "budget archer 2 warrior 2 ogre 0");
}

#[test]
fn board_prints_text_rows() {
    let lines = run_engine(&[
        "newgame 4 3",
        "place p1 ogre 0 0",
        "endturn",
        "place p2 archer 2 3",
        "board",
        "quit",
    ]);
    assert_eq!(&lines[4..], &["O...", "....", "...a"]);
}

#[test]
fn view_emits_json() {
    let lines = run_engine(&["newgame 3 3", "place p1 warrior 1 1", "view", "quit"]);
    let json = &lines[2];
    assert!(json.starts_with('{'));
    assert!(json.contains("\"width\":3"));
    assert!(json.contains("\"phase\":\"placement p1\""));
    assert!(json.contains("\"kind\":\"warrior\""));
}

#[test]
fn config_file_sets_board_and_budget() {
    let path = std::env::temp_dir().join(format!("skirmish-config-{}.toml", std::process::id()));
    std::fs::write(&path, "width = 5\nheight = 2\n\n[budget]\nogre = 3\n").unwrap();
    let (ok, lines) = run_engine_with_args(
        &["--config", path.to_str().unwrap()],
        &["newgame", "budget p2", "place p1 ogre 1 4", "place p1 ogre 2 0", "quit"],
    );
    std::fs::remove_file(&path).ok();
    assert!(ok);
    assert_eq!(lines[1], "budget archer 2 warrior 2 ogre 3");
    assert_eq!(lines[2], "placed 0");
    assert_eq!(lines[3], "error position (2, 0) is outside the board");
}

#[test]
fn missing_config_file_fails() {
    let (ok, lines) = run_engine_with_args(&["--config", "/nonexistent/skirmish.toml"], &[]);
    assert!(!ok);
    assert!(lines.is_empty());
}

#[test]
fn oversized_board_is_refused_and_session_continues() {
    let lines = run_engine(&["newgame 18446744073709551615 2", "newgame 2 2", "isready", "quit"]);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("error board 18446744073709551615x2"));
    assert_eq!(lines[1], "ok");
    assert_eq!(lines[2], "readyok");
}
