//! End-to-end tests for the `roborover` binary.
//!
//! Outcome messages are logged to stdout; configuration errors go to stderr.

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

fn roborover() -> Command {
    let mut cmd = Command::cargo_bin("roborover").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("ROBOROVER_WIDTH")
        .env_remove("ROBOROVER_HEIGHT")
        .current_dir(std::env::temp_dir())
        .arg("--no-prompt");
    cmd
}

#[test]
fn welcome_and_exit() {
    roborover()
        .write_stdin("EXIT\n")
        .assert()
        .success()
        .stdout(contains("Welcome to RoboRover! Type HELP for available commands."))
        .stdout(contains("Exiting RoboRover..."));
}

#[test]
fn empty_stdin_exits_gracefully() {
    roborover().write_stdin("").assert().success();
}

#[test]
fn report_after_moves() {
    roborover()
        .write_stdin("PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\nEXIT\n")
        .assert()
        .success()
        .stdout(contains("Robot position is 3,3,NORTH"));
}

#[test]
fn errors_do_not_end_the_session() {
    roborover()
        .write_stdin("MOVE\nJUMP\nPLACE 0,0,NORTH\nREPORT\nEXIT\n")
        .assert()
        .success()
        .stdout(contains("Robot not yet placed. Cannot execute move command"))
        .stdout(contains("Unknown command: JUMP"))
        .stdout(contains("Robot position is 0,0,NORTH"));
}

#[test]
fn help_lists_commands() {
    roborover()
        .write_stdin("HELP\nEXIT\n")
        .assert()
        .success()
        .stdout(contains("Available commands:"))
        .stdout(contains("PLACE X,Y,DIRECTION"));
}

#[test]
fn width_flag_widens_the_table() {
    roborover()
        .args(["--width", "10"])
        .write_stdin("PLACE 9,0,NORTH\nREPORT\nEXIT\n")
        .assert()
        .success()
        .stdout(contains("Robot position is 9,0,NORTH"));
}

#[test]
fn env_sets_the_height() {
    roborover()
        .env("ROBOROVER_HEIGHT", "2")
        .write_stdin("PLACE 0,1,NORTH\nMOVE\nEXIT\n")
        .assert()
        .success()
        .stdout(contains("Robot cannot move off the tabletop"));
}

#[test]
fn config_file_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.toml");
    fs::write(&path, "[tabletop]\nwidth = 2\nheight = 2\n").unwrap();

    roborover()
        .arg("--config")
        .arg(&path)
        .write_stdin("PLACE 2,2,NORTH\nPLACE 1,1,NORTH\nEXIT\n")
        .assert()
        .success()
        .stdout(
            contains("Robot cannot be placed off the tabletop")
                .and(contains("Placed the robot at 1,1,NORTH")),
        );
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    roborover()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .write_stdin("EXIT\n")
        .assert()
        .failure()
        .stderr(contains("failed to read"));
}

#[test]
fn zero_sized_table_is_rejected() {
    roborover()
        .args(["--width", "0"])
        .write_stdin("EXIT\n")
        .assert()
        .failure()
        .stderr(contains("invalid tabletop"));
}
