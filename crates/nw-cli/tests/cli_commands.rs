//! Integration tests for the `nw` CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

use nw_play::story::SHORE_OUTCOMES;

fn nw() -> Command {
    Command::cargo_bin("nw").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_cave_path_ends_at_treasure() {
    nw().args(["play", "--seed", "42"])
        .write_stdin("2\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("pitch black")
                .and(predicate::str::contains("full of gold"))
                .and(predicate::str::ends_with("The story ends.\n\n")),
        );
}

#[test]
fn play_river_crossing_ends_as_hero() {
    nw().args(["play", "--seed", "42"])
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("riverbank").and(predicate::str::contains("you become a hero")),
        );
}

#[test]
fn play_shore_prints_one_fixed_outcome() {
    let output = nw()
        .args(["play", "--seed", "42"])
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("wild beast"));

    let hits = SHORE_OUTCOMES.iter().filter(|o| stdout.contains(**o)).count();
    assert_eq!(hits, 1, "exactly one outcome should be printed");
}

#[test]
fn play_same_seed_same_transcript() {
    let run = || {
        let output = nw()
            .args(["play", "--seed", "7"])
            .write_stdin("1\n2\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(output).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn play_invalid_choice_redisplays_node() {
    let output = nw()
        .args(["play", "--seed", "42"])
        .write_stdin("9\n2\n1\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("Invalid choice, try again."));

    // The start node's description and options are shown again after the
    // rejected input.
    assert_eq!(stdout.matches("Which do you take?").count(), 2);
    assert_eq!(stdout.matches("2: Go to the cave").count(), 2);
    // The rejected input must not advance the story.
    assert!(stdout.contains("full of gold"));
}

#[test]
fn play_eof_ends_session_cleanly() {
    nw().arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("mysterious forest")
                .and(predicate::str::contains("Invalid choice").not()),
        );
}

#[test]
fn play_eof_mid_story_exits_zero() {
    nw().arg("play")
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("riverbank"));
}

#[test]
fn play_no_prompt_after_ending() {
    let output = nw()
        .args(["play", "--seed", "42"])
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let ending = stdout.find("you become a hero").unwrap();
    assert!(!stdout[ending..].contains("> "), "no prompt after the ending");
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_builtin_story() {
    nw().arg("check").assert().success().stdout(
        predicate::str::contains("All checks passed")
            .and(predicate::str::contains("7 nodes"))
            .and(predicate::str::contains("4 endings")),
    );
}

// ---------------------------------------------------------------------------
// graph
// ---------------------------------------------------------------------------

#[test]
fn graph_shows_structure() {
    nw().arg("graph").assert().success().stdout(
        predicate::str::contains("Story graph: 7 nodes, start at 'start'")
            .and(predicate::str::contains("1: Go to the river -> river"))
            .and(predicate::str::contains("cross_river (ending)"))
            .and(predicate::str::contains("shore (ending, 2 random outcomes)")),
    );
}
