extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_and_traces_with_defaults_scaled_down() {
    Command::cargo_bin("mandelorbit")
        .unwrap()
        .args(&["--width", "60", "--iterations", "30", "--threads", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rendered 60x40 (30 iterations, 2 threads)"))
        .stdout(predicate::str::contains("orbit from (30,20)"));
}

#[test]
fn zero_budget_prints_no_segments() {
    Command::cargo_bin("mandelorbit")
        .unwrap()
        .args(&[
            "--width", "60", "--iterations", "30", "--threads", "1", "--budget", "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 points, 0 segments"));
}

#[test]
fn explicit_seed_is_traced() {
    Command::cargo_bin("mandelorbit")
        .unwrap()
        .args(&[
            "--width", "60", "--iterations", "30", "--threads", "1", "--seed", "10,5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("orbit from (10,5)"));
}

#[test]
fn inverted_viewport_is_a_fatal_configuration_error() {
    Command::cargo_bin("mandelorbit")
        .unwrap()
        .args(&["--leftlower", "1,1", "--rightupper", "-2,-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}

#[test]
fn out_of_range_budget_is_rejected_by_the_parser() {
    Command::cargo_bin("mandelorbit")
        .unwrap()
        .args(&["--width", "60", "--budget", "105"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Orbit budget must be between 0 and 100"));
}
