#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn snail_cmd() -> Command {
    let mut command = Command::cargo_bin("snail").expect("snail binary is built");
    let _ = command.env_remove("SNAIL_SIZE").env_remove("RUST_LOG");
    command
}

#[test]
fn prints_four_by_four_example() {
    snail_cmd()
        .args(["-n", "4"])
        .assert()
        .success()
        .stdout(" 1  2  3  4\n12 13 14  5\n11 16 15  6\n10  9  8  7\n");
}

#[test]
fn defaults_to_five_by_five() {
    snail_cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 1  2  3  4  5\n"))
        .stdout(predicate::str::ends_with("13 12 11 10  9\n"));
}

#[test]
fn size_can_come_from_environment() {
    snail_cmd()
        .env("SNAIL_SIZE", "2")
        .assert()
        .success()
        .stdout("1 2\n4 3\n");
}

#[test]
fn flag_overrides_environment() {
    snail_cmd()
        .env("SNAIL_SIZE", "2")
        .args(["--size", "1"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn negative_size_fails_with_message() {
    snail_cmd()
        .args(["-n", "-3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("negative matrix dimension -3"));
}

#[test]
fn oversized_size_fails_with_message() {
    snail_cmd()
        .args(["-n", "70000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum of 65535"));
}

#[test]
fn json_format_prints_rows() {
    snail_cmd()
        .args(["-n", "3", "--format", "json"])
        .assert()
        .success()
        .stdout("{\"n\":3,\"rows\":[[1,2,3],[8,9,4],[7,6,5]]}\n");
}

#[test]
fn logs_stay_off_stdout() {
    snail_cmd()
        .env("RUST_LOG", "trace")
        .args(["-n", "2"])
        .assert()
        .success()
        .stdout("1 2\n4 3\n")
        .stderr(predicate::str::contains("rendering snail matrix"));
}
