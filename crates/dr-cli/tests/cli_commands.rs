//! Integration tests for the `dr` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dayreach() -> Command {
    let mut cmd = Command::cargo_bin("dayreach").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_twelve() {
    dayreach()
        .args(["check", "12"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Number 12 is reachable by 6 day(s) out of 31.")
                .and(predicate::str::contains("Probability: 0.19355 (≈ 19.35%)"))
                .and(predicate::str::contains("Days: [1, 2, 3, 4, 6, 12]")),
        );
}

#[test]
fn check_one() {
    dayreach()
        .args(["check", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Probability: 0.03226 (≈ 3.23%)"));
}

#[test]
fn check_large_prime() {
    dayreach()
        .args(["check", "37"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Days: [1]"));
}

#[test]
fn check_lists_multipliers() {
    dayreach()
        .args(["check", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 3 × 2 "));
}

#[test]
fn check_json() {
    let output = dayreach().args(["check", "60", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["number"], 60);
    assert_eq!(value["count"], 11);
    assert_eq!(value["day_range"], serde_json::json!([1, 31]));
    assert_eq!(value["multipliers"][0]["multiplier"], 60);
}

#[test]
fn check_rejects_out_of_range() {
    dayreach()
        .args(["check", "66"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target number out of range: 66"));

    dayreach()
        .args(["check", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn check_rejects_garbage() {
    dayreach()
        .args(["check", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target number"));
}

#[test]
fn check_with_narrowed_days() {
    dayreach()
        .args(["check", "12", "--first-day", "2", "--last-day", "11"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("reachable by 4 day(s) out of 10")
                .and(predicate::str::contains("0.40000")),
        );
}

#[test]
fn invalid_day_range_rejected() {
    dayreach()
        .args(["check", "12", "--first-day", "20", "--last-day", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid day range: 20..=10"));

    dayreach()
        .args(["check", "12", "--last-day", "32"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid day range"));
}

#[test]
fn custom_precision() {
    dayreach()
        .args(["check", "12", "--decimals", "2", "--percent-decimals", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Probability: 0.19 (≈ 19.4%)"));
}

// ---------------------------------------------------------------------------
// table / insights
// ---------------------------------------------------------------------------

#[test]
fn table_lists_all_numbers() {
    dayreach()
        .arg("table")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("65 numbers over days 1..=31")
                .and(predicate::str::contains("[1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30]")),
        );
}

#[test]
fn insights_most_and_least() {
    dayreach()
        .arg("insights")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Most likely number: 60")
                .and(predicate::str::contains(
                    "Least likely numbers: 1, 37, 41, 43, 47, 53, 59, 61",
                ))
                .and(predicate::str::contains("Unique reach counts")),
        );
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    dayreach()
        .args(["export", "-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV exported to"));

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Number,Reachable_Days_Count,Probability_decimal,Probability_percent,Reachable_Days"
    );
    assert_eq!(lines.next().unwrap(), "1,1,0.03226,3.23%,1");
    assert_eq!(content.lines().count(), 66);
}

#[test]
fn export_default_path_in_working_dir() {
    let dir = TempDir::new().unwrap();
    dayreach()
        .arg("export")
        .current_dir(dir.path())
        .assert()
        .success();
    assert!(dir.path().join("day_probabilities.csv").exists());
}

#[test]
fn export_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "keep me").unwrap();

    dayreach()
        .args(["export", "-o", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

    dayreach()
        .args(["export", "-o", path.to_str().unwrap(), "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().starts_with("Number,"));
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/out.csv");
    dayreach()
        .args(["export", "-o", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to save CSV"));
}

// ---------------------------------------------------------------------------
// chart
// ---------------------------------------------------------------------------

#[test]
fn chart_prints_bars() {
    dayreach()
        .arg("chart")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Probability distribution (1-65)")
                .and(predicate::str::contains("60 │"))
                .and(predicate::str::contains("35.48%")),
        );
}

#[test]
fn chart_writes_svg() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chart.svg");

    dayreach()
        .args(["chart", "--svg", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart written to"));

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));

    dayreach()
        .args(["chart", "--svg", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
