//! Integration tests for the CLI subcommands, covering the file-driven
//! plan mode, name-based route queries, and the station listing.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("nammametro-cli").expect("binary exists")
}

#[test]
fn plan_writes_both_reports() {
    let temp = TempDir::new().expect("create temp dir");
    let input = temp.path().join("input.txt");
    let output = temp.path().join("output.txt");
    fs::write(&input, "0 4\n").expect("write query");

    cli()
        .args([
            "plan",
            "--input",
            input.to_str().expect("utf-8 path"),
            "--output",
            output.to_str().expect("utf-8 path"),
        ])
        .assert()
        .success();

    let reports = fs::read_to_string(&output).expect("read reports");
    assert_eq!(
        reports,
        "Route: Challaghatta -> Jnanabharathi\nTotal Time: 8 minutes\n\n\
         Route: Challaghatta -> Jnanabharathi\nTotal Price: 10 rupees\n"
    );
}

#[test]
fn plan_uses_the_last_query_pair() {
    let temp = TempDir::new().expect("create temp dir");
    let input = temp.path().join("input.txt");
    let output = temp.path().join("output.txt");
    fs::write(&input, "9 12\n0 1\n").expect("write query");

    cli()
        .args([
            "plan",
            "--input",
            input.to_str().expect("utf-8 path"),
            "--output",
            output.to_str().expect("utf-8 path"),
        ])
        .assert()
        .success();

    let reports = fs::read_to_string(&output).expect("read reports");
    assert!(reports.starts_with("Route: Challaghatta -> Kengeri\n"));
}

#[test]
fn plan_rejects_out_of_range_indices() {
    let temp = TempDir::new().expect("create temp dir");
    let input = temp.path().join("input.txt");
    fs::write(&input, "0 500\n").expect("write query");

    cli()
        .args([
            "plan",
            "--input",
            input.to_str().expect("utf-8 path"),
            "--output",
            temp.path().join("output.txt").to_str().expect("utf-8 path"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn plan_requires_a_query_pair() {
    let temp = TempDir::new().expect("create temp dir");
    let input = temp.path().join("input.txt");
    fs::write(&input, "\n").expect("write query");

    cli()
        .args([
            "plan",
            "--input",
            input.to_str().expect("utf-8 path"),
            "--output",
            temp.path().join("output.txt").to_str().expect("utf-8 path"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("station index pair"));
}

#[test]
fn route_prints_both_priorities() {
    cli()
        .args(["route", "--from", "Challaghatta", "--to", "Kengeri Bus Terminal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Time: 5 minutes"))
        .stdout(predicate::str::contains("Total Price: 5 rupees"));
}

#[test]
fn route_reports_unknown_station_with_suggestions() {
    cli()
        .args(["route", "--from", "Chalaghatta", "--to", "Kengeri"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown station name: Chalaghatta"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn route_json_emits_both_reports() {
    cli()
        .args(["route", "--from", "Challaghatta", "--to", "Kengeri", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_time\": 3"))
        .stdout(predicate::str::contains("\"total_fare\": 3"))
        .stdout(predicate::str::contains("\"priority\": \"price\""));
}

#[test]
fn route_json_uses_null_for_unreachable_dimensions() {
    cli()
        .args(["route", "--from", "Lalbagh", "--to", "Jayanagar", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"time\": null"))
        .stdout(predicate::str::contains("\"price\": null"));
}

#[test]
fn stations_lists_the_network() {
    cli()
        .args(["stations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Challaghatta (Purple)"))
        .stdout(predicate::str::contains("Bommasandra (Yellow)"));
}
