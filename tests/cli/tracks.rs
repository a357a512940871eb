use crate::cli::support::{stdout_json, Fixture};
use predicates::prelude::*;

#[test]
fn test_tracks_lists_unique_labels_in_order() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .arg("tracks")
        .assert()
        .success()
        .stdout("A - X\nB - Y\nMoonlight - Piano Trio\nRiot - Amp Wall\n");
}

#[test]
fn test_tracks_query_is_case_insensitive() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["tracks", "--query", "MOON"])
        .assert()
        .success()
        .stdout("Moonlight - Piano Trio\n");
}

#[test]
fn test_tracks_limit_reports_total() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["tracks", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B - Y"))
        .stdout(predicate::str::contains("Riot").not())
        .stdout(predicate::str::contains("(2 of 4 tracks shown)"));
}

#[test]
fn test_tracks_no_match() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["tracks", "--query", "zzz"])
        .assert()
        .success()
        .stdout("No tracks found\n");

    fixture
        .cmd()
        .args(["--quiet", "tracks", "--query", "zzz"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_tracks_json() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--format", "json", "tracks", "-n", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total"], 4);
    assert_eq!(json["tracks"], serde_json::json!(["A - X"]));
    assert!(json["dataset"].as_str().unwrap().ends_with("songs.csv"));
}

#[test]
fn test_tracks_records() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--format", "records", "tracks", "-Q", "riot"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H trackscope=1 records=1 mode=tracks count=1 total=1",
        ))
        .stdout(predicate::str::contains("T \"Riot - Amp Wall\""));
}

#[test]
fn test_tracks_empty_query_is_usage_error() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["tracks", "--query", "  "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--query must not be empty"));
}
