use crate::cli::support::{stdout_json, Fixture};
use predicates::prelude::*;

#[test]
fn test_similar_human() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["similar", "B - Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracks similar to B - Y:"))
        .stdout(predicate::str::contains(" 1. Moonlight - Piano Trio"))
        .stdout(predicate::str::contains(" 3. "))
        .stdout(predicate::str::contains(" 4. ").not());
}

#[test]
fn test_similar_does_not_need_the_model() {
    let fixture = Fixture::new();
    fixture
        .bare_cmd()
        .args(["--dataset", "songs.csv", "--model", "missing.json"])
        .args(["similar", "A - X", "-k", "1"])
        .assert()
        .success();
}

#[test]
fn test_similar_json_is_sorted_and_excludes_query() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--format", "json", "similar", "Riot - Amp Wall", "-k", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["query"], "Riot - Amp Wall");
    assert_eq!(json["feature_set"], "full");

    let neighbors = json["neighbors"].as_array().unwrap();
    assert_eq!(neighbors.len(), 2);
    assert_eq!(neighbors[0]["rank"], 1);
    assert!(neighbors[0]["energy"].as_f64().is_some());
    assert!(neighbors[0]["tempo"].as_f64().is_some());
    assert!(neighbors[0]["artists"].is_string());
    assert!(neighbors
        .iter()
        .all(|n| n["label"].as_str() != Some("Riot - Amp Wall")));
    let d0 = neighbors[0]["distance"].as_f64().unwrap();
    let d1 = neighbors[1]["distance"].as_f64().unwrap();
    assert!(d0 <= d1);
}

#[test]
fn test_similar_records() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--format", "records", "similar", "B - Y", "-k", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H trackscope=1 records=1 mode=similar label=\"B - Y\" k=1 features=full",
        ))
        .stdout(predicate::str::contains("\nN 1 2 "))
        .stdout(predicate::str::contains(
            "\"Moonlight - Piano Trio\" energy=0.0800 tempo=66.0000",
        ));
}

#[test]
fn test_similar_zero_neighbors_is_usage_error() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["similar", "B - Y", "-k", "0"])
        .assert()
        .code(2);
}
