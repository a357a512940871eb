use crate::cli::support::{stdout_json, Fixture};
use predicates::prelude::*;

#[test]
fn test_analyze_human_report() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["analyze", "Moonlight - Piano Trio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted genre: Classical"))
        .stdout(predicate::str::contains(
            "Insight: Very high instrumentalness (0.92)",
        ))
        .stdout(predicate::str::contains("Key metrics:"))
        .stdout(predicate::str::contains("Similar tracks:"))
        .stdout(predicate::str::contains(" 1. B - Y"));
}

#[test]
fn test_analyze_json() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--format", "json", "analyze", "Riot - Amp Wall", "-k", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["prediction"]["genre"], "Hard-Rock");
    assert!(json["insight"].as_str().unwrap().contains("-3.2 dB"));
    // truncated to the three other tracks
    assert_eq!(json["neighbors"].as_array().unwrap().len(), 3);
}

#[test]
fn test_analyze_records() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--format", "records", "analyze", "A - X", "-k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H trackscope=1 records=1 mode=analyze label=\"A - X\" k=2",
        ))
        .stdout(predicate::str::contains("\nP Dance "))
        .stdout(predicate::str::contains("\nI \"The mix of danceability"))
        .stdout(predicate::str::contains("\nN 2 "));
}

#[test]
fn test_analyze_requires_model() {
    let fixture = Fixture::new();
    fixture
        .bare_cmd()
        .args(["--dataset", "songs.csv", "--model", "missing.json"])
        .args(["analyze", "A - X"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("model not found"));
}
