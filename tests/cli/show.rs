use crate::cli::support::{stdout_json, Fixture};
use predicates::prelude::*;

#[test]
fn test_show_human() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["show", "Riot - Amp Wall"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Riot - Amp Wall\n"))
        .stdout(predicate::str::contains("Predicted genre: Hard-Rock"))
        .stdout(predicate::str::contains("dataset genre: hard-rock"))
        .stdout(predicate::str::contains("Probabilities:"))
        .stdout(predicate::str::contains("-3.2 dB"))
        .stdout(predicate::str::contains("165 BPM"));
}

#[test]
fn test_show_json() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--format", "json", "show", "Moonlight - Piano Trio"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["track"]["label"], "Moonlight - Piano Trio");
    assert_eq!(json["track"]["artists"], "Piano Trio");
    assert_eq!(json["track"]["original_genre"], "classical");
    assert_eq!(json["prediction"]["genre"], "Classical");

    let probabilities = json["prediction"]["probabilities"].as_object().unwrap();
    assert_eq!(probabilities.len(), 4);
    let sum: f64 = probabilities.values().map(|v| v.as_f64().unwrap()).sum();
    assert!((sum - 1.0).abs() < 1e-9);

    assert_eq!(json["profile"]["values"]["instrumentalness"], 0.92);
    assert_eq!(json["profile"]["radar"].as_object().unwrap().len(), 5);
    assert_eq!(json["profile"]["metrics"].as_array().unwrap().len(), 6);
}

#[test]
fn test_show_records() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--format", "records", "show", "A - X"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H trackscope=1 records=1 mode=show label=\"A - X\"",
        ))
        .stdout(predicate::str::contains("T \"A - X\" genre=\"dance\""))
        .stdout(predicate::str::contains("\nP Dance "))
        .stdout(predicate::str::contains("\nG Hard-Rock "))
        .stdout(predicate::str::contains("\nM Tempo 120.0000 \"120 BPM\""));
}

#[test]
fn test_show_unknown_track() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["show", "Nope - Nobody"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("track not found: Nope - Nobody"));
}
