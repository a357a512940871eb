use crate::cli::support::{Fixture, HEADER, ROWS};
use predicates::prelude::*;

#[test]
fn test_missing_dataset_exit_code_3() {
    let fixture = Fixture::new();
    fixture
        .bare_cmd()
        .args(["--dataset", "nothing.csv", "tracks"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dataset not found"));
}

#[test]
fn test_json_error_envelope() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--format", "json", "show", "Nope - Nobody"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "track_not_found");
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--format", "json", "similar"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_schema_error() {
    let fixture = Fixture::new();
    fixture.write("bad.csv", "artists,energy\nX,0.5\n");

    fixture
        .bare_cmd()
        .args(["--dataset", "bad.csv", "tracks"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("name"));
}

#[test]
fn test_bad_numeric_value_reports_line() {
    let fixture = Fixture::new();
    fixture.write(
        "bad.csv",
        "name,artists,energy,tempo\nA,X,0.5,120\nB,Y,0.4,fast\n",
    );

    fixture
        .bare_cmd()
        .args(["--dataset", "bad.csv", "tracks"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"fast\""))
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_invalid_model_exit_code_3() {
    let fixture = Fixture::new();
    fixture.write("broken.json", "{\"algorithm\": \"forest\"}");

    fixture
        .bare_cmd()
        .args(["--dataset", "songs.csv", "--model", "broken.json"])
        .args(["show", "A - X"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid model"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--quiet", "show", "Nope - Nobody"])
        .assert()
        .code(3)
        .stderr("");
}

#[test]
fn test_underivable_row_only_breaks_neighbor_search() {
    let fixture = Fixture::new();
    fixture.write(
        "tempo.csv",
        &format!(
            "{}\n{}\nBroken,Clock,40,200000,0.5,0.5,2,-9,1,0.04,0.3,0.1,0.1,0.4,-1,4,dance\n",
            HEADER,
            ROWS[..4].join("\n")
        ),
    );

    fixture
        .bare_cmd()
        .args(["--model", "model.json", "--dataset", "tempo.csv", "tracks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Broken - Clock"))
        .stdout(predicate::str::contains("Riot - Amp Wall"));

    fixture
        .bare_cmd()
        .args(["--model", "model.json", "--dataset", "tempo.csv", "show", "Riot - Amp Wall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted genre: Hard-Rock"));

    fixture
        .bare_cmd()
        .args(["--model", "model.json", "--dataset", "tempo.csv", "similar", "Riot - Amp Wall"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dance_tempo"));
}
