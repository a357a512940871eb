use crate::cli::support::Fixture;
use predicates::prelude::*;

#[test]
fn test_default_logging_is_quiet() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .arg("tracks")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_verbose_emits_debug_events() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--verbose", "tracks"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_dataset"));
}

#[test]
fn test_log_json_lines_parse() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--log-level", "debug", "--log-json", "tracks"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut lines = stderr.lines().peekable();
    assert!(lines.peek().is_some());
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("level").is_some());
    }
}

#[test]
fn test_log_level_directive() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--log-level", "trackscope_core=debug", "tracks"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_dataset"))
        .stderr(predicate::str::contains("parse_args").not());
}
