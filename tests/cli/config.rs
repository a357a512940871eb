use crate::cli::support::Fixture;
use predicates::prelude::*;

#[test]
fn test_local_config_supplies_paths() {
    let fixture = Fixture::new();
    fixture.write(
        "trackscope.toml",
        "model_path = \"model.json\"\ndataset_path = \"songs.csv\"\n",
    );

    fixture
        .bare_cmd()
        .arg("tracks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Riot - Amp Wall"));
}

#[test]
fn test_config_neighbors_default() {
    let fixture = Fixture::new();
    fixture.write("trackscope.toml", "[recommend]\nneighbors = 1\n");

    fixture
        .cmd()
        .args(["similar", "B - Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. Moonlight - Piano Trio"))
        .stdout(predicate::str::contains(" 2. ").not());
}

#[test]
fn test_config_error_shortfall() {
    let fixture = Fixture::new();
    fixture.write("trackscope.toml", "[recommend]\nshortfall = \"error\"\n");

    fixture
        .cmd()
        .args(["similar", "B - Y", "-k", "10"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("requested 10 neighbors, 3 available"));
}

#[test]
fn test_explicit_config_relative_paths() {
    let fixture = Fixture::new();
    std::fs::create_dir(fixture.file("conf")).unwrap();
    fixture.write(
        "conf/custom.toml",
        "model_path = \"../model.json\"\ndataset_path = \"../songs.csv\"\n",
    );

    fixture
        .bare_cmd()
        .args(["--config", "conf/custom.toml", "show", "B - Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted genre: Classical"));
}

#[test]
fn test_flags_override_config() {
    let fixture = Fixture::new();
    fixture.write("trackscope.toml", "dataset_path = \"elsewhere.csv\"\n");

    fixture
        .bare_cmd()
        .args(["--dataset", "songs.csv", "tracks", "-n", "1"])
        .assert()
        .success()
        .stdout("A - X\n(1 of 4 tracks shown)\n");
}

#[test]
fn test_missing_explicit_config_is_usage_error() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--config", "absent.toml", "tracks"])
        .assert()
        .code(2);
}

#[test]
fn test_zero_neighbors_in_config_is_usage_error() {
    let fixture = Fixture::new();
    fixture.write("trackscope.toml", "[recommend]\nneighbors = 0\n");

    fixture
        .cmd()
        .arg("tracks")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("recommend.neighbors"));
}

#[test]
fn test_global_config_dir() {
    let fixture = Fixture::new();
    let global = fixture.file("global");
    std::fs::create_dir(&global).unwrap();
    std::fs::write(
        global.join("config.toml"),
        format!(
            "dataset_path = {:?}\n",
            fixture.file("songs.csv").display().to_string()
        ),
    )
    .unwrap();

    fixture
        .bare_cmd()
        .env("TRACKSCOPE_CONFIG_DIR", &global)
        .args(["tracks", "-Q", "moon"])
        .assert()
        .success()
        .stdout("Moonlight - Piano Trio\n");
}
