use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// Get a Command for trackscope, isolated from any user config
pub fn trackscope() -> Command {
    let mut cmd = cargo_bin_cmd!("trackscope");
    cmd.env_remove("TRACKSCOPE_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("TRACKSCOPE_LOG");
    cmd
}

pub const HEADER: &str = "name,artists,popularity,duration_ms,danceability,energy,key,loudness,mode,speechiness,acousticness,instrumentalness,liveness,valence,tempo,time_signature,music_genre";

/// After cleaning: A - X, B - Y, Moonlight - Piano Trio, Riot - Amp Wall
pub const ROWS: &[&str] = &[
    "A,X,50,200000,0.8,0.9,1,-5,1,0.05,0.1,0.0,0.1,0.7,120,4,dance",
    "B,Y,10,180000,0.2,0.1,2,-20,0,0.02,0.9,0.8,0.05,0.2,60,3,classical",
    "Moonlight,Piano Trio,22,320000,0.25,0.08,1,-24,0,0.03,0.95,0.92,0.08,0.15,66,4,classical",
    "Riot,Amp Wall,68,210000,0.35,0.97,9,-3.2,1,0.09,0.01,0.02,0.3,0.3,165,4,hard-rock",
    "A,X,99,1,0.1,0.1,1,-1,1,0.1,0.1,0.1,0.1,0.1,99,4,duplicate",
    "Campfire,Strings,35,190000,0.55,0.3,4,-11,1,0.04,0.85,0.01,0.12,0.6,98,4,",
];

/// Classical when instrumental, Hard-Rock when loud, Dance otherwise
pub const MODEL: &str = r#"{
  "algorithm": "tree_ensemble",
  "classes": ["Acoustic", "Classical", "Dance", "Hard-Rock"],
  "feature_names": ["popularity", "duration_ms", "danceability", "energy", "key",
    "loudness", "mode", "speechiness", "acousticness", "instrumentalness", "liveness",
    "valence", "tempo", "time_signature", "intensity", "dance_tempo", "chill_factor"],
  "base_score": 0.5,
  "trees": [
    {"class": 1, "nodes": [
      {"feature": "instrumentalness", "threshold": 0.5, "yes": 1, "no": 2},
      {"leaf": -1.0},
      {"leaf": 3.0}
    ]},
    {"class": 3, "nodes": [
      {"feature": "loudness", "threshold": -4.0, "yes": 1, "no": 2},
      {"leaf": -1.0},
      {"leaf": 3.0}
    ]},
    {"class": 2, "nodes": [
      {"leaf": 1.0}
    ]}
  ]
}"#;

/// A working directory holding `model.json` and `songs.csv`
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("model.json"), MODEL).unwrap();
        fs::write(
            dir.path().join("songs.csv"),
            format!("{}\n{}\n", HEADER, ROWS.join("\n")),
        )
        .unwrap();
        Fixture { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// trackscope run inside the fixture, pointed at both files
    pub fn cmd(&self) -> Command {
        let mut cmd = trackscope();
        cmd.current_dir(self.path())
            .env("TRACKSCOPE_CONFIG_DIR", self.path().join("no-global"))
            .args(["--model", "model.json", "--dataset", "songs.csv"]);
        cmd
    }

    /// trackscope run inside the fixture with no path flags
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = trackscope();
        cmd.current_dir(self.path())
            .env("TRACKSCOPE_CONFIG_DIR", self.path().join("no-global"));
        cmd
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        fs::write(&path, content).unwrap();
        path
    }
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
