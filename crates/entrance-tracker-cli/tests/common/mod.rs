#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/minimal_locations.json")
        .canonicalize()
        .expect("fixture catalog present")
}

/// Scratch state directory plus a command builder pointed at the fixture catalog.
pub struct TestEnv {
    temp_dir: TempDir,
    pub state_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("create temp dir");
        let state_path = temp_dir.path().join("state").join("state.json");
        Self {
            temp_dir,
            state_path,
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("entrance-tracker");
        cmd.env("RUST_LOG", "error")
            .env("NO_COLOR", "1")
            .env_remove("ENTRANCE_TRACKER_CATALOG")
            .env_remove("ENTRANCE_TRACKER_STATE")
            .arg("--catalog")
            .arg(fixture_path())
            .arg("--state")
            .arg(&self.state_path);
        cmd
    }

    pub fn connect(&self, entrance: &str, destination: &str) {
        self.cmd()
            .args(["connect", entrance, destination])
            .assert()
            .success();
    }
}
