mod common;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

use common::TestEnv;

#[test]
fn connect_persists_between_runs() {
    let env = TestEnv::new();

    env.cmd()
        .args(["connect", "Forest - E1", "Village Gate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected Forest - E1 -> Village Gate"));

    assert!(env.state_path.exists(), "state file written");

    env.cmd()
        .arg("connections")
        .assert()
        .success()
        .stdout(predicate::str::contains("Forest - E1 -> Village Gate"))
        .stdout(predicate::str::contains("1 connection(s)"));
}

#[test]
fn connect_rejects_unknown_entrance() {
    let env = TestEnv::new();

    env.cmd()
        .args(["connect", "Forest - E9", "Village Gate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown entrance 'Forest - E9'"));

    assert!(!env.state_path.exists(), "nothing saved on failure");
}

#[test]
fn connect_warns_about_unmatched_destination() {
    let env = TestEnv::new();

    env.cmd()
        .args(["connect", "E1", "Village Gat"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "destination 'Village Gat' does not match any entrance name",
        ))
        .stderr(predicate::str::contains("'Village Gate'"));

    env.cmd()
        .arg("connections")
        .assert()
        .success()
        .stdout(predicate::str::contains("(unlinked)"));
}

#[test]
fn disconnect_clears_connection() {
    let env = TestEnv::new();
    env.connect("E1", "Village Gate");

    env.cmd()
        .args(["disconnect", "E1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disconnected Forest - E1 (was Village Gate)"));

    env.cmd()
        .arg("connections")
        .assert()
        .success()
        .stdout(predicate::str::contains("No connections recorded."));

    env.cmd()
        .args(["route", "--from", "E1", "--to", "E2"])
        .assert()
        .failure();
}

#[test]
fn reset_clears_everything() {
    let env = TestEnv::new();
    env.connect("E1", "Village Gate");
    env.connect("E2", "Village Well");

    env.cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 connection(s)."));

    env.cmd()
        .args(["--format", "json", "connections"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn export_then_import_restores_connections() {
    let env = TestEnv::new();
    env.connect("E1", "Village Gate");
    let export_path = env.dir().join("export.json");

    env.cmd()
        .args(["export", "--output"])
        .arg(&export_path)
        .assert()
        .success();
    let exported = fs::read_to_string(&export_path).expect("export written");
    assert!(exported.contains("\"connections\""));
    assert!(exported.contains("\"areaOrder\""));

    env.cmd().arg("reset").assert().success();

    env.cmd()
        .arg("import")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 connection(s)."));

    env.cmd()
        .args(["route", "--from", "E1", "--to", "E2"])
        .assert()
        .success();
}

#[test]
fn import_keeps_fields_missing_from_the_document() {
    let env = TestEnv::new();
    env.connect("E1", "Village Gate");
    let import_path = env.dir().join("order.json");
    fs::write(&import_path, r#"{ "areaOrder": ["market", "forest"] }"#).expect("write import");

    env.cmd()
        .arg("import")
        .arg(&import_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported area order."));

    env.cmd()
        .arg("connections")
        .assert()
        .success()
        .stdout(predicate::str::contains("Forest - E1 -> Village Gate"));

    env.cmd()
        .arg("areas")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  0. Market"));
}

#[test]
fn export_to_stdout_is_json() {
    let env = TestEnv::new();
    env.connect("E1", "Village Gate");

    env.cmd()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"E1\": \"Village Gate\""));
}

#[test]
fn areas_filters_by_game_and_search() {
    let env = TestEnv::new();

    env.cmd()
        .args(["areas", "--game", "mm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clock Town [MM"))
        .stdout(predicate::str::contains("Forest").not());

    env.cmd()
        .args(["areas", "--search", "well"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Village"))
        .stdout(predicate::str::contains("Market").not());

    env.cmd()
        .args(["areas", "--kind", "town"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Market [OOT, town]"));
}

#[test]
fn reorder_moves_area() {
    let env = TestEnv::new();

    env.cmd()
        .args(["reorder", "clock-town", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved clock-town to position 0."));

    env.cmd()
        .arg("areas")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  0. Clock Town"));
}

#[test]
fn reorder_rejects_unknown_area() {
    let env = TestEnv::new();

    env.cmd()
        .args(["reorder", "vilage", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown area 'vilage'"))
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("'village'"));
}

#[test]
fn entrances_are_sorted_labels() {
    let env = TestEnv::new();

    let output = env
        .cmd()
        .arg("entrances")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).expect("utf8");
    let labels: Vec<&str> = text.lines().collect();
    assert_eq!(labels.first(), Some(&"Clock Town - Clock Tower (clock-tower)"));
    assert_eq!(labels.last(), Some(&"Village - Village Well (village-well)"));
    assert_eq!(labels.len(), 6);
}

#[test]
fn state_path_can_come_from_environment() {
    let env = TestEnv::new();
    let alt_state = env.dir().join("alt.json");

    let mut cmd = cargo_bin_cmd!("entrance-tracker");
    cmd.env("RUST_LOG", "error")
        .env("ENTRANCE_TRACKER_CATALOG", common::fixture_path())
        .env("ENTRANCE_TRACKER_STATE", &alt_state)
        .args(["connect", "E1", "Village Gate"])
        .assert()
        .success();

    assert!(alt_state.exists());
}

#[test]
fn missing_catalog_is_reported() {
    let env = TestEnv::new();

    let mut cmd = cargo_bin_cmd!("entrance-tracker");
    cmd.env("RUST_LOG", "error")
        .arg("--catalog")
        .arg(env.dir().join("missing.json"))
        .arg("--state")
        .arg(&env.state_path)
        .arg("connections")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load the location catalog"));
}
