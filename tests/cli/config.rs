use crate::cli::support::{arbor, stdout_json, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_shows_defaults() {
    arbor()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("content_change_threshold = 0.5"))
        .stdout(predicate::str::contains("depth_decay = 0.9"))
        .stdout(predicate::str::contains("chat = 25.0"));
}

#[test]
fn test_config_json_merges_file() {
    let dir = tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "config.toml",
        "[recall.half_life_days]\nflash_cards = 3.0\n",
    );

    let output = arbor()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .arg("config")
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output.stdout);
    assert_eq!(json["recall"]["half_life_days"]["flash_cards"], 3.0);
    assert_eq!(json["recall"]["half_life_days"]["open_ended"], 16.0);
    assert_eq!(json["reconcile"]["content_change_threshold"], 0.5);
}

#[test]
fn test_config_init_writes_default_file() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("arbor");

    arbor()
        .env("ARBOR_CONFIG_DIR", &config_dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = std::fs::read_to_string(config_dir.join("config.toml")).unwrap();
    assert!(written.contains("[reconcile]"));
    assert!(written.contains("open_ended = 16.0"));

    arbor()
        .env("ARBOR_CONFIG_DIR", &config_dir)
        .args(["config", "--init"])
        .assert()
        .code(2);

    arbor()
        .env("ARBOR_CONFIG_DIR", &config_dir)
        .args(["config", "--init", "--force"])
        .assert()
        .success();
}
