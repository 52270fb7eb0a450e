use crate::cli::support::{arbor, create_document, read_json, stdout_json, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

fn reviewed_document(dir: &std::path::Path) -> std::path::PathBuf {
    let doc = create_document(dir, "# Parent\np\n## Child\nc\n# Other\no");
    arbor()
        .arg("review")
        .arg(&doc)
        .args([
            "1",
            "--type",
            "chat",
            "--score",
            "1",
            "--at",
            "2024-01-01T00:00:00Z",
        ])
        .assert()
        .success();
    doc
}

fn recall_of(notes: &serde_json::Value, coordinate: &str) -> f64 {
    notes
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["coordinate"] == coordinate)
        .and_then(|n| n["recall_probability"].as_f64())
        .unwrap()
}

#[test]
fn test_recall_human_output() {
    let dir = tempdir().unwrap();
    let doc = reviewed_document(dir.path());

    arbor()
        .arg("recall")
        .arg(&doc)
        .args(["--at", "2024-01-26T00:00:00Z"])
        .assert()
        .success()
        .stdout("1 Parent  0.500\n  1.1 Child  0.450\n2 Other  0.000\n");
}

#[test]
fn test_recall_json_and_not_persisted() {
    let dir = tempdir().unwrap();
    let doc = reviewed_document(dir.path());

    let output = arbor()
        .args(["--format", "json", "recall"])
        .arg(&doc)
        .args(["--at", "2024-01-01T00:00:00Z"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output.stdout);
    assert_eq!(json["at"], "2024-01-01T00:00:00Z");
    let notes = &json["notes"];
    assert!((recall_of(notes, "1") - 1.0).abs() < 1e-9);
    assert!((recall_of(notes, "1.1") - 0.9).abs() < 1e-9);
    assert!(recall_of(notes, "2").abs() < 1e-9);

    let stored = read_json(&doc);
    assert!(stored["notes"]["1"].get("recall_probability").is_none());
}

#[test]
fn test_recall_uses_config() {
    let dir = tempdir().unwrap();
    let doc = reviewed_document(dir.path());
    let config = write_file(
        dir.path(),
        "config.toml",
        "[recall]\ndepth_decay = 0.5\n\n[recall.half_life_days]\nchat = 5.0\n",
    );

    arbor()
        .arg("--config")
        .arg(&config)
        .arg("recall")
        .arg(&doc)
        .args(["--at", "2024-01-06T00:00:00Z"])
        .assert()
        .success()
        .stdout("1 Parent  0.500\n  1.1 Child  0.250\n2 Other  0.000\n");
}

#[test]
fn test_recall_invalid_config() {
    let dir = tempdir().unwrap();
    let doc = reviewed_document(dir.path());
    let config = write_file(dir.path(), "config.toml", "[recall]\ndepth_decay = 2.0\n");

    arbor()
        .arg("--config")
        .arg(&config)
        .arg("recall")
        .arg(&doc)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_recall_config_from_env_dir() {
    let dir = tempdir().unwrap();
    let doc = reviewed_document(dir.path());
    let config_dir = dir.path().join("conf");
    std::fs::create_dir_all(&config_dir).unwrap();
    write_file(&config_dir, "config.toml", "[recall]\ndepth_decay = 0.0\n");

    arbor()
        .env("ARBOR_CONFIG_DIR", &config_dir)
        .arg("recall")
        .arg(&doc)
        .args(["--at", "2024-01-01T00:00:00Z"])
        .assert()
        .success()
        .stdout("1 Parent  1.000\n  1.1 Child  0.000\n2 Other  0.000\n");
}
