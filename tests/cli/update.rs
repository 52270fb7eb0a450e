use crate::cli::support::{arbor, create_document, read_json, stdout_json, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_update_keeps_history_of_edited_section() {
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A\nX\n## A1\nY");

    arbor()
        .arg("review")
        .arg(&doc)
        .args(["1.1", "--type", "chat", "--score", "1"])
        .assert()
        .success();

    let md = write_file(dir.path(), "v2.md", "# A\nX changed\n## A1\nY");
    arbor()
        .arg("update")
        .arg(&doc)
        .arg(&md)
        .assert()
        .success()
        .stdout(predicate::str::contains("+8 -0 chars"));

    let json = read_json(&doc);
    let notes = &json["notes"];
    assert_eq!(notes["1"]["content"], "X changed");
    assert_eq!(notes["1"]["edits"].as_array().unwrap().len(), 1);
    assert_eq!(notes["1"]["edits"][0]["added_chars"], 8);
    assert_eq!(notes["1"]["edits"][0]["deleted_chars"], 0);
    assert_eq!(notes["1.1"]["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(notes["1.1"]["edits"], serde_json::json!([]));
}

#[test]
fn test_update_follows_sections_that_moved() {
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A\nalpha text\n# B\nbeta text");

    arbor()
        .arg("review")
        .arg(&doc)
        .args(["2", "--type", "open-ended", "--score", "0.5"])
        .assert()
        .success();

    let output = arbor()
        .args(["--format", "json", "update"])
        .arg(&doc)
        .arg("-")
        .write_stdin("# New\nfresh stuff here\n# A\nalpha text\n# B\nbeta text")
        .assert()
        .success()
        .get_output()
        .clone();

    let summary = stdout_json(&output.stdout);
    assert_eq!(summary["changed"], true);
    assert_eq!(summary["inherited"], 2);
    assert_eq!(summary["fresh"], 1);

    let notes = read_json(&doc)["notes"].clone();
    assert_eq!(notes["1"]["title"], "New");
    assert_eq!(notes["1"]["reviews"], serde_json::json!([]));
    assert_eq!(notes["2"]["title"], "A");
    assert_eq!(notes["3"]["title"], "B");
    assert_eq!(notes["3"]["reviews"][0]["review_type"], "open_ended");
}

#[test]
fn test_update_unchanged_text() {
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A\nbody");
    let before = std::fs::read_to_string(&doc).unwrap();

    arbor()
        .arg("update")
        .arg(&doc)
        .arg("-")
        .write_stdin("# A\nbody")
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    assert_eq!(std::fs::read_to_string(&doc).unwrap(), before);
}

#[test]
fn test_update_threshold_flag_and_config() {
    let rewrite = "# Renamed\nalpha text, revised";

    // Default threshold: too much change, history is dropped
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A\nalpha text");
    arbor()
        .arg("review")
        .arg(&doc)
        .args(["1", "-t", "chat", "-s", "1"])
        .assert()
        .success();
    arbor()
        .arg("update")
        .arg(&doc)
        .arg("-")
        .write_stdin(rewrite)
        .assert()
        .success();
    assert_eq!(read_json(&doc)["notes"]["1"]["reviews"], serde_json::json!([]));

    // Raised threshold on the command line
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A\nalpha text");
    arbor()
        .arg("review")
        .arg(&doc)
        .args(["1", "-t", "chat", "-s", "1"])
        .assert()
        .success();
    arbor()
        .arg("update")
        .arg(&doc)
        .arg("-")
        .args(["--threshold", "1.0"])
        .write_stdin(rewrite)
        .assert()
        .success();
    assert_eq!(
        read_json(&doc)["notes"]["1"]["reviews"]
            .as_array()
            .unwrap()
            .len(),
        1
    );

    // Raised threshold from a config file
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A\nalpha text");
    let config = write_file(
        dir.path(),
        "config.toml",
        "[reconcile]\ncontent_change_threshold = 1.0\n",
    );
    arbor()
        .arg("review")
        .arg(&doc)
        .args(["1", "-t", "chat", "-s", "1"])
        .assert()
        .success();
    arbor()
        .arg("--config")
        .arg(&config)
        .arg("update")
        .arg(&doc)
        .arg("-")
        .write_stdin(rewrite)
        .assert()
        .success();
    assert_eq!(
        read_json(&doc)["notes"]["1"]["reviews"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_update_rejects_bad_threshold() {
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A");

    arbor()
        .arg("update")
        .arg(&doc)
        .arg("-")
        .args(["--threshold", "0"])
        .write_stdin("# B")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid threshold"));
}

#[test]
fn test_update_missing_document() {
    let dir = tempdir().unwrap();

    let output = arbor()
        .args(["--format", "json", "update"])
        .arg(dir.path().join("missing.json"))
        .arg("-")
        .write_stdin("# A")
        .assert()
        .code(3)
        .get_output()
        .clone();

    let json = stdout_json(&output.stderr);
    assert_eq!(json["error"]["type"], "document_not_found");
}
