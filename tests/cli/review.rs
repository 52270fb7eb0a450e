use crate::cli::support::{arbor, create_document, read_json, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_review_appends_to_note() {
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# Cells\n## Membranes\nlipids");

    arbor()
        .arg("review")
        .arg(&doc)
        .args([
            "1.1",
            "--type",
            "flash-cards",
            "--score",
            "0.8",
            "--at",
            "2024-02-03T04:05:06Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recorded flash_cards review of 1.1 (score 0.80, 1 total)",
        ));

    let output = arbor()
        .args(["--format", "json", "review"])
        .arg(&doc)
        .args(["1.1", "--type", "multiple_choice", "--score", "1"])
        .assert()
        .success()
        .get_output()
        .clone();
    let summary = stdout_json(&output.stdout);
    assert_eq!(summary["coordinate"], "1.1");
    assert_eq!(summary["review_type"], "multiple_choice");
    assert_eq!(summary["reviews"], 2);

    let reviews = read_json(&doc)["notes"]["1.1"]["reviews"].clone();
    assert_eq!(reviews.as_array().unwrap().len(), 2);
    assert_eq!(reviews[0]["review_type"], "flash_cards");
    assert_eq!(reviews[0]["score"], 0.8);
    assert_eq!(reviews[0]["timestamp"], "2024-02-03T04:05:06Z");
}

#[test]
fn test_review_rejects_out_of_range_score() {
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A");

    for score in ["1.5", "-0.1"] {
        arbor()
            .arg("review")
            .arg(&doc)
            .args(["1", "--type", "chat", "--score", score])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid score"));
    }
    assert_eq!(read_json(&doc)["notes"]["1"]["reviews"], serde_json::json!([]));
}

#[test]
fn test_review_unknown_type_and_coordinate() {
    let dir = tempdir().unwrap();
    let doc = create_document(dir.path(), "# A");

    arbor()
        .arg("review")
        .arg(&doc)
        .args(["1", "--type", "essay", "--score", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("essay"));

    arbor()
        .arg("review")
        .arg(&doc)
        .args(["1..2", "--type", "chat", "--score", "1"])
        .assert()
        .code(2);

    arbor()
        .arg("review")
        .arg(&doc)
        .args(["4", "--type", "chat", "--score", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: 4"));
}
