use crate::cli::support::{arbor, read_json, stdout_json, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_create_writes_document() {
    let dir = tempdir().unwrap();
    let md = write_file(
        dir.path(),
        "bio.md",
        "# Biology\ncells\n## Mitosis\nsplitting\n## Meiosis\n",
    );
    let doc = dir.path().join("bio.json");

    arbor()
        .arg("create")
        .arg(&md)
        .arg("--out")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").and(predicate::str::contains("(3 notes)")));

    let json = read_json(&doc);
    assert_eq!(json["title"], "Biology");
    assert_eq!(
        json["content"],
        "# Biology\ncells\n## Mitosis\nsplitting\n## Meiosis\n"
    );

    let notes = json["notes"].as_object().unwrap();
    assert_eq!(notes.len(), 3);
    assert_eq!(notes["1"]["children"], serde_json::json!(["1.1", "1.2"]));
    assert_eq!(notes["1.1"]["content"], "splitting");
    assert_eq!(notes["1.1"]["edits"], serde_json::json!([]));
    assert_eq!(notes["1.1"]["reviews"], serde_json::json!([]));
    assert!(notes["1.1"].get("recall_probability").is_none());
}

#[test]
fn test_create_json_output_from_stdin() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("nested").join("doc.json");

    let output = arbor()
        .args(["--format", "json", "create", "-", "--out"])
        .arg(&doc)
        .write_stdin("# Title\n## Part")
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output.stdout);
    assert_eq!(json["title"], "Title");
    assert_eq!(json["notes"], 2);
    assert!(doc.exists());
}

#[test]
fn test_create_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let md = write_file(dir.path(), "a.md", "# A");
    let doc = write_file(dir.path(), "doc.json", "{}");

    arbor()
        .arg("create")
        .arg(&md)
        .arg("--out")
        .arg(&doc)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    arbor()
        .arg("create")
        .arg(&md)
        .arg("--out")
        .arg(&doc)
        .arg("--force")
        .assert()
        .success();
    assert_eq!(read_json(&doc)["title"], "A");
}

#[test]
fn test_create_quiet() {
    let dir = tempdir().unwrap();
    let md = write_file(dir.path(), "a.md", "# A");

    arbor()
        .args(["-q", "create"])
        .arg(&md)
        .arg("--out")
        .arg(dir.path().join("doc.json"))
        .assert()
        .success()
        .stdout("");
}
