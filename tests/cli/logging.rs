use crate::cli::support::arbor;
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    arbor()
        .args(["--log-level", "debug", "diff", "-", "/dev/null"])
        .write_stdin("x")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    arbor()
        .args(["--log-level", "warn", "diff", "-", "/dev/null"])
        .write_stdin("x")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    arbor()
        .args(["--verbose", "parse", "-"])
        .write_stdin("# A")
        .assert()
        .success()
        .stdout("1 A (h1)\n")
        .stderr(predicate::str::contains("execute_command"));
}

#[test]
fn test_log_json_emits_json_lines() {
    arbor()
        .args(["--log-json", "--log-level", "debug", "parse", "-"])
        .write_stdin("# A")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_arbor_log_env_overrides_flags() {
    arbor()
        .env("ARBOR_LOG", "arbor=debug")
        .args(["--log-level", "error", "parse", "-"])
        .write_stdin("# A")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
