//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from any config or environment on the host.
fn verbquiz(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("verbquiz").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("VERBQUIZ_MAX_QUESTIONS")
        .env_remove("VERBQUIZ_VERBS")
        .env_remove("VERBQUIZ_SEED");
    cmd
}

/// Twelve verbs that all share the answers "x" and "y", so any draw order
/// accepts the same input.
fn uniform_verbs(dir: &Path) -> std::path::PathBuf {
    let entries: Vec<[String; 3]> = (0..12)
        .map(|i| [format!("verb{i}"), "x".to_string(), "y".to_string()])
        .collect();
    let path = dir.join("uniform.json");
    std::fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();
    path
}

#[test]
fn play_perfect_round() {
    let dir = TempDir::new().unwrap();
    let verbs = uniform_verbs(dir.path());

    verbquiz(dir.path())
        .arg("play")
        .arg("--verbs")
        .arg(&verbs)
        .write_stdin("x\ny\n".repeat(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 10/10"))
        .stdout(predicate::str::contains(
            "Your score is 20. Perfect score! Well done indeed.",
        ));
}

#[test]
fn play_disaster_round() {
    let dir = TempDir::new().unwrap();
    let verbs = uniform_verbs(dir.path());

    verbquiz(dir.path())
        .args(["play", "--questions", "5", "--verbs"])
        .arg(&verbs)
        .write_stdin("a\nb\n".repeat(5))
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 5/5"))
        .stdout(predicate::str::contains("Quite the disaster, really."));
}

#[test]
fn play_reprompts_on_blank_answer() {
    let dir = TempDir::new().unwrap();
    let verbs = uniform_verbs(dir.path());

    verbquiz(dir.path())
        .args(["play", "--questions", "1", "--verbs"])
        .arg(&verbs)
        .write_stdin("x\n\ny\n1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Both forms are needed."))
        .stdout(predicate::str::contains("You got that right!"));
}

#[test]
fn play_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let verbs = uniform_verbs(dir.path());
    std::fs::write(
        dir.path().join("verbquiz.toml"),
        format!(
            "max_questions = 2\nverbs_path = {:?}\n",
            verbs.display().to_string()
        ),
    )
    .unwrap();

    verbquiz(dir.path())
        .arg("play")
        .write_stdin("x\ny\nx\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 questions per round"))
        .stdout(predicate::str::contains("Your score is 4."));
}

#[test]
fn play_with_builtin_list_abandons_on_eof() {
    let dir = TempDir::new().unwrap();

    verbquiz(dir.path())
        .args(["play", "--seed", "3"])
        .write_stdin("went\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1/10"))
        .stdout(predicate::str::contains("Round abandoned."));
}

#[test]
fn rust_log_enables_debug_output() {
    let dir = TempDir::new().unwrap();

    verbquiz(dir.path())
        .args(["play", "--seed", "1"])
        .env("RUST_LOG", "verbquiz=debug")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("drew verb"));
}

#[test]
fn default_log_level_is_quiet() {
    let dir = TempDir::new().unwrap();

    verbquiz(dir.path())
        .args(["play", "--seed", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("drew verb").not());
}

#[test]
fn play_rejects_round_longer_than_list() {
    let dir = TempDir::new().unwrap();
    let verbs = uniform_verbs(dir.path());

    verbquiz(dir.path())
        .args(["play", "--questions", "50", "--verbs"])
        .arg(&verbs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("only 12 verbs available"));
}

#[test]
fn validate_builtin_list() {
    let dir = TempDir::new().unwrap();

    verbquiz(dir.path()).arg("init").assert().success();

    verbquiz(dir.path())
        .args(["validate", "--verbs", "verbs-list.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("108 verbs"))
        .stdout(predicate::str::contains("Verb list valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.json");
    std::fs::write(&path, r#"[["go", "went", "gone"], ["go", "went", "gone"]]"#).unwrap();

    verbquiz(dir.path())
        .arg("validate")
        .arg("--verbs")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate verb: go"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_malformed_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[["go", "went"]]"#).unwrap();

    verbquiz(dir.path())
        .arg("validate")
        .arg("--verbs")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed verb entry #0"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    verbquiz(dir.path())
        .args(["validate", "--verbs", "nonexistent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn list_table_and_json() {
    let dir = TempDir::new().unwrap();

    verbquiz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("dreamed/dreamt"))
        .stdout(predicate::str::contains("108 verbs"));

    let output = verbquiz(dir.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let verbs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(verbs.as_array().unwrap().len(), 108);
    assert_eq!(verbs[0]["present"], "arise");

    verbquiz(dir.path())
        .args(["list", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    verbquiz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created verbquiz.toml"))
        .stdout(predicate::str::contains("Created verbs-list.json"));

    assert!(dir.path().join("verbquiz.toml").exists());
    assert!(dir.path().join("verbs-list.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    verbquiz(dir.path()).arg("init").assert().success();

    verbquiz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
