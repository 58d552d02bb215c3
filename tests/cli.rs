//! End-to-end tests for the mindful binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mindful(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mindful").unwrap();
    cmd.env("MINDFUL_HOME", home.path())
        .env_remove("MINDFUL_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_breathe_one_cycle_json() {
    let home = TempDir::new().unwrap();
    let output = mindful(&home)
        .args(["breathe", "--ticks", "14", "--save", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let phases: Vec<_> = value["transitions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| (t["tick"].as_u64().unwrap(), t["to"].as_str().unwrap().to_string()))
        .collect();
    assert_eq!(
        phases,
        vec![
            (4, "hold".to_string()),
            (8, "exhale".to_string()),
            (14, "inhale".to_string()),
        ]
    );
    assert_eq!(value["final"]["phase"], "inhale");
    assert_eq!(value["final"]["active"], false);
    assert_eq!(value["saved"]["config"]["exhale"], 6);
}

#[test]
fn test_breathe_custom_pattern_pretty() {
    let home = TempDir::new().unwrap();
    mindful(&home)
        .args(["breathe", "-i", "2", "-H", "1", "-e", "3", "--ticks", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXHALE"));
}

#[test]
fn test_breathe_zero_duration_fails() {
    let home = TempDir::new().unwrap();
    mindful(&home)
        .args(["breathe", "--inhale", "0", "--ticks", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 1 second"));
}

#[test]
fn test_breathe_ticks_out_of_range() {
    let home = TempDir::new().unwrap();
    mindful(&home)
        .args(["breathe", "-i", "1", "-H", "1", "-e", "1", "--ticks", "4294967295"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());

    mindful(&home)
        .args(["breathe", "--ticks", "86400", "-o", "json"])
        .assert()
        .success();
}

#[test]
fn test_resources() {
    let home = TempDir::new().unwrap();
    mindful(&home)
        .arg("resources")
        .assert()
        .success()
        .stdout(predicate::str::contains("741741"));
}

#[test]
fn test_affirm_all_json() {
    let home = TempDir::new().unwrap();
    let output = mindful(&home)
        .args(["affirm", "--all", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 5);
}

#[test]
fn test_config_init_and_show() {
    let home = TempDir::new().unwrap();
    mindful(&home)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("config.yaml").exists());

    mindful(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    mindful(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inhale: 4"));
}

#[test]
fn test_config_default_output_json() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    mindful(&home)
        .arg("resources")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_invalid_config_pattern_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "breathing:\n  pattern:\n    inhale: 4\n    hold: 0\n    exhale: 6\n",
    )
    .unwrap();

    mindful(&home).arg("affirm").assert().code(1);
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    mindful(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("breathe"));
}
