use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use sd_local::CONFIG_PATH_ENV;
use tempfile::tempdir;

/// `config view` on a missing file should create it with the default entry.
#[test]
fn view_creates_default_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".sdlocal").join("config");

    cargo_bin_cmd!("sd-local")
        .env_remove(CONFIG_PATH_ENV)
        .arg("--config")
        .arg(&path)
        .arg("config")
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("* default"))
        .stdout(predicate::str::contains("launcher-image: screwdrivercd/launcher"));

    assert!(path.is_file(), "config should exist at {}", path.display());
}

/// The config path can come from the environment instead of the flag.
#[test]
fn config_path_is_read_from_env() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("env-config");

    cargo_bin_cmd!("sd-local")
        .env(CONFIG_PATH_ENV, &path)
        .arg("config")
        .arg("current")
        .assert()
        .success()
        .stdout("default\n");

    assert!(path.is_file());
}

/// Full create/set/use/delete flow through the binary.
#[test]
fn create_set_use_delete_flow() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config");
    let run = |args: &[&str]| {
        cargo_bin_cmd!("sd-local")
            .env_remove(CONFIG_PATH_ENV)
            .arg("--config")
            .arg(&path)
            .args(args)
            .assert()
    };

    run(&["config", "create", "ci"]).success();
    run(&["config", "set", "api-url", "https://api.example.com", "--name", "ci"]).success();
    run(&["config", "set", "token", "abc123", "--name", "ci"]).success();
    run(&["config", "use", "ci"]).success();
    run(&["config", "delete", "default"]).success();
    run(&["config", "current"]).success().stdout("ci\n");

    let body = fs::read_to_string(&path).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&body).unwrap();
    assert_eq!(value["current"].as_str(), Some("ci"));
    assert_eq!(value["entries"]["ci"]["api-url"].as_str(), Some("https://api.example.com"));
    assert_eq!(value["entries"]["ci"]["token"].as_str(), Some("abc123"));
    assert!(value["entries"].get("default").is_none());
}

/// `config view --json` emits the entries map and current selector.
#[test]
fn view_json_reports_entries() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config");

    let output = cargo_bin_cmd!("sd-local")
        .env_remove(CONFIG_PATH_ENV)
        .arg("--config")
        .arg(&path)
        .args(["config", "view", "--json"])
        .output()
        .expect("run sd-local");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["current"], "default");
    assert_eq!(json["entries"]["default"]["launcher"]["version"], "stable");
}

/// Deleting the current config exits non-zero with the core's message.
#[test]
fn delete_current_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config");

    cargo_bin_cmd!("sd-local")
        .env_remove(CONFIG_PATH_ENV)
        .arg("--config")
        .arg(&path)
        .args(["config", "delete", "default"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config `default` is current config"));
}

/// Unknown keys are rejected.
#[test]
fn set_unknown_key_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config");

    cargo_bin_cmd!("sd-local")
        .env_remove(CONFIG_PATH_ENV)
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "bogus", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key `bogus`"));
}

/// `--verbose` logs debug events, including the core library version, to stderr.
#[test]
fn verbose_logs_core_version() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config");

    cargo_bin_cmd!("sd-local")
        .env_remove(CONFIG_PATH_ENV)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&path)
        .args(["--verbose", "config", "current"])
        .assert()
        .success()
        .stdout("default\n")
        .stderr(predicate::str::contains("starting sd-local"))
        .stderr(predicate::str::contains(sdlocal_core::version()));
}

/// Without `--verbose` debug events stay quiet.
#[test]
fn default_logging_is_quiet() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config");

    cargo_bin_cmd!("sd-local")
        .env_remove(CONFIG_PATH_ENV)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&path)
        .args(["config", "current"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting sd-local").not());
}
