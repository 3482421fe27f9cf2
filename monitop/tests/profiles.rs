//! Tests for profile load/save through the binary (non-interactive paths only).
//! Each test gets its own XDG_CONFIG_HOME via the child environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_monitop(config_home: &Path, args: &[&str]) -> (bool, String) {
    let exe = env!("CARGO_BIN_EXE_monitop");
    let output = Command::new(exe)
        .env("XDG_CONFIG_HOME", config_home)
        .args(args)
        .output()
        .expect("run monitop");
    let ok = output.status.success();
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    (ok, text)
}

fn profiles_path(config_home: &Path) -> PathBuf {
    config_home.join("monitop").join("profiles.json")
}

#[test]
fn test_profile_created_on_first_use() {
    let td = tempfile::tempdir().unwrap();
    // Provide profile + url => should create profiles.json and exit before any network
    let (_ok, out) = run_monitop(
        td.path(),
        &["--profile", "unittest", "http://example:1", "--dry-run"],
    );
    let data = fs::read_to_string(profiles_path(td.path())).expect("profiles.json created");
    assert!(
        data.contains("unittest"),
        "profiles.json missing profile entry: {data}"
    );
    assert!(
        out.contains("resolved http://example:1/"),
        "dry run should report the resolved URL: {out}"
    );
}

#[test]
fn test_profile_overwrite_only_when_changed() {
    let td = tempfile::tempdir().unwrap();
    // Initial create
    let (_ok, _out) = run_monitop(td.path(), &["--profile", "prod", "http://one:1", "--dry-run"]);
    let first = fs::read_to_string(profiles_path(td.path())).unwrap();
    // Re-run identical (should not duplicate or corrupt)
    let (_ok2, _out2) =
        run_monitop(td.path(), &["--profile", "prod", "http://one:1", "--dry-run"]);
    let second = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert_eq!(first, second, "Profile file changed despite identical input");
    // Overwrite with different URL using --save (no prompt path)
    let (_ok3, _out3) = run_monitop(
        td.path(),
        &["--profile", "prod", "--save", "http://two:1", "--dry-run"],
    );
    let third = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(third.contains("two"), "Updated URL not written: {third}");
}

#[test]
fn test_profile_tls_ca_persisted() {
    let td = tempfile::tempdir().unwrap();
    let (_ok, _out) = run_monitop(
        td.path(),
        &[
            "--profile",
            "secureX",
            "--tls-ca",
            "/tmp/cert.pem",
            "https://host:8443",
            "--dry-run",
        ],
    );
    let data = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(data.contains("secureX"));
    assert!(data.contains("cert.pem"));
}

#[test]
fn test_saved_profile_resolves_by_name() {
    let td = tempfile::tempdir().unwrap();
    let (_ok, _out) = run_monitop(
        td.path(),
        &["--profile", "lab", "http://lab:8080", "--dry-run"],
    );
    // Second run: name only, URL comes from the stored entry
    let (_ok2, out2) = run_monitop(td.path(), &["--profile", "lab", "--dry-run"]);
    assert!(
        out2.contains("resolved http://lab:8080/"),
        "stored profile not resolved: {out2}"
    );
}
