// Rust guideline compliant 2026-02-07

//! Regression tests for global output flags.

use std::process::Command;
use tempfile::TempDir;

fn warta(dir: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_warta"))
        .current_dir(dir.path())
        .env_remove("WARTA_LOG")
        .env_remove("WARTA_OUTPUT_FORMAT")
        .args(args)
        .output()
        .expect("run warta")
}

#[test]
fn warta_list_json_flag_outputs_json() {
    let temp_dir = TempDir::new().expect("temp dir");
    assert!(warta(&temp_dir, &["init"]).status.success());

    let output = warta(&temp_dir, &["list", "--json"]);
    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.trim_start().starts_with('{'),
        "expected JSON output, got:\n{}",
        stdout
    );
    assert!(stdout.contains("\"total\""), "expected JSON 'total' field, got:\n{}", stdout);
}

#[test]
fn warta_json_errors_use_envelope() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = warta(&temp_dir, &["show", "abc", "--json"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("json envelope");
    assert_eq!(value["error"]["code"], "repo_not_initialized");
}

#[test]
fn warta_check_denial_exits_nonzero() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = warta(&temp_dir, &["check", "draft", "archived", "--role", "ADMIN", "--format", "plain"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("no transition defined"));
}
