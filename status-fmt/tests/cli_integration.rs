//! CLI integration tests for status-fmt

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to escape path for TOML on Windows
fn escape_path_for_toml(path: &str) -> String {
    path.replace('\\', "\\\\")
}

/// Helper to create a test environment with its own config file
fn setup_test_env(extra: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config_content = format!(
        r#"
[clipboard]
osc52_fallback = false
{}
"#,
        extra
    );
    fs::write(&config_path, config_content).unwrap();

    (temp_dir, config_path.to_string_lossy().to_string())
}

fn status_fmt(config_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("status-fmt").unwrap();
    cmd.env("STATUSMAKER_CONFIG", config_path);
    cmd
}

#[test]
fn test_help_flag_output() {
    let mut cmd = Command::cargo_bin("status-fmt").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Format a multi-part status update"))
        .stdout(predicate::str::contains("--entry"))
        .stdout(predicate::str::contains("--headline"))
        .stdout(predicate::str::contains("--copy"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("EXIT CODES"));
}

#[test]
fn test_version_flag_output() {
    let mut cmd = Command::cargo_bin("status-fmt").unwrap();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("status-fmt"));
}

#[test]
fn test_entries_from_flags() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .args(["--headline", "Weekly", "-e", "🚀|Shipped|Done", "--entry", "🐛|Fixed"])
        .assert()
        .success()
        .stdout("*Weekly*\n\n*🚀 Shipped*\nDone\n*🐛 Fixed*\n");
}

#[test]
fn test_body_newline_escapes() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .args(["--no-headline", "-e", "✅|Release|Tagged\\nPublished"])
        .assert()
        .success()
        .stdout("*✅ Release*\nTagged\nPublished\n");
}

#[test]
fn test_default_headline_from_config() {
    let (_temp_dir, config_path) = setup_test_env("[defaults]\nheadline = \"Team update\"");

    status_fmt(&config_path)
        .args(["-e", "🚀|Shipped"])
        .assert()
        .success()
        .stdout("*Team update*\n\n*🚀 Shipped*\n");
}

#[test]
fn test_headline_conflicts_with_no_headline() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .args(["--headline", "x", "--no-headline", "-e", "🚀|Shipped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_toml_document_with_extra_flag_entry() {
    let (temp_dir, config_path) = setup_test_env("");
    let doc_path = temp_dir.path().join("status.toml");
    fs::write(
        &doc_path,
        r#"
headline = "Sprint 12"

[[entries]]
emoji = "🎉"
title = "Launched"
body = "Went live at noon"
"#,
    )
    .unwrap();

    status_fmt(&config_path)
        .arg(&doc_path)
        .args(["-e", "📅|Next|Planning on Monday"])
        .assert()
        .success()
        .stdout("*Sprint 12*\n\n*🎉 Launched*\nWent live at noon\n*📅 Next*\nPlanning on Monday\n");
}

#[test]
fn test_json_document_from_stdin() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .write_stdin(r#"{"headline": "", "entries": [{"emoji": "🔥", "title": "Hotfix"}]}"#)
        .assert()
        .success()
        .stdout("*🔥 Hotfix*\n");
}

#[test]
fn test_dash_reads_stdin() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .arg("-")
        .write_stdin("headline = \"Daily\"\n[[entries]]\ntitle = \"Standup\"\n")
        .assert()
        .success()
        .stdout("*Daily*\n\n*Standup*\n");
}

#[test]
fn test_no_entries_is_invalid_input() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .args(["--headline", "Empty"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No entries given"));
}

#[test]
fn test_empty_entry_list_in_document() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .write_stdin(r#"{"headline": "x", "entries": []}"#)
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_malformed_document() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .write_stdin("entries = [")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Malformed status document"));
}

#[test]
fn test_malformed_entry_flag() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .args(["-e", "no separator"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("EMOJI|TITLE|BODY"));
}

#[test]
fn test_missing_file() {
    let (temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .arg(temp_dir.path().join("nope.toml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_bad_config() {
    let (_temp_dir, config_path) = setup_test_env("[ui]\nsound = \"loud\"");

    status_fmt(&config_path)
        .args(["-e", "🚀|Shipped"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_json_output() {
    let (_temp_dir, config_path) = setup_test_env("");

    let output = status_fmt(&config_path)
        .args(["--headline", "Weekly", "-e", "🚀|Shipped|Done", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"], "*Weekly*\n\n*🚀 Shipped*\nDone");
    assert_eq!(json["headline"], "Weekly");
    assert_eq!(json["entries"][0]["emoji"], "🚀");
    assert_eq!(json["entries"][0]["title"], "Shipped");
    assert_eq!(json["entries"][0]["body"], "Done");
}

#[test]
fn test_invalid_format_rejected() {
    let (_temp_dir, config_path) = setup_test_env("");

    status_fmt(&config_path)
        .args(["-e", "🚀|Shipped", "--format", "csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[cfg(unix)]
#[test]
fn test_copy_with_configured_command() {
    let temp_dir = TempDir::new().unwrap();
    let clipboard_path = temp_dir.path().join("clipboard.txt");
    let (_config_dir, config_path) = setup_test_env(&format!(
        "command = \"tee {}\"",
        escape_path_for_toml(&clipboard_path.to_string_lossy())
    ));

    status_fmt(&config_path)
        .args(["--headline", "Weekly", "-e", "🚀|Shipped", "--copy"])
        .assert()
        .success()
        .stdout("*Weekly*\n\n*🚀 Shipped*\n")
        .stderr(predicate::str::contains("Copied to clipboard"));

    let copied = fs::read_to_string(&clipboard_path).unwrap();
    assert_eq!(copied, "*Weekly*\n\n*🚀 Shipped*");
}

#[cfg(unix)]
#[test]
fn test_copy_rejected_by_clipboard() {
    let (_temp_dir, config_path) = setup_test_env("command = \"false\"");

    status_fmt(&config_path)
        .args(["-e", "🚀|Shipped", "--copy"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Clipboard error"))
        .stderr(predicate::str::contains("Copied to clipboard").not());
}

#[cfg(unix)]
#[test]
fn test_verbose_copy_logs_events() {
    let temp_dir = TempDir::new().unwrap();
    let clipboard_path = temp_dir.path().join("clipboard.txt");
    let (_config_dir, config_path) = setup_test_env(&format!(
        "command = \"tee {}\"",
        escape_path_for_toml(&clipboard_path.to_string_lossy())
    ));

    status_fmt(&config_path)
        .env_remove("RUST_LOG")
        .env_remove("STATUSMAKER_LOG_FORMAT")
        .args(["-v", "-e", "🚀|Shipped", "--copy"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"type\":\"copy_started\""))
        .stderr(predicate::str::contains("\"type\":\"copy_completed\""));
}

#[cfg(unix)]
#[test]
fn test_verbose_copy_logs_failure_event() {
    let (_temp_dir, config_path) = setup_test_env("command = \"false\"");

    status_fmt(&config_path)
        .env_remove("RUST_LOG")
        .env_remove("STATUSMAKER_LOG_FORMAT")
        .args(["-v", "-e", "🚀|Shipped", "--copy"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"copy_failed\""));
}

#[test]
fn test_copy_with_missing_command() {
    let (_temp_dir, config_path) = setup_test_env("command = \"statusmaker-no-such-clipboard\"");

    status_fmt(&config_path)
        .args(["-e", "🚀|Shipped", "--copy"])
        .assert()
        .failure()
        .code(2);
}
