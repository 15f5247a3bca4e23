//! End-to-end runs of the compiled binary
//!
//! Only inputs that never touch the network are used here: empty entries and
//! malformed URLs are decided before any socket is opened.

use std::process::{Command, Output};

fn run(vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hostcheck"))
        .env_clear()
        .envs(vars.iter().copied())
        .output()
        .expect("binary should start")
}

fn stdout_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout should be JSON lines"))
        .collect()
}

#[test]
fn test_only_empty_entries_exits_zero() {
    let output = run(&[
        ("TELNET_HOSTS", " "),
        ("HTTP_REQUESTS", " , "),
        ("LOG_LEVEL", "info"),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert!(lines
        .iter()
        .any(|l| l["message"] == "Successfully connected to 0 out of 3 hosts"));
    assert_eq!(lines.iter().filter(|l| l["level"] == "WARN").count(), 3);
}

#[test]
fn test_invalid_url_exits_one() {
    let output = run(&[
        ("TELNET_HOSTS", " "),
        ("HTTP_REQUESTS", "invalidurl.com"),
        ("LOG_LEVEL", "INFO"),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert!(lines
        .iter()
        .any(|l| l["message"] == "failed to connect to host : invalidurl.com"));
}

#[test]
fn test_log_level_filters_stdout() {
    let output = run(&[
        ("TELNET_HOSTS", " "),
        ("HTTP_REQUESTS", "invalidurl.com"),
        ("LOG_LEVEL", "error"),
    ]);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["level"], "ERROR");
}

#[test]
fn test_missing_env_terminates_abnormally() {
    let output = run(&[("TELNET_HOSTS", "localhost:1"), ("LOG_LEVEL", "info")]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("missing required environment variable HTTP_REQUESTS"));
}

#[test]
fn test_invalid_log_level_terminates_abnormally() {
    let output = run(&[
        ("TELNET_HOSTS", "localhost:1"),
        ("HTTP_REQUESTS", "http://example.com"),
        ("LOG_LEVEL", "blah"),
    ]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains(
        "loglevel : BLAH not valid, must be one of : DEBUG ERROR FATAL INFO PANIC TRACE WARN"
    ));
}

#[test]
fn test_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_hostcheck"))
        .arg("--version")
        .output()
        .expect("binary should start");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
