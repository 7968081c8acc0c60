//! Fatal startup paths of the `promping` binary.

use std::process::{Command, Output};

fn promping(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_promping"))
        .args(args)
        .env_remove("PROMPING_CONFIG")
        .env("RUST_LOG", "info")
        .output()
        .expect("binary runs")
}

#[test]
fn zero_interval_refuses_to_start() {
    // a bogus fping path proves validation runs before the tool check
    let output = promping(&["-i", "0", "--fping", "/nonexistent/fping", "-p", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidInterval"), "unexpected stderr: {stderr}");
    assert!(!stderr.contains("ToolMissing"));
}

#[test]
fn missing_fping_refuses_to_start() {
    let output = promping(&["--fping", "/nonexistent/fping", "-p", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ToolMissing"), "unexpected stderr: {stderr}");
    assert!(!stderr.contains("serving metrics"));
}
