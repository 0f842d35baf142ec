//! Shared helpers for driving the `biometric` binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

/// Run `biometric` with `stdin` piped in.
///
/// `BIOMETRIC_CONFIG` points at `config` so the developer's own config never
/// leaks into a test; pass a path that does not exist for defaults.
pub fn run_biometric(args: &[&str], stdin: &str, config: &Path) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_biometric"))
        .args(args)
        .env("BIOMETRIC_CONFIG", config)
        .env_remove("BIOMETRIC_LOG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn biometric binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for biometric binary")
}

pub fn stdout_records(output: &Output) -> Vec<Value> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is utf8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
        .collect()
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf8")
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is utf8")
}
