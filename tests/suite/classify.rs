//! `biometric classify` over stdin and files

use std::fs;

use crate::common::{run_biometric, stderr_text, stdout_records, stdout_text};

const SCENARIOS: &str = r#"{"success":true}
{"success":false,"context":"no-enrolled-credentials"}
{"success":false,"context":"hardware-unavailable"}
{"success":false,"errorCode":"7","context":"other"}
"#;

#[test]
fn classifies_documented_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_biometric(&["classify"], SCENARIOS, &dir.path().join("none.toml"));

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    let records = stdout_records(&output);
    let outcomes: Vec<_> = records.iter().map(|r| r["outcome"].clone()).collect();
    assert_eq!(
        outcomes,
        [
            "authentication_succeeded",
            "authentication_not_set",
            "hardware_unavailable",
            "authentication_error",
        ]
    );
    assert_eq!(records[3]["error_code"], "7");
}

#[test]
fn context_beats_error_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_biometric(
        &["classify"],
        "{\"success\":false,\"error_code\":\"12\",\"context\":\"no-hardware\"}\n",
        &dir.path().join("none.toml"),
    );

    let records = stdout_records(&output);
    assert_eq!(records[0]["outcome"], "feature_unavailable");
    assert!(records[0].get("error_code").is_none());
}

#[test]
fn unknown_context_keeps_code_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_biometric(
        &["classify"],
        "{\"success\":false,\"error_code\":\" 0x0B \",\"context\":\"sensor-dirty\"}\n",
        &dir.path().join("none.toml"),
    );

    let records = stdout_records(&output);
    assert_eq!(records[0]["outcome"], "authentication_error");
    assert_eq!(records[0]["error_code"], " 0x0B ");
}

#[test]
fn non_string_context_falls_back_to_error_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_biometric(
        &["classify"],
        "{\"success\":false,\"error_code\":\"7\",\"context\":5}\n",
        &dir.path().join("none.toml"),
    );

    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    let records = stdout_records(&output);
    assert_eq!(records[0]["outcome"], "authentication_error");
    assert_eq!(records[0]["error_code"], "7");
}

#[test]
fn malformed_line_exits_one_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_biometric(
        &["classify"],
        "{\"success\":true}\n{broken\n{\"success\":false,\"context\":\"auth-failed\"}\n",
        &dir.path().join("none.toml"),
    );

    assert_eq!(output.status.code(), Some(1));
    let records = stdout_records(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["line"], 3);
    assert_eq!(records[1]["action"], "retry");
    assert!(stderr_text(&output).contains("Skipping malformed signal"));
}

#[test]
fn reads_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("signals.jsonl");
    fs::write(&input, SCENARIOS).unwrap();

    let output = run_biometric(
        &["classify", input.to_str().unwrap()],
        "",
        &dir.path().join("none.toml"),
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_records(&output).len(), 4);
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.jsonl");

    let output = run_biometric(
        &["classify", missing.to_str().unwrap()],
        "",
        &dir.path().join("none.toml"),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("failed to open"));
}

#[test]
fn text_format_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_biometric(
        &["classify", "--format", "text"],
        "{\"success\":true}\n",
        &dir.path().join("none.toml"),
    );

    assert_eq!(stdout_text(&output), "1\tauthentication succeeded\tproceed\n");
}

#[test]
fn summary_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_biometric(
        &["classify", "--summary"],
        SCENARIOS,
        &dir.path().join("none.toml"),
    );

    let stderr = stderr_text(&output);
    assert!(stderr.contains("authentication_succeeded\t1"));
    assert!(stderr.contains("feature_unavailable\t0"));
    assert!(stderr.contains("malformed\t0"));
    assert_eq!(stdout_records(&output).len(), 4);
}
