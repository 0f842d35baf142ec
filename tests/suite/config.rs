//! Config file handling for the binary

use std::fs;

use crate::common::{run_biometric, stderr_text, stdout_records, stdout_text};

#[test]
fn context_table_from_config_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[contexts]\n\"11\" = \"no-enrolled-credentials\"\n").unwrap();

    let input = concat!(
        r#"{"success":false,"error_code":11}"#,
        "\n",
        r#"{"success":false,"error_code":"11","context":"other"}"#,
        "\n",
    );
    let output = run_biometric(&["classify"], input, &config);

    let records = stdout_records(&output);
    assert_eq!(records[0]["outcome"], "authentication_not_set");
    assert_eq!(records[1]["outcome"], "authentication_error");
    assert_eq!(records[1]["error_code"], "11");
}

#[test]
fn output_format_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\nformat = \"text\"\n").unwrap();

    let output = run_biometric(
        &["classify"],
        "{\"success\":false,\"context\":\"no_hardware\"}\n",
        &config,
    );
    assert_eq!(
        stdout_text(&output),
        "1\tbiometric feature unavailable\tuse_passcode\n"
    );

    let output = run_biometric(
        &["classify", "--format", "json"],
        "{\"success\":true}\n",
        &config,
    );
    assert_eq!(stdout_records(&output)[0]["outcome"], "authentication_succeeded");
}

#[test]
fn broken_default_config_falls_back_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "invalid toml [").unwrap();

    let output = run_biometric(&["classify"], "{\"success\":true}\n", &config);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_text(&output).contains("continuing with defaults"));
    assert_eq!(stdout_records(&output).len(), 1);
}

#[test]
fn explicit_config_must_load() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let output = run_biometric(
        &["--config", missing.to_str().unwrap(), "classify"],
        "{\"success\":true}\n",
        &dir.path().join("none.toml"),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("failed to read config"));
}

#[test]
fn unknown_context_in_explicit_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[contexts]\n\"7\" = \"lockout\"\n").unwrap();

    let output = run_biometric(
        &["classify", "--config", config.to_str().unwrap()],
        "",
        &dir.path().join("none.toml"),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("unknown context"));
}
