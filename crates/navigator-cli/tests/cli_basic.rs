//! Basic CLI E2E tests.
//!
//! Tests run the built `navigator` binary with an isolated home directory
//! and verify stdout, stderr, and exit codes.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_navigator"));
    cmd.env("HOME", home)
        .env_remove("NAVIGATOR_ENV")
        .env_remove("RUST_LOG");
    cmd
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = command(home)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    stdout
}

#[test]
fn test_steps_lists_wizard_order() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["steps", "--json"]);
    let steps: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let ids: Vec<&str> = steps
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        [
            "welcome",
            "personal_info",
            "competencies",
            "motivation",
            "environment",
            "future_values",
            "personality",
            "results"
        ]
    );
}

#[test]
fn test_catalog_single_kind() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["catalog", "environments"]);
    assert!(stdout.contains("[environment]"));
    assert!(stdout.contains("workshop"));
    assert!(stdout.contains("nature"));
    assert!(!stdout.contains("math_logic"));
}

#[test]
fn test_evaluate_practical_sheet_json() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["evaluate", &fixture("practical.toml"), "--json"],
    );
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["pathway"], "vocational_training");
    assert_eq!(
        result["strengths"],
        serde_json::json!(["practical_work", "technical_understanding", "creativity"])
    );
    assert_eq!(
        result["improvements"],
        serde_json::json!(["language", "writing", "math_logic"])
    );
    assert_eq!(result["breakdown"]["practical_environment"], true);
}

#[test]
fn test_evaluate_academic_sheet_text() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["evaluate", &fixture("academic.json")]);
    assert!(stdout.contains("Results for Ben"));
    assert!(stdout.contains("Recommendation: Academic track"));
    assert!(stdout.contains("Biggest strength: Curiosity"));
    assert!(stdout.contains("Next steps"));
}

#[test]
fn test_evaluate_incomplete_sheet_fails() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) =
        run_cli(home.path(), &["evaluate", &fixture("incomplete.json")]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error: Validation error: missing required field 'environment'"));
}

#[test]
fn test_evaluate_missing_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["evaluate", "/nonexistent/sheet.json"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Answer sheet error: Failed to read answer sheet"));
}

#[test]
fn test_export_writes_record() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("results/anna.json");
    let stdout = run_cli_success(
        home.path(),
        &["export", &fixture("practical.toml"), "--out", out.to_str().unwrap()],
    );
    assert!(stdout.contains("Results saved to"));

    let record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(record["recommendation"], "vocational_training");
    assert_eq!(record["profile"]["personal"]["name"], "Anna Muster");
    assert_eq!(record["profile"]["values"]["further_education"], 2);
    assert_eq!(record["profile"]["personality"]["problem_solving_style"], "hands_on");
}

#[test]
fn test_export_defaults_to_configured_directory() {
    let home = tempfile::tempdir().unwrap();
    let exports = home.path().join("exports");
    run_cli_success(
        home.path(),
        &["config", "set", "export.directory", exports.to_str().unwrap()],
    );
    run_cli_success(home.path(), &["config", "set", "export.pretty", "false"]);
    run_cli_success(home.path(), &["export", &fixture("academic.json")]);

    let files: Vec<_> = std::fs::read_dir(&exports).unwrap().collect();
    assert_eq!(files.len(), 1);
    let path = files[0].as_ref().unwrap().path();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("navigator_Ben_"), "{name}");
    assert!(!std::fs::read_to_string(&path).unwrap().contains('\n'));
}

#[test]
fn test_config_get_set_reset() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "display.show_progress"]).trim(),
        "true"
    );

    run_cli_success(home.path(), &["config", "set", "display.show_progress", "false"]);
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "display.show_progress"]).trim(),
        "false"
    );

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "display.colour", "red"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"));

    run_cli_success(home.path(), &["config", "reset"]);
    let listed: serde_json::Value =
        serde_json::from_str(&run_cli_success(home.path(), &["config", "list"])).unwrap();
    assert_eq!(listed["display"]["show_progress"], true);
}

#[test]
fn test_interactive_run_with_quit() {
    let home = tempfile::tempdir().unwrap();
    let mut child = command(home.path())
        .arg("run")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"\nAnna\n:quit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[1/7] Who are you?"));
    assert!(stdout.contains("Bye."));
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["completions", "bash"]);
    assert!(stdout.contains("navigator"));
}
