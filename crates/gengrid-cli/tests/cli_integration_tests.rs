//! CLI integration tests
//!
//! These tests run the built `gengrid` binary and check stdout, stderr and
//! the exit status.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gengrid"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_two_by_two_floor() {
    let output = run(&["2", "2", "floor"]);

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_of(&output),
        "<grid type=\"rectangular\" width=\"2\" height=\"2\" neighbors=\"8\" wrapping=\"false\">\n\
         <gridrow>\n\
         <gridcell>floor</gridcell>\n\
         <gridcell>floor</gridcell>\n\
         </gridrow>\n\
         <gridrow>\n\
         <gridcell>floor</gridcell>\n\
         <gridcell>floor</gridcell>\n\
         </gridrow>\n\
         </grid>\n"
    );
}

#[test]
fn test_cli_zero_width_rows() {
    let output = run(&["0", "3", "wall"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("<gridrow>\n</gridrow>\n").count(), 3);
    assert!(!stdout.contains("gridcell"));
}

#[test]
fn test_cli_output_is_well_formed() {
    let output = run(&["4", "5", "alive"]);
    let stdout = stdout_of(&output);

    let doc = roxmltree::Document::parse(&stdout).unwrap();
    let rows = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("gridrow"))
        .count();
    assert_eq!(rows, 5);
}

#[test]
fn test_cli_repeat_runs_are_identical() {
    let first = run(&["3", "3", "empty"]);
    let second = run(&["3", "3", "empty"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cli_missing_cell_type_fails_without_output() {
    let output = run(&["2", "2"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "No partial document expected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_MISSING_ARGUMENT"), "stderr: {}", stderr);
    assert!(stderr.contains("cellType"));
}

#[test]
fn test_cli_no_arguments_names_width() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("width"));
}

#[test]
fn test_cli_lenient_parsing_coerces_to_zero() {
    let output = run(&["abc", "2", "x"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("<grid type=\"rectangular\" width=\"0\" height=\"2\""));
    assert_eq!(stdout.matches("<gridrow>").count(), 2);
    assert!(!stdout.contains("<gridcell>"));
}

#[test]
fn test_cli_negative_width_is_clamped() {
    let output = run(&["-3", "1", "x"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("width=\"0\""));
    assert!(!stdout.contains("<gridcell>"));
}

#[test]
fn test_cli_hyphenated_cell_type_is_emitted_verbatim() {
    let output = run(&["1", "1", "-dead"]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_of(&output),
        "<grid type=\"rectangular\" width=\"1\" height=\"1\" neighbors=\"8\" wrapping=\"false\">\n\
         <gridrow>\n\
         <gridcell>-dead</gridcell>\n\
         </gridrow>\n\
         </grid>\n"
    );
}

#[test]
fn test_cli_hyphenated_non_numeric_width_is_zero() {
    let output = run(&["-x", "1", "a"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("width=\"0\""));
    assert_eq!(stdout.matches("<gridrow>").count(), 1);
    assert!(!stdout.contains("<gridcell>"));
}

#[test]
fn test_cli_double_dash_cell_type_with_flags() {
    let output = run(&["--escape", "2", "1", "--dead&gone"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output)
            .matches("<gridcell>--dead&amp;gone</gridcell>")
            .count(),
        2
    );
}

#[test]
fn test_cli_options_after_positionals_are_values() {
    let output = run(&["1", "1", "floor", "--strict"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("<gridcell>floor</gridcell>"));
    assert!(!stdout_of(&output).contains("--strict"));
}

#[test]
fn test_cli_strict_rejects_non_numeric() {
    let output = run(&["--strict", "2x", "2", "floor"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_NUMERIC_ARGUMENT"), "stderr: {}", stderr);
}

#[test]
fn test_cli_escape_flag() {
    let output = run(&["--escape", "1", "1", "a&b"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("<gridcell>a&amp;b</gridcell>"));
}

#[test]
fn test_cli_extra_arguments_are_ignored() {
    let output = run(&["1", "1", "floor", "surplus"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).matches("<gridcell>floor</gridcell>").count(), 1);
    assert!(!stdout_of(&output).contains("surplus"));
}

#[test]
fn test_cli_logs_stay_off_stdout() {
    let output = run(&["--log-profile", "development", "1", "1", "floor"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("<grid "));
    assert!(!stdout.contains("emit_grid"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("emit_grid"));
}
