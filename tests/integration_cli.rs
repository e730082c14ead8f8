use std::path::PathBuf;
use std::process::{Command, Output};

fn get_cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_arc-cli"))
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(get_cli_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_solves_basic_arc() {
    let output = run_cli(&[
        "--lower", "100",
        "--upper", "150",
        "--space", "10",
        "--guess", "10",
        "--precision", "0.01",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ARC SOLUTION"), "Should contain solution table: {}", stdout);
    assert!(stdout.contains("Radius"));
    assert!(stdout.contains("Sagitta"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Calculated in"), "Should log iteration count: {}", stderr);
}

#[test]
fn test_cli_output_format_json() {
    let output = run_cli(&[
        "--lower", "50",
        "--upper", "80",
        "--space", "20",
        "--precision", "0.1",
        "--output", "json",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Should be JSON format");

    let upper_arc = value["upper_arc"].as_f64().unwrap();
    assert!((upper_arc - 80.0).abs() <= 0.1);
    assert!(value["iterations"].as_u64().unwrap() >= 1);
    assert!(value["radius"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_cli_output_format_csv() {
    let output = run_cli(&[
        "--lower", "10",
        "--upper", "20",
        "--space", "5",
        "--output", "csv",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("radius,theta,upper_arc,sagitta,half_chord,iterations"));
    let row = lines.next().expect("Should have a data row");
    assert!(row.starts_with("5.000000,"), "row was {}", row);
    assert!(row.ends_with(",2"), "row was {}", row);
}

#[test]
fn test_cli_rejects_upper_shorter_than_lower() {
    let output = run_cli(&["--lower", "10", "--upper", "5", "--space", "1"]);

    assert!(!output.status.success(), "Should fail when upper < lower");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be longer than lower"), "stderr: {}", stderr);
}

#[test]
fn test_cli_rejects_missing_arcs() {
    // lower and upper default to -1
    let output = run_cli(&[]);

    assert!(!output.status.success(), "Should fail without arcs");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be positive"), "stderr: {}", stderr);
}

#[test]
fn test_cli_rejects_small_guess() {
    let output = run_cli(&["--lower", "10", "--upper", "20", "--space", "1", "--guess", "2"]);

    assert!(!output.status.success(), "Should fail with guess <= 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be larger than 2"), "stderr: {}", stderr);
}

#[test]
fn test_cli_reports_non_convergence() {
    let output = run_cli(&[
        "--lower", "100",
        "--upper", "150",
        "--space", "10",
        "--max-iterations", "3",
    ]);

    assert!(!output.status.success(), "Should fail when the cap is hit");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Did not converge"), "stderr: {}", stderr);
}

#[test]
fn test_cli_verbose_traces_steps() {
    let output = run_cli(&[
        "--lower", "50",
        "--upper", "80",
        "--space", "20",
        "--precision", "0.1",
        "--verbose",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Too big"), "stderr: {}", stderr);
    assert!(stderr.contains("Too small"), "stderr: {}", stderr);
}

#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--lower", "--upper", "--space", "--guess", "--precision"] {
        assert!(stdout.contains(flag), "Should list {}", flag);
    }
}

#[test]
fn test_cli_invalid_output_format() {
    let output = run_cli(&["--lower", "10", "--upper", "20", "--output", "xml"]);

    assert!(!output.status.success(), "Unknown output format should fail");
}
