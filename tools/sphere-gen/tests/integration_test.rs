//! Integration tests for sphere-gen
//!
//! Runs the binary inside a temp dir and inspects the files it leaves behind.

use std::path::Path;
use std::process::Output;
use tempfile::tempdir;

const VERTICES_FILE: &str = "sphere_vertices.dat";
const INDICES_FILE: &str = "sphere_indices.dat";

// Helper to run sphere-gen with `dir` as the working directory
fn run_sphere_gen(dir: &Path, args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_sphere-gen"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run sphere-gen")
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_owned)
        .collect()
}

fn assert_usage_exit(output: &Output) {
    assert_eq!(output.status.code(), Some(1), "expected exit status 1");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "stdout was: {stdout}");
}

fn assert_no_output_files(dir: &Path) {
    assert!(!dir.join(VERTICES_FILE).exists(), "vertex file should not exist");
    assert!(!dir.join(INDICES_FILE).exists(), "index file should not exist");
}

/// No arguments prints usage and exits with 1
#[test]
fn test_no_arguments() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = run_sphere_gen(dir.path(), &[]);

    assert_usage_exit(&output);
    assert_no_output_files(dir.path());
}

/// More than one argument prints usage and exits with 1
#[test]
fn test_too_many_arguments() {
    let dir = tempdir().expect("Failed to create temp dir");

    assert_usage_exit(&run_sphere_gen(dir.path(), &["4", "4"]));
    assert_usage_exit(&run_sphere_gen(dir.path(), &["8", "16", "32"]));
    assert_no_output_files(dir.path());
}

/// Flags are not part of the interface
#[test]
fn test_help_flag_is_usage_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    assert_usage_exit(&run_sphere_gen(dir.path(), &["--help"]));
}

/// One resolution argument writes both files with the expected line counts
#[test]
fn test_writes_dat_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = run_sphere_gen(dir.path(), &["4"]);
    assert!(output.status.success(), "sphere-gen 4 failed: {output:?}");

    let vertices = read_lines(&dir.path().join(VERTICES_FILE));
    let indices = read_lines(&dir.path().join(INDICES_FILE));

    // 3 × (n + 1)² scalars, 2 × n × (n + 1) indices
    assert_eq!(vertices.len(), 3 * 5 * 5);
    assert_eq!(indices.len(), 2 * 4 * 5);

    // North pole first, south pole last
    assert_eq!(&vertices[..3], &["0.0", "1.0", "0.0"]);
    assert_eq!(vertices[vertices.len() - 2], "-1.0");

    assert_eq!(&indices[..2], &["0", "5"]);
    assert_eq!(&indices[indices.len() - 2..], &["19", "24"]);
}

/// Every written coordinate parses and lies on the unit sphere
#[test]
fn test_vertices_on_unit_sphere() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = run_sphere_gen(dir.path(), &["16"]);
    assert!(output.status.success(), "sphere-gen 16 failed: {output:?}");

    let values: Vec<f64> = read_lines(&dir.path().join(VERTICES_FILE))
        .iter()
        .map(|line| line.parse().expect("vertex line should be a number"))
        .collect();
    assert_eq!(values.len(), 3 * 17 * 17);

    for v in values.chunks_exact(3) {
        let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((length - 1.0).abs() < 1e-9, "vertex {v:?} has length {length}");
    }

    let vertex_count = 17 * 17;
    for line in read_lines(&dir.path().join(INDICES_FILE)) {
        let index: u32 = line.parse().expect("index line should be an integer");
        assert!(index < vertex_count, "index {index} out of bounds");
    }
}

/// Minimal resolution still produces a (degenerate) sphere
#[test]
fn test_resolution_one() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = run_sphere_gen(dir.path(), &["1"]);
    assert!(output.status.success());

    assert_eq!(read_lines(&dir.path().join(VERTICES_FILE)).len(), 12);
    assert_eq!(read_lines(&dir.path().join(INDICES_FILE)), vec!["0", "2", "1", "3"]);
}

/// Existing files are overwritten
#[test]
fn test_overwrites_existing_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(VERTICES_FILE), "old\n".repeat(500)).unwrap();
    std::fs::write(dir.path().join(INDICES_FILE), "old\n".repeat(500)).unwrap();

    let output = run_sphere_gen(dir.path(), &["2"]);
    assert!(output.status.success());

    let vertices = read_lines(&dir.path().join(VERTICES_FILE));
    assert_eq!(vertices.len(), 3 * 3 * 3);
    assert!(vertices.iter().all(|line| line != "old"));
    assert_eq!(read_lines(&dir.path().join(INDICES_FILE)).len(), 2 * 2 * 3);
}

/// A non-integer resolution is a fatal error
#[test]
fn test_invalid_resolution() {
    let dir = tempdir().expect("Failed to create temp dir");

    for arg in ["abc", "2.5", "-3"] {
        let output = run_sphere_gen(dir.path(), &[arg]);
        assert!(!output.status.success(), "sphere-gen {arg} should fail");
        assert_eq!(output.status.code(), Some(1));
    }
    assert_no_output_files(dir.path());
}

/// Zero divisions is rejected before anything is written
#[test]
fn test_zero_resolution() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = run_sphere_gen(dir.path(), &["0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 1"), "stderr was: {stderr}");
    assert_no_output_files(dir.path());
}
