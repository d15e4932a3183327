//! Integration tests for hatchling CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100">
    <rect id="box" x="10" y="10" width="80" height="80"/>
</svg>"#;

fn hatchling(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hatchling"))
        .args(args)
        .output()
        .expect("failed to run hatchling")
}

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn fill_svg_produces_lines() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "square.svg", SQUARE_SVG);

    let output = hatchling(&["fill", &input, "-s", "5", "-a", "0"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<?xml"), "should have XML declaration");
    assert!(stdout.contains(r#"viewBox="0 0 100 100""#));
    assert!(stdout.contains("<line"), "should have line elements");
    assert!(stdout.contains("</svg>"));
}

#[test]
fn fill_json_groups_by_shape() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "square.svg", SQUARE_SVG);

    let output = hatchling(&["fill", &input, "-s", "10", "-a", "0", "--centroid", "50,55", "-f", "json"]);
    let json = stdout_json(&output);

    let shapes = json["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0]["id"], "box");
    assert_eq!(shapes[0]["index"], 0);
    // Rows at y = 15, 25, ..., 85.
    assert_eq!(shapes[0]["segments"].as_array().unwrap().len(), 8);
}

#[test]
fn fill_crosshatch_doubles_segments() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "square.svg", SQUARE_SVG);
    let count = |extra: &[&str]| {
        let mut args = vec!["fill", input.as_str(), "-s", "10", "-a", "0", "--centroid", "55,55", "-f", "json"];
        args.extend_from_slice(extra);
        stdout_json(&hatchling(&args))["shapes"][0]["segments"].as_array().unwrap().len()
    };

    assert_eq!(count(&[]), 8);
    assert_eq!(count(&["--crosshatch"]), 16);
}

#[test]
fn fill_reads_json_polygon_and_writes_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "poly.json", r#"{"polygon": [[0, 0], [1, 0], [1, 1], [0, 1]]}"#);
    let out = dir.path().join("out.json");

    let output = hatchling(&[
        "fill",
        &input,
        "-s",
        "0.25",
        "-a",
        "0",
        "--centroid",
        "0.5,0.625",
        "-f",
        "json",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let segments = json["shapes"][0]["segments"].as_array().unwrap();
    let ys: Vec<f64> = segments.iter().map(|s| s[0][1].as_f64().unwrap()).collect();
    assert_eq!(ys.len(), 4);
    for (y, expected) in ys.iter().zip([0.125, 0.375, 0.625, 0.875]) {
        assert!((y - expected).abs() < 1e-9, "row at {y}, expected {expected}");
    }
}

#[test]
fn fill_uses_job_file_with_flag_override() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "square.svg", SQUARE_SVG);
    let job = write(&dir, "job.yaml", "spacing: 10\nangle: 0\ncentroid: [50, 55]\nstroke: red\n");

    let output = hatchling(&["fill", &input, "--config", &job]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains(r#"stroke="red""#));
    assert_eq!(stdout.matches("<line ").count(), 8);

    let output = hatchling(&["fill", &input, "--config", &job, "-s", "20", "--centroid", "50,60"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Rows at y = 20, 40, 60, 80.
    assert_eq!(stdout.matches("<line ").count(), 4);
}

#[test]
fn fill_rejects_zero_spacing() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "square.svg", SQUARE_SVG);

    let output = hatchling(&["fill", &input, "-s", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("spacing must be positive"));
}

#[test]
fn fill_missing_file_fails() {
    let output = hatchling(&["fill", "does-not-exist.svg"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.svg"));
}

#[test]
fn clip_writes_segments() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "clip.json",
        r#"{
            "polygon": [[0, 0], [1, 0], [1, 1], [0, 1]],
            "line_starts": [[-1, 0.5], [0.5, -1], [5, 5]],
            "line_ends": [[2, 0.5], [0.5, 2], [6, 6]]
        }"#,
    );

    let json = stdout_json(&hatchling(&["clip", &input]));
    let segments = json["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);

    let first = &segments[0];
    assert!(first[0][0].as_f64().unwrap().abs() < 1e-9);
    assert!((first[1][0].as_f64().unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn clip_reports_shape_errors() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "bad.json",
        r#"{"polygon": [[0, 0], [1, 0], [1, 1]], "line_starts": [[0, 0]], "line_ends": [[1, 1], [2, 2]]}"#,
    );

    let output = hatchling(&["clip", &input]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line_ends"));
}

#[test]
fn circles_prints_points() {
    let json = stdout_json(&hatchling(&["circles", "0", "0", "2", "3", "0", "2"]));
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert!((points[0][0].as_f64().unwrap() - 1.5).abs() < 1e-9);
    assert!((points[0][1].as_f64().unwrap() + points[1][1].as_f64().unwrap()).abs() < 1e-9);
}

#[test]
fn circles_accepts_negative_centers() {
    let json = stdout_json(&hatchling(&["circles", "-1", "0", "1", "1", "0", "1"]));
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert!(points[0][0].as_f64().unwrap().abs() < 1e-9);
}

#[test]
fn circles_identical_is_empty() {
    let json = stdout_json(&hatchling(&["circles", "0", "0", "1", "0", "0", "1"]));
    assert_eq!(json["points"].as_array().unwrap().len(), 0);
}

#[test]
fn benchmark_prints_report() {
    let output = hatchling(&["benchmark", "--vertices", "16", "--lines", "100", "--spacing", "5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("HATCHLING BENCHMARK"));
    assert!(stdout.contains("Clip: 100 lines"));
}

#[test]
fn help_lists_subcommands() {
    let output = hatchling(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cmd in ["fill", "clip", "circles", "benchmark"] {
        assert!(stdout.contains(cmd), "help should list '{cmd}'");
    }
    assert!(Path::new(env!("CARGO_BIN_EXE_hatchling")).exists());
}
