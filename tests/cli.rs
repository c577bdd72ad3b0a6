mod common;

use common::synthetic_image::write_checkerboard;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn line_extract() -> Command {
    Command::new(env!("CARGO_BIN_EXE_line_extract"))
}

fn extract_from_config() -> Command {
    Command::new(env!("CARGO_BIN_EXE_extract_from_config"))
}

/// `output/` beside the built executable, where the CLI writes by default.
fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_BIN_EXE_line_extract"))
        .parent()
        .expect("executable has a parent directory")
        .join("output")
}

#[test]
fn wrong_argument_count_fails_with_usage() {
    let out = line_extract().arg("only_one.png").output().expect("spawn");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid command-line arguments"), "{stderr}");
    assert!(stderr.contains("Usage: line_extract"), "{stderr}");
}

#[test]
fn missing_input_fails_with_absolute_path() {
    let out = line_extract()
        .args(["missing_input_c41d.jpg", "50", "100"])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing_input_c41d.jpg"), "{stderr}");
    assert!(stderr.contains("not found"), "{stderr}");
    assert!(!stderr.contains("Usage:"), "{stderr}");
}

#[test]
fn inverted_thresholds_fail_without_usage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_checkerboard(dir.path(), "cli_inverted_board.png");
    let out = line_extract()
        .arg(&input)
        .args(["200", "100"])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("must not exceed"), "{stderr}");
    assert!(!stderr.contains("Usage:"), "{stderr}");
    assert!(!default_output_dir()
        .join("cli_inverted_board_200_100.png")
        .exists());
}

#[test]
fn non_numeric_threshold_is_reported_as_validation_error() {
    let out = line_extract()
        .args(["a.png", "low", "100"])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("thresholds must be integers"), "{stderr}");
}

#[test]
fn success_prints_trace_and_writes_beside_executable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_checkerboard(dir.path(), "cli_success_board.png");
    let expected = default_output_dir().join("cli_success_board_50_100.png");
    let _ = fs::remove_file(&expected);

    let out = line_extract()
        .arg(&input)
        .args(["50", "100"])
        .output()
        .expect("spawn");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    let rule = "=".repeat(60);
    assert_eq!(lines.len(), 4, "{stdout}");
    assert_eq!(lines[0], rule);
    assert_eq!(lines[1], format!("args: ({:?}, 50, 100)", input));
    assert!(lines[2].starts_with("result: "), "{stdout}");
    assert!(lines[2].ends_with("cli_success_board_50_100.png\""), "{stdout}");
    assert_eq!(lines[3], rule);

    let edges = image::open(&expected).expect("edge map decodes").into_luma8();
    assert!(edges.as_raw().iter().all(|&v| v == 0 || v == 255));
    fs::remove_file(&expected).expect("cleanup");
}

#[cfg(unix)]
#[test]
fn non_utf8_input_name_is_processed() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_checkerboard(dir.path(), OsStr::from_bytes(b"cli_ph\xffoto.png"));
    let expected = default_output_dir().join(OsStr::from_bytes(b"cli_ph\xffoto_50_100.png"));
    let _ = fs::remove_file(&expected);

    let out = line_extract()
        .arg(&input)
        .args(["50", "100"])
        .output()
        .expect("spawn");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(expected.is_file());
    fs::remove_file(&expected).expect("cleanup");
}

#[test]
fn config_run_writes_edge_map_and_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_checkerboard(dir.path(), "board.png");
    let out_dir = dir.path().join("out");
    let summary_path = out_dir.join("summary.json");
    let config_path = dir.path().join("config.json");
    let config = serde_json::json!({
        "input": input,
        "thresholds": { "lower": 40, "upper": 120 },
        "output": { "directory": out_dir, "summary_json": summary_path },
    });
    fs::write(&config_path, config.to_string()).expect("write config");

    let out = extract_from_config()
        .arg(&config_path)
        .output()
        .expect("spawn");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let edge_map = out_dir.join("board_40_120.png");
    assert!(edge_map.is_file());

    let summary: Value =
        serde_json::from_str(&fs::read_to_string(&summary_path).expect("summary written"))
            .expect("summary is JSON");
    assert_eq!(summary["output"], Value::from(edge_map.to_string_lossy().into_owned()));
    assert_eq!(summary["width"], 96);
    assert_eq!(summary["height"], 64);
    assert_eq!(summary["thresholds"]["lower"], 40);
    assert_eq!(summary["thresholds"]["upper"], 120);
    assert!(summary["edgePixelCount"].as_u64().expect("count") > 0);
    let labels: Vec<&str> = summary["timings"]["stages"]
        .as_array()
        .expect("stages")
        .iter()
        .map(|s| s["label"].as_str().expect("label"))
        .collect();
    assert_eq!(labels, ["decode", "canny", "encode"]);
    assert!(summary["timings"]["totalMs"].as_f64().is_some());
}

#[test]
fn config_run_rejects_inverted_thresholds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_checkerboard(dir.path(), "board.png");
    let config_path = dir.path().join("config.json");
    let config = serde_json::json!({
        "input": input,
        "thresholds": { "lower": 120, "upper": 40 },
        "output": { "directory": dir.path().join("out") },
    });
    fs::write(&config_path, config.to_string()).expect("write config");

    let out = extract_from_config()
        .arg(&config_path)
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    assert!(!dir.path().join("out").exists());
}
