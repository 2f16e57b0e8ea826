//! End-to-end tests for the overscroll-sim CLI.
//!
//! These run the real binary against fixture scenarios and check the
//! printed records, error reporting, and configuration handling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a Command for the overscroll-sim binary.
#[allow(deprecated)]
fn sim_cmd() -> Command {
    Command::cargo_bin("overscroll-sim").unwrap()
}

// =============================================================================
// Basic Usage Tests
// =============================================================================

mod basic_usage {
    use super::*;

    #[test]
    fn test_default_scenario_table() {
        sim_cmd()
            .assert()
            .success()
            .stdout(predicate::str::contains("shift_y"))
            .stdout(predicate::str::contains("dragging"))
            .stdout(predicate::str::contains("releasing"))
            .stdout(predicate::str::contains("finished after"));
    }

    #[test]
    fn test_scenario_file() {
        sim_cmd()
            .arg("tests/fixtures/bounce.toml")
            .assert()
            .success()
            .stdout(predicate::str::contains("absorb"));
    }

    #[test]
    fn test_help() {
        sim_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--fps"))
            .stdout(predicate::str::contains("--json"));
    }
}

// =============================================================================
// JSON Output Tests
// =============================================================================

mod json_output {
    use super::*;

    #[test]
    fn test_json_lines_end_at_rest() {
        let output = sim_cmd()
            .arg("tests/fixtures/bounce.toml")
            .arg("--json")
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let records: Vec<serde_json::Value> = stdout
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert!(!records.is_empty());
        assert!(records.iter().any(|r| r["event"] == "pull"));
        let last = records.last().unwrap();
        assert_eq!(last["shift_y"], 0.0);
        assert_eq!(last["top"], "idle");
        assert_eq!(last["bottom"], "idle");
    }

    #[test]
    fn test_pull_on_bottom_moves_content_up() {
        let output = sim_cmd()
            .arg("tests/fixtures/bounce.toml")
            .arg("--json")
            .output()
            .unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        let first: serde_json::Value =
            serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
        assert_eq!(first["event"], "pull");
        assert!(first["shift_y"].as_f64().unwrap() < 0.0);
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_print_default_config() {
        sim_cmd()
            .arg("--print-config")
            .assert()
            .success()
            .stdout(predicate::str::contains("stiffness = 850"))
            .stdout(predicate::str::contains("bottom_edge_extent = \"width\""));
    }

    #[test]
    fn test_config_file_applied() {
        sim_cmd()
            .arg("--config")
            .arg("tests/fixtures/soft.toml")
            .arg("--print-config")
            .assert()
            .success()
            .stdout(predicate::str::contains("stiffness = 200"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "damping_ratio = -2.0").unwrap();

        sim_cmd()
            .arg("--config")
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }

    #[test]
    fn test_zero_fps_rejected() {
        sim_cmd()
            .arg("--fps")
            .arg("0")
            .assert()
            .failure()
            .stderr(predicate::str::contains("frame rate"));
    }
}

// =============================================================================
// Error Handling Tests
// =============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_scenario_file() {
        sim_cmd()
            .arg("tests/fixtures/does_not_exist.toml")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read"));
    }

    #[test]
    fn test_malformed_scenario() {
        sim_cmd()
            .arg("tests/fixtures/broken.toml")
            .assert()
            .failure()
            .stderr(predicate::str::contains("scenario parse error"));
    }

    #[test]
    fn test_settle_budget_exceeded() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[steps]]
kind = "absorb"
edge = "top"
velocity = 8000

[[steps]]
kind = "settle"
max_frames = 1
"#
        )
        .unwrap();

        sim_cmd()
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("still moving"));
    }
}
