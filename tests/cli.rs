//! Command-line contract: stdout lines, exit codes and the JSON report

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const OPEN_ROW: &str = "3 3\n1\n###\n  #\n###\n";

fn file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn mirror_judge(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mirror-judge"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

/// Judge a problem/solution pair given as text, with extra flags appended
fn judge(problem: &str, solution: &str, extra: &[&str]) -> Output {
    let problem = file(problem);
    let solution = file(solution);
    let mut args = vec![problem.path().as_os_str(), solution.path().as_os_str()];
    args.extend(extra.iter().map(std::ffi::OsStr::new));
    mirror_judge(&args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn exit_code(output: &Output) -> i32 {
    output.status.code().unwrap()
}

#[test]
fn test_no_arguments_prints_usage_and_succeeds() {
    let output = mirror_judge(&[]);
    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn test_one_argument_prints_usage_and_succeeds() {
    let problem = file(OPEN_ROW);
    let output = mirror_judge(&[problem.path().as_os_str()]);
    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn test_valid_solution_prints_ok() {
    let output = judge(OPEN_ROW, OPEN_ROW, &[]);
    assert_eq!(exit_code(&output), 0);
    assert_eq!(stdout(&output), "OK\n");
}

#[test]
fn test_missing_budget_line_exits_1() {
    let output = judge("3 3\n###\n  #\n###\n", OPEN_ROW, &[]);
    assert_eq!(exit_code(&output), 1);
    assert!(stdout(&output).starts_with("Error 1: "));
}

#[test]
fn test_missing_solution_file_exits_1() {
    let problem = file(OPEN_ROW);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.out");
    let output = mirror_judge(&[problem.path().as_os_str(), missing.as_os_str()]);
    assert_eq!(exit_code(&output), 1);
    assert!(stdout(&output).starts_with("Error 1: "));
}

#[test]
fn test_removed_wall_exits_2() {
    let output = judge(OPEN_ROW, "3 3\n1\n## \n  #\n###\n", &[]);
    assert_eq!(exit_code(&output), 2);
    assert!(stdout(&output).starts_with("Error 2: "));
}

#[test]
fn test_unknown_symbol_exits_2() {
    let output = judge(OPEN_ROW, "3 3\n1\n###\n ?#\n###\n", &[]);
    assert_eq!(exit_code(&output), 2);
}

#[test]
fn test_over_budget_exits_3() {
    let output = judge(
        "3 4\n1\n####\n   #\n####\n",
        "3 4\n1\n####\n //#\n####\n",
        &[],
    );
    assert_eq!(exit_code(&output), 3);
    assert_eq!(
        stdout(&output),
        "Error 3: too many mirrors: 2 placed, budget is 1\n"
    );
}

#[test]
fn test_unlit_crystal_exits_4() {
    let board = "3 4\n0\n#*##\n   #\n####\n";
    let output = judge(board, board, &[]);
    assert_eq!(exit_code(&output), 4);
    assert_eq!(stdout(&output), "Error 4: not all crystals lit: 1 remaining\n");
}

#[test]
fn test_open_board_exits_5() {
    let board = "3 3\n0\n   \n   \n   \n";
    let output = judge(board, board, &[]);
    assert_eq!(exit_code(&output), 5);
    assert!(stdout(&output).starts_with("Error 5: laser never reaches a wall"));
}

#[test]
fn test_unreadable_config_exits_1() {
    let config = file("laser = [");
    let config_path = config.path().to_str().unwrap();
    let output = judge(OPEN_ROW, OPEN_ROW, &["--config", config_path]);
    assert_eq!(exit_code(&output), 1);
    assert!(stdout(&output).starts_with("Error 1: malformed config file"));
}

#[test]
fn test_config_moves_laser_entry() {
    // Entering at (1, 1) still runs east into the wall
    let config = file("[laser]\nrow = 1\ncol = 1\nheading = \"east\"\n");
    let config_path = config.path().to_str().unwrap();
    let output = judge(OPEN_ROW, OPEN_ROW, &["--config", config_path, "--format", "json"]);
    assert_eq!(exit_code(&output), 0);
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["steps"], 2);
}

#[test]
fn test_json_report_on_success() {
    let output = judge(OPEN_ROW, OPEN_ROW, &["--format", "json"]);
    assert_eq!(exit_code(&output), 0);
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["code"], 0);
    assert_eq!(report["status"], "ok");
    assert_eq!(report["message"], "OK");
    assert_eq!(report["mirrors"], 0);
    assert_eq!(report["budget"], 1);
    assert_eq!(report["steps"], 3);
    assert_eq!(report["crystals_cleared"], 0);
}

#[test]
fn test_json_report_on_failure() {
    let board = "3 3\n0\n   \n   \n   \n";
    let output = judge(board, board, &["--format", "json"]);
    assert_eq!(exit_code(&output), 5);
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["code"], 5);
    assert_eq!(report["status"], "error");
    assert!(report["message"].as_str().unwrap().starts_with("laser never reaches a wall"));
    for field in ["mirrors", "budget", "steps", "crystals_cleared"] {
        assert!(report[field].is_null(), "{field} should be null");
    }
}
