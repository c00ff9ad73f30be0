//! Smoke tests for the tapcalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn tapcalc() -> Command {
    Command::cargo_bin("tapcalc").expect("tapcalc binary should exist")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    tapcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    tapcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("plot"));
}

#[test]
fn test_no_args_fails() {
    tapcalc().assert().failure();
}

// ============================================================================
// Eval
// ============================================================================

#[test]
fn test_eval_multiply() {
    tapcalc()
        .args(["eval", "2", "×", "5", "="])
        .assert()
        .success()
        .stdout("10\n2 × 5 =\n");
}

#[test]
fn test_eval_with_variable() {
    tapcalc()
        .args(["eval", "--var", "M=7", "M", "+", "1", "="])
        .assert()
        .success()
        .stdout("8\nM + 1 =\n");
}

#[test]
fn test_eval_json() {
    tapcalc()
        .args(["--format", "json", "eval", "3", "+", "4", "√"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_pending":true"#))
        .stdout(predicate::str::contains("3 + √(4) ..."));
}

#[test]
fn test_eval_bad_binding() {
    tapcalc()
        .args(["eval", "--var", "oops", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid variable binding"));
}

#[test]
fn test_eval_unknown_symbol_is_ignored() {
    tapcalc()
        .args(["eval", "2", "%", "+", "3", "="])
        .assert()
        .success()
        .stdout("5\n2 + 3 =\n");
}

// ============================================================================
// Repl, plot, ops
// ============================================================================

#[test]
fn test_repl_reads_stdin() {
    tapcalc()
        .arg("repl")
        .write_stdin("9 √\nquit\n")
        .assert()
        .success()
        .stdout("3\n√(9) =\n");
}

#[test]
fn test_repl_survives_rejected_line() {
    tapcalc()
        .arg("repl")
        .write_stdin("1 ÷ 0 =\n→M\n2 + 3 =\n")
        .assert()
        .success()
        .stdout("+∞\n1 ÷ 0 =\n5\n1 ÷ 0 + 3 =\n")
        .stderr(predicate::str::contains("Invalid number: +∞"));
}

#[test]
fn test_plot_too_many_steps_fails() {
    tapcalc()
        .args(["plot", "--steps", "2000000", "M"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many samples"));
}

#[test]
fn test_plot() {
    tapcalc()
        .args(["plot", "--from", "-1", "--to", "1", "--steps", "3", "M", "x²"])
        .assert()
        .success()
        .stdout("-1\t1\n0\t0\n1\t1\n");
}

#[test]
fn test_ops() {
    tapcalc()
        .arg("ops")
        .assert()
        .success()
        .stdout(predicate::str::contains("√\tunary"))
        .stdout(predicate::str::contains("rand\trandom"));
}
