//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn polyfft() -> Command {
    let mut cmd = Command::cargo_bin("polyfft").expect("binary not found");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    polyfft()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("schoolbook convolution"))
        .stdout(predicate::str::contains("rounding every component to 10 decimal"));
}

#[test]
fn version_flag() {
    polyfft()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("polyfft"));
}

#[test]
fn worked_examples() {
    polyfft()
        .arg("--examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Example 1:"))
        .stdout(predicate::str::contains("p*q =\n0: -30\n"))
        .stdout(predicate::str::contains("p*q =\n0: 3i\n"))
        .stdout(predicate::str::contains("p*q =\n0: -2\n1: -5\n2: 3\n"))
        .stdout(predicate::str::contains(
            "p*q =\n0: 4 + 8i\n1: 6 + 50i\n2: -6 + 68i\n3: 5 + 27i\n",
        ))
        .stdout(predicate::str::contains("Example 5:"))
        .stdout(predicate::str::contains("5: 10\n"));
}

#[test]
fn worked_examples_quiet() {
    polyfft()
        .args(["--examples", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Example").not())
        .stdout(predicate::str::starts_with("0: -30\n0: 3i\n"));
}

#[test]
fn random_trials_report_summary() {
    polyfft()
        .args(["-n", "3", "--len-a", "8", "--len-b", "5", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("of 3 trials equivalent"));
}

#[test]
fn random_trials_with_recursive_check() {
    polyfft()
        .args([
            "-n",
            "2",
            "--len-a",
            "16",
            "--len-b",
            "9",
            "--seed",
            "7",
            "--recursive-check",
            "-v",
            "--show-mismatches",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("trial 1: 16 x 9 coefficients"));
}

#[test]
fn env_var_iterations() {
    polyfft()
        .env("POLYFFT_ITERATIONS", "2")
        .args(["--len-a", "4", "--len-b", "4", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("of 2 trials equivalent"));
}

#[test]
fn zero_length_operand_is_config_error() {
    polyfft()
        .args(["--len-a", "0"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("operand lengths"));
}

#[test]
fn negative_max_value_is_config_error() {
    polyfft()
        .args(["--max-value=-1"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("product.txt");
    polyfft()
        .args(["--examples", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "0: 1\n1: 4\n2: 7\n3: 10\n4: 13\n5: 10\n");
}

#[test]
fn shell_completion_bash() {
    polyfft()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("polyfft"));
}

#[test]
fn shell_completion_zsh() {
    polyfft()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("polyfft"));
}
