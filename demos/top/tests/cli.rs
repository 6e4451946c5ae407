//! End-to-end tests running the compiled `top` binary.
//!
//! Each run starts from an empty environment so stray `top_*` variables on
//! the host cannot leak into the settings.

use assert_cmd::Command;
use rstest::rstest;

struct Outcome {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn run_top(env: &[(&str, &str)], args: &[&str]) -> Outcome {
    #[expect(
        deprecated,
        clippy::expect_used,
        reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
    )]
    let mut cmd = Command::cargo_bin("top").expect("binary should exist");
    cmd.env_clear();
    cmd.env("RUST_BACKTRACE", "0");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.args(args);

    #[expect(clippy::expect_used, reason = "test panics are acceptable")]
    let output = cmd.output().expect("command should execute");
    Outcome {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).replace("\r\n", "\n"),
        stderr: String::from_utf8_lossy(&output.stderr).replace("\r\n", "\n"),
    }
}

#[rstest]
#[case(&["--help"])]
#[case(&["-h"])]
#[case(&["--HELP"])]
fn help_lists_every_flag(#[case] args: &[&str]) {
    let outcome = run_top(&[], args);
    assert_eq!(outcome.code, Some(0));
    assert!(outcome.stdout.starts_with("top v0.3.0\nUsage:\n"), "{}", outcome.stdout);
    for line in [
        "\t--help, -h\n",
        "\t--memory-units, -m\n",
        "\t\t\tValues: KB, MB, KiB, MiB\n",
        "\t--version, -v\n",
    ] {
        assert!(outcome.stdout.contains(line), "missing {line:?}:\n{}", outcome.stdout);
    }
}

#[rstest]
#[case(&["-v"])]
#[case(&["--version"])]
fn version_prints_package_version(#[case] args: &[&str]) {
    let outcome = run_top(&[], args);
    assert_eq!(outcome.code, Some(0));
    assert_eq!(outcome.stdout, "0.3.0\n");
}

#[rstest]
#[case(&[], &[], "KiB")]
#[case(&[], &["--memory-units=mb"], "MB")]
#[case(&[("top_memory-units", "MiB")], &[], "MiB")]
#[case(&[("TOP_MEMORY-UNITS", "kb")], &[], "KB")]
#[case(&[("top_memory-units", "MiB")], &["-m=KB"], "KB")]
fn memory_units_follow_flags_then_environment(
    #[case] env: &[(&str, &str)],
    #[case] args: &[&str],
    #[case] unit: &str,
) {
    let outcome = run_top(env, args);
    assert_eq!(outcome.code, Some(0), "stderr: {}", outcome.stderr);
    assert!(
        outcome.stdout.starts_with(&format!("memory-units: {unit} (")),
        "{}",
        outcome.stdout
    );
}

#[rstest]
#[case(&["--unknown"], "The command-line parameter '--unknown' is invalid...")]
#[case(&["--memory-units", "MB"], "The command-line parameter 'MB' is invalid...")]
#[case(&["-q"], "The command-line parameter '-q' is invalid...")]
#[case(&["-m=GB"], "invalid value 'gb' for 'memory-units'")]
fn rejected_input_exits_with_failure(#[case] args: &[&str], #[case] message: &str) {
    let outcome = run_top(&[], args);
    assert_eq!(outcome.code, Some(1));
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.contains(message), "stderr: {}", outcome.stderr);
}

#[test]
fn invalid_environment_value_is_rejected() {
    let outcome = run_top(&[("top_memory-units", "parsecs")], &[]);
    assert_eq!(outcome.code, Some(1));
    assert!(outcome.stderr.contains("'parsecs'"), "stderr: {}", outcome.stderr);
}
