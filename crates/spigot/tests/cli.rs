use spigot_params::reference::PI_DIGITS;
use std::process::{Command, Output};

fn spigot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spigot"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run spigot")
}

#[test]
fn default_run_prints_reference_digits() {
    let output = spigot(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), PI_DIGITS);
}

#[test]
fn short_run_with_verification() {
    let output = spigot(&["--digits", "10", "--verify"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"314159265358");
}

#[test]
fn non_positive_digit_count_faults() {
    for value in ["0", "-8"] {
        let output = spigot(&["--digits", value]);
        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 1);
        assert!(stdout.starts_with("digit count must be positive"));
    }
}

#[test]
fn timeout_prints_no_digits() {
    let output = spigot(&["--timeout-ms", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "timeout reached before all groups were generated\n"
    );
}
