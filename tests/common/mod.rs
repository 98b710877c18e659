//! Shared test infrastructure for integration tests.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Output};

fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

/// Path to a checked-in fixture under tests/fixtures/.
pub fn fixture(name: &str) -> PathBuf {
    manifest_dir().join("tests/fixtures").join(name)
}

/// Run the built binary with `args` and a quiet log filter.
pub fn run_tablesuite<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_tablesuite"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run tablesuite")
}

/// Assert success and return stdout as text.
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "tablesuite failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
