//! Common test utilities

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Get the path to the changemap binary
pub fn changemap_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("changemap");
    path
}

/// Run changemap with the given arguments
pub fn run_changemap(args: &[&str]) -> Output {
    Command::new(changemap_bin())
        .args(args)
        .output()
        .expect("failed to execute changemap")
}

/// Write a JSON config file into `dir` and return its path
pub fn write_config(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

/// Config with a short domain and a three-color detection-year palette
pub const SMALL_CONFIG: &str = r##"{
    "start_year": 2000,
    "end_year": 2009,
    "yod_palette": ["#0000ff", "#00ff00", "#ff0000"]
}"##;

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
