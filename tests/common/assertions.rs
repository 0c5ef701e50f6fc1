//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::fs::File;
use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Entry names of a zip archive, sorted
pub fn zip_entries(path: &Path) -> Vec<String> {
    let file = File::open(path).unwrap_or_else(|e| panic!("open {}: {}", path.display(), e));
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

/// Names of files in `dir` with the given extension
pub fn files_with_extension(dir: &Path, ext: &str) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.path())
                .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == ext))
                .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Assert that a file was exported relative to the project directory.
///
/// # Example
/// ```ignore
/// assert_exported!(env, "output/Gerbers");
/// ```
#[macro_export]
macro_rules! assert_exported {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.exists(),
            "Expected '{}' to exist, but it doesn't.\n\
             Project dir: {:?}\n\
             Files found:\n  {}",
            $path,
            $env.project_dir(),
            $crate::common::list_all_files($env.project_dir()).join("\n  ")
        );
    };
}

/// Assert that a path does NOT exist.
///
/// # Example
/// ```ignore
/// assert_not_exported!(env, "output");
/// ```
#[macro_export]
macro_rules! assert_not_exported {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.\n\
             Project dir: {:?}",
            $path,
            $env.project_dir()
        );
    };
}

/// Assert that command output contains a string.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}', got:\n{}",
            $needle,
            combined
        );
    };
}

/// Assert that a command failed with a non-zero exit code.
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {
        assert!(
            !$result.success && $result.exit_code != 0,
            "Expected command to fail, but it exited {}.\nOutput:\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}

/// Assert that a command succeeded.
#[macro_export]
macro_rules! assert_succeeded {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected command to succeed, but it exited {}.\nOutput:\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}
