//! CadTool port - abstraction over the CAD tool's command-line interface
//!
//! The export use case only ever talks to this trait, so tests can substitute
//! a fake that writes files instead of spawning `kicad-cli`.

use std::ffi::OsString;
use std::path::Path;

use crate::error::FabResult;

/// Outcome of a single tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRun {
    /// Whether the process exited successfully
    pub success: bool,
    /// Exit status as reported by the OS, for error messages
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

impl ToolRun {
    /// A successful run with no output
    pub fn ok() -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and stderr
    pub fn failed(code: i32, stderr: &str) -> Self {
        Self {
            success: false,
            status: format!("exit status: {}", code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

/// Command-line interface of the CAD tool
///
/// Implementations:
/// - `KicadCli` - spawns `kicad-cli`
/// - test fakes that write the expected files directly
pub trait CadTool {
    /// Program path, for diagnostics
    fn program(&self) -> &Path;

    /// Run the tool once and return its version string.
    ///
    /// Fails with `ToolUnavailable` when the tool cannot be run.
    fn version(&self) -> FabResult<String>;

    /// Run the tool with `args`.
    ///
    /// A non-zero exit is reported through `ToolRun::success`, not as an error;
    /// `Err` means the process could not be spawned at all.
    fn run(&self, args: &[OsString]) -> FabResult<ToolRun>;
}
