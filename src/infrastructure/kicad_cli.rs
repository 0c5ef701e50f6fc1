//! kicad-cli Adapter
//!
//! Implements the CadTool port by spawning `kicad-cli`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::domain::ports::{CadTool, ToolRun};
use crate::error::{FabError, FabResult};

/// CadTool backed by the `kicad-cli` executable
#[derive(Debug, Clone)]
pub struct KicadCli {
    program: PathBuf,
}

impl KicadCli {
    /// `program` is a bare name resolved via PATH, or a path to the executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn unavailable(&self, message: impl Into<String>) -> FabError {
        FabError::ToolUnavailable {
            program: self.program.clone(),
            message: message.into(),
        }
    }
}

impl CadTool for KicadCli {
    fn program(&self) -> &Path {
        &self.program
    }

    fn version(&self) -> FabResult<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.unavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(self.unavailable(format!("`--version` returned {}", output.status)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run(&self, args: &[OsString]) -> FabResult<ToolRun> {
        debug!(program = %self.program.display(), ?args, "spawning");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.unavailable(e.to_string()))?;

        let run = ToolRun {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        for line in run.stdout.lines() {
            trace!(target: "kicad_cli", "{}", line);
        }
        for line in run.stderr.lines() {
            debug!(target: "kicad_cli", "{}", line);
        }

        Ok(run)
    }
}
