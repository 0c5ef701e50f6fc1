//! Check Use Case
//!
//! Read-only preflight: is the tool runnable, is there exactly one project,
//! are its design files present, and is there Gerber output to archive.
//! Never writes to disk.

use std::path::Path;

use serde::Serialize;

use crate::domain::layout::OutputLayout;
use crate::domain::ports::CadTool;
use crate::domain::project::Project;
use crate::domain::value_objects::ConfigWarning;
use crate::infrastructure::fs::list_files;

/// Result of a single check
#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    /// Name of the check
    pub name: String,
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
    /// Recommendation for fixing issues
    pub recommendation: Option<String>,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// Result of the check operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckReport {
    /// Check if all checks passed (no errors)
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    fn push(&mut self, name: &str, status: CheckStatus, message: String, fix: Option<&str>) {
        match status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(CheckItem {
            name: name.to_string(),
            status,
            message,
            recommendation: fix.map(str::to_string),
        });
    }
}

/// Run all preflight checks.
pub fn check_environment<T: CadTool>(
    tool: &T,
    project_root: &Path,
    config_warnings: &[ConfigWarning],
) -> CheckReport {
    let mut report = CheckReport::default();

    match tool.version() {
        Ok(version) => report.push(
            "tool",
            CheckStatus::Pass,
            format!("{} {}", tool.program().display(), version),
            None,
        ),
        Err(e) => report.push(
            "tool",
            CheckStatus::Error,
            e.to_string(),
            Some("Install KiCad 8 or newer, or set FABEXPORT_KICAD_CLI to the kicad-cli path"),
        ),
    }

    for warning in config_warnings {
        report.push(
            "config",
            CheckStatus::Warning,
            warning.to_string(),
            Some("Remove or rename the key"),
        );
    }

    let project = match Project::discover(project_root) {
        Ok(project) => {
            report.push(
                "project",
                CheckStatus::Pass,
                format!("{} ({})", project.name(), project.descriptor().display()),
                None,
            );
            project
        }
        Err(e) => {
            report.push(
                "project",
                CheckStatus::Error,
                e.to_string(),
                Some("Run from the directory containing exactly one .kicad_pro file, or pass -C <dir>"),
            );
            return report;
        }
    };

    match project.design_files() {
        Ok(files) => report.push(
            "design files",
            CheckStatus::Pass,
            format!("{}, {}", files.schematic.display(), files.board.display()),
            None,
        ),
        Err(e) => report.push(
            "design files",
            CheckStatus::Error,
            e.to_string(),
            Some("The schematic and board must share the project file's name"),
        ),
    }

    let layout = OutputLayout::for_project(&project);
    let gerbers = layout.gerbers_dir();
    let count = if gerbers.is_dir() {
        list_files(&gerbers).map(|f| f.len()).unwrap_or(0)
    } else {
        0
    };
    if count > 0 {
        report.push(
            "gerbers",
            CheckStatus::Pass,
            format!("{} files ready to archive in {}", count, gerbers.display()),
            None,
        );
    } else {
        report.push(
            "gerbers",
            CheckStatus::Warning,
            format!("no Gerber output in {}", gerbers.display()),
            Some("Run `fabexport` before `fabexport archive`"),
        );
    }

    report
}
