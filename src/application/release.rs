//! Release Use Case
//!
//! `release` = export, then archive the Gerber directory. The archive step runs
//! only after a fully successful export.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::domain::layout::OutputLayout;
use crate::domain::ports::CadTool;
use crate::domain::project::Project;
use crate::error::FabResult;
use crate::infrastructure::fs::remove_file_if_exists;
use crate::infrastructure::{write_gerber_archive, ArchiveSummary};

use super::export::{ExportResult, ExportUseCase};

/// Result of a release run
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseResult {
    pub export: ExportResult,
    pub archive: ArchiveSummary,
}

/// Archive the existing Gerber output of the project in `project_root`.
///
/// The archive is named `<project-dir-name>_Gerbers.zip` and written next to
/// the Gerber directory. Nothing is exported; a missing or empty Gerber
/// directory is an error.
pub fn archive_gerbers(project_root: &Path) -> FabResult<ArchiveSummary> {
    let project = Project::discover(project_root)?;
    let layout = OutputLayout::for_project(&project);
    info!(project = project.name(), "archiving Gerbers");
    write_gerber_archive(&layout.gerbers_dir(), &layout.archive())
}

/// Release use case - export followed by the Gerber archive
pub struct ReleaseUseCase<T>
where
    T: CadTool,
{
    export: ExportUseCase<T>,
}

impl<T> ReleaseUseCase<T>
where
    T: CadTool,
{
    pub fn new(export: ExportUseCase<T>) -> Self {
        Self { export }
    }

    /// Run the export and, if it succeeds, build the archive.
    ///
    /// The previous archive is deleted first, so a failed release never
    /// leaves an older zip next to the new output.
    pub fn execute(&self, project_root: &Path) -> FabResult<ReleaseResult> {
        let project = Project::discover(project_root)?;
        remove_file_if_exists(&OutputLayout::for_project(&project).archive())?;

        let export = self.export.execute(project_root)?;
        let archive = archive_gerbers(&export.project_root)?;
        Ok(ReleaseResult { export, archive })
    }
}
