//! Export Use Case
//!
//! Orchestrates a full export:
//! 1. Discover the project and verify its design files
//! 2. Check that the CAD tool runs
//! 3. Drop any stale manifest and empty the Gerber and SVG directories
//! 4. Run every job of the plan, in order
//! 5. Write README.md and the manifest
//!
//! Steps 1 and 2 write nothing, so a bad project or a missing tool leaves the
//! project directory untouched.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::application::readme;
use crate::config::Config;
use crate::domain::artifact::{self, ExportJob, PostStep};
use crate::domain::layout::OutputLayout;
use crate::domain::ports::CadTool;
use crate::domain::project::Project;
use crate::error::{FabError, FabResult};
use crate::infrastructure::fs::reset_dir;
use crate::infrastructure::{bom, manifest};

use super::result::{ExportResult, ProducedArtifact};

/// Lines of tool stderr kept in error messages
const STDERR_TAIL_LINES: usize = 20;

/// Export use case - produces the full fabrication output set
pub struct ExportUseCase<T>
where
    T: CadTool,
{
    tool: T,
    config: Config,
}

struct JobOutcome {
    artifact: ProducedArtifact,
    bom_rows: Option<usize>,
}

impl<T> ExportUseCase<T>
where
    T: CadTool,
{
    /// Create a new export use case
    pub fn new(tool: T, config: Config) -> Self {
        Self { tool, config }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Run the export for the project in `project_root`.
    ///
    /// By default the first failing artifact aborts the run. With
    /// `export.keep_going` every artifact is attempted and the run fails with
    /// `ExportIncomplete` listing all failures.
    pub fn execute(&self, project_root: &Path) -> FabResult<ExportResult> {
        let started = Instant::now();

        let project = Project::discover(project_root)?;
        let design = project.design_files()?;
        let tool_version = self.tool.version()?;
        info!(
            project = project.name(),
            tool = %self.tool.program().display(),
            version = %tool_version,
            "starting export"
        );

        // Multi-file outputs are rebuilt from scratch so nothing from an
        // earlier run reaches the archive or the manifest.
        let layout = OutputLayout::for_project(&project);
        manifest::remove_stale(&layout.manifest())?;
        reset_dir(&layout.gerbers_dir())?;
        reset_dir(&layout.schematic_svg_dir())?;

        let jobs = artifact::plan(&design, &layout, &self.config);
        let mut artifacts = Vec::with_capacity(jobs.len());
        let mut failed = Vec::new();
        let mut bom_rows = None;

        for job in &jobs {
            match self.run_job(job) {
                Ok(outcome) => {
                    bom_rows = bom_rows.or(outcome.bom_rows);
                    artifacts.push(outcome.artifact);
                }
                Err(e) if self.config.export.keep_going => {
                    error!(artifact = %job.kind, "{}", e);
                    failed.push(job.kind);
                }
                Err(e) => return Err(e),
            }
        }

        if !failed.is_empty() {
            return Err(FabError::ExportIncomplete { failed });
        }

        let readme = if self.config.export.readme {
            let path = layout.readme();
            readme::write(&project, &layout, &path)?;
            info!(path = %path.display(), "README.md generated");
            Some(path)
        } else {
            None
        };

        let manifest = if self.config.export.manifest {
            let path = layout.manifest();
            let archive = layout.archive();
            let doc = manifest::collect(
                project.name(),
                layout.output_root(),
                &[path.as_path(), archive.as_path()],
            )?;
            manifest::write(&path, &doc)?;
            debug!(files = doc.files.len(), "manifest written");
            Some(path)
        } else {
            None
        };

        let elapsed = started.elapsed();
        info!(
            artifacts = artifacts.len(),
            "all artifacts exported in {:.2}s",
            elapsed.as_secs_f64()
        );

        Ok(ExportResult {
            project: project.name().to_string(),
            project_root: project.root().to_path_buf(),
            output_dir: layout.output_root().to_path_buf(),
            tool_version,
            artifacts,
            bom_rows,
            readme,
            manifest,
            elapsed_ms: elapsed.as_millis(),
        })
    }

    fn run_job(&self, job: &ExportJob) -> FabResult<JobOutcome> {
        info!(artifact = %job.kind, "exporting");
        debug!(command = %job.command_line(), "kicad-cli");

        let run = self.tool.run(&job.args)?;
        if !run.success {
            return Err(FabError::ToolFailed {
                artifact: job.kind,
                status: run.status,
                stderr: tail(&run.stderr, STDERR_TAIL_LINES),
            });
        }

        if !job.output.is_satisfied() {
            return Err(FabError::MissingOutput {
                artifact: job.kind,
                path: job.output.path().to_path_buf(),
            });
        }

        let bom_rows = match &job.post {
            Some(PostStep::BomToXlsx { csv, xlsx }) => {
                let rows = bom::convert_csv_to_xlsx(csv, xlsx)?;
                info!(path = %xlsx.display(), rows, "converted BOM to Excel");
                Some(rows)
            }
            None => None,
        };

        debug!(artifact = %job.kind, path = %job.output.path().display(), "done");
        Ok(JobOutcome {
            artifact: ProducedArtifact {
                kind: job.kind,
                path: job.output.path().to_path_buf(),
            },
            bom_rows,
        })
    }
}

/// Last `n` lines of `text`
fn tail(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}
