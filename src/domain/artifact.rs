//! Fabrication artifacts and the export plan
//!
//! Every artifact is produced by exactly one `kicad-cli` invocation. The plan is
//! a pure function of the project, the output layout and the configuration, so
//! it can be inspected and tested without running the tool.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::layout::OutputLayout;
use super::project::DesignFiles;
use crate::config::Config;

/// Kind of fabrication artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    SchematicPdf,
    SchematicSvg,
    Erc,
    Drc,
    Bom,
    Gerbers,
    Drill,
    Position,
    TopAssembly,
    BottomAssembly,
    RenderTop,
    RenderBottom,
    RenderPerspective,
}

impl ArtifactKind {
    /// All artifacts, in export order
    pub const ALL: [ArtifactKind; 13] = [
        ArtifactKind::SchematicPdf,
        ArtifactKind::SchematicSvg,
        ArtifactKind::Erc,
        ArtifactKind::Drc,
        ArtifactKind::Bom,
        ArtifactKind::Gerbers,
        ArtifactKind::Drill,
        ArtifactKind::Position,
        ArtifactKind::TopAssembly,
        ArtifactKind::BottomAssembly,
        ArtifactKind::RenderTop,
        ArtifactKind::RenderBottom,
        ArtifactKind::RenderPerspective,
    ];

    /// Human-readable name used in logs and errors
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactKind::SchematicPdf => "schematic PDF",
            ArtifactKind::SchematicSvg => "schematic SVG",
            ArtifactKind::Erc => "ERC report",
            ArtifactKind::Drc => "DRC report",
            ArtifactKind::Bom => "BOM",
            ArtifactKind::Gerbers => "gerbers",
            ArtifactKind::Drill => "drill files",
            ArtifactKind::Position => "position file",
            ArtifactKind::TopAssembly => "top assembly",
            ArtifactKind::BottomAssembly => "bottom assembly",
            ArtifactKind::RenderTop => "3D render (top)",
            ArtifactKind::RenderBottom => "3D render (bottom)",
            ArtifactKind::RenderPerspective => "3D render (perspective)",
        }
    }

    /// Whether the artifact lands in the Gerber directory (and thus the release archive)
    pub fn is_fabrication_file(&self) -> bool {
        matches!(
            self,
            ArtifactKind::Gerbers | ArtifactKind::Drill | ArtifactKind::Position
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What a job must leave behind for it to count as successful
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedOutput {
    /// A single file
    File(PathBuf),
    /// A directory holding at least one file
    NonEmptyDir(PathBuf),
}

impl ExpectedOutput {
    pub fn path(&self) -> &Path {
        match self {
            ExpectedOutput::File(p) | ExpectedOutput::NonEmptyDir(p) => p,
        }
    }

    /// Check the output on disk
    pub fn is_satisfied(&self) -> bool {
        match self {
            ExpectedOutput::File(p) => p.is_file(),
            ExpectedOutput::NonEmptyDir(p) => std::fs::read_dir(p)
                .map(|mut entries| entries.any(|e| e.is_ok()))
                .unwrap_or(false),
        }
    }
}

/// Follow-up work done in-process after the tool succeeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostStep {
    /// Convert the BOM CSV into an XLSX spreadsheet
    BomToXlsx { csv: PathBuf, xlsx: PathBuf },
}

/// One tool invocation producing one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub kind: ArtifactKind,
    pub args: Vec<OsString>,
    pub output: ExpectedOutput,
    pub post: Option<PostStep>,
}

impl ExportJob {
    fn new(kind: ArtifactKind, args: Vec<OsString>, output: ExpectedOutput) -> Self {
        Self {
            kind,
            args,
            output,
            post: None,
        }
    }

    /// Arguments rendered for logging
    pub fn command_line(&self) -> String {
        self.args
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Collects `kicad-cli` arguments without repeated `.into()` noise
struct Args(Vec<OsString>);

impl Args {
    fn new(words: &[&str]) -> Self {
        Self(words.iter().map(OsString::from).collect())
    }

    fn path(mut self, path: &Path) -> Self {
        self.0.push(path.as_os_str().to_os_string());
        self
    }

    fn flag(mut self, flag: &str) -> Self {
        self.0.push(flag.into());
        self
    }

    fn opt(mut self, flag: &str, value: &str) -> Self {
        self.0.push(flag.into());
        self.0.push(value.into());
        self
    }

    fn output(mut self, path: &Path) -> Vec<OsString> {
        self.0.push("--output".into());
        self.0.push(path.as_os_str().to_os_string());
        self.0
    }
}

/// Build the ordered list of jobs for a full export.
pub fn plan(design: &DesignFiles, layout: &OutputLayout, config: &Config) -> Vec<ExportJob> {
    ArtifactKind::ALL
        .iter()
        .map(|kind| job_for(*kind, design, layout, config))
        .collect()
}

fn job_for(
    kind: ArtifactKind,
    design: &DesignFiles,
    layout: &OutputLayout,
    config: &Config,
) -> ExportJob {
    let sch = &design.schematic;
    let pcb = &design.board;

    match kind {
        ArtifactKind::SchematicPdf => {
            let out = layout.schematic_pdf();
            let args = Args::new(&["sch", "export", "pdf"]).path(sch).output(&out);
            ExportJob::new(kind, args, ExpectedOutput::File(out))
        }
        ArtifactKind::SchematicSvg => {
            // kicad-cli writes one SVG per sheet into the output directory
            let out = layout.schematic_svg_dir();
            let args = Args::new(&["sch", "export", "svg"]).path(sch).output(&out);
            ExportJob::new(kind, args, ExpectedOutput::NonEmptyDir(out))
        }
        ArtifactKind::Erc => {
            let out = layout.erc_report();
            let mut args = Args::new(&["sch", "erc"]).path(sch);
            if config.export.fail_on_violations {
                args = args.flag("--exit-code-violations");
            }
            ExportJob::new(kind, args.output(&out), ExpectedOutput::File(out))
        }
        ArtifactKind::Drc => {
            let out = layout.drc_report();
            let mut args = Args::new(&["pcb", "drc"]).path(pcb);
            if config.export.fail_on_violations {
                args = args.flag("--exit-code-violations");
            }
            ExportJob::new(kind, args.output(&out), ExpectedOutput::File(out))
        }
        ArtifactKind::Bom => {
            let csv = layout.bom_csv();
            let args = Args::new(&["sch", "export", "bom"])
                .path(sch)
                .opt("--group-by", &config.bom.group_by.join(","))
                .opt("--ref-range-delimiter", &config.bom.ref_range_delimiter)
                .opt("--fields", &config.bom.fields.join(","))
                .output(&csv);
            let mut job = ExportJob::new(kind, args, ExpectedOutput::File(csv.clone()));
            job.post = Some(PostStep::BomToXlsx {
                csv,
                xlsx: layout.bom_xlsx(),
            });
            job
        }
        ArtifactKind::Gerbers => {
            let out = layout.gerbers_dir();
            let args = Args::new(&["pcb", "export", "gerbers"])
                .path(pcb)
                .flag("--board-plot-params")
                .opt("--layers", &config.gerbers.layers.join(","))
                .output(&out);
            ExportJob::new(kind, args, ExpectedOutput::NonEmptyDir(out))
        }
        ArtifactKind::Drill => {
            // Output is a directory; the Excellon file is named after the board
            let args = Args::new(&["pcb", "export", "drill"])
                .path(pcb)
                .output(&layout.gerbers_dir());
            ExportJob::new(kind, args, ExpectedOutput::File(layout.drill_file()))
        }
        ArtifactKind::Position => {
            let out = layout.position_file();
            let args = Args::new(&["pcb", "export", "pos"])
                .path(pcb)
                .opt("--format", "csv")
                .opt("--units", "mm")
                .flag("--exclude-dnp")
                .output(&out);
            ExportJob::new(kind, args, ExpectedOutput::File(out))
        }
        ArtifactKind::TopAssembly => {
            let out = layout.top_assembly();
            let args = Args::new(&["pcb", "export", "pdf"])
                .path(pcb)
                .opt("--layers", "F.Mask,F.Silkscreen,Edge.Cuts")
                .flag("--black-and-white")
                .output(&out);
            ExportJob::new(kind, args, ExpectedOutput::File(out))
        }
        ArtifactKind::BottomAssembly => {
            let out = layout.bottom_assembly();
            let args = Args::new(&["pcb", "export", "pdf"])
                .path(pcb)
                .opt("--layers", "B.Mask,B.Silkscreen,Edge.Cuts")
                .flag("--black-and-white")
                .flag("--mirror")
                .output(&out);
            ExportJob::new(kind, args, ExpectedOutput::File(out))
        }
        ArtifactKind::RenderTop => {
            let out = layout.render_top();
            let args = Args::new(&["pcb", "render"])
                .path(pcb)
                .opt("--side", "top")
                .output(&out);
            ExportJob::new(kind, args, ExpectedOutput::File(out))
        }
        ArtifactKind::RenderBottom => {
            let out = layout.render_bottom();
            let args = Args::new(&["pcb", "render"])
                .path(pcb)
                .opt("--side", "bottom")
                .output(&out);
            ExportJob::new(kind, args, ExpectedOutput::File(out))
        }
        ArtifactKind::RenderPerspective => {
            let out = layout.render_perspective();
            let args = Args::new(&["pcb", "render"])
                .path(pcb)
                .opt("--side", "top")
                .flag("--perspective")
                .opt("--rotate", &config.render.perspective_rotation)
                .output(&out);
            ExportJob::new(kind, args, ExpectedOutput::File(out))
        }
    }
}
