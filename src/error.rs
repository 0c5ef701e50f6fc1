//! Error types for fabexport
//!
//! Library code returns `FabResult`; the binary wraps these in `anyhow` with context.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::artifact::ArtifactKind;

/// Result type alias for fabexport operations
pub type FabResult<T> = Result<T, FabError>;

/// Main error type for fabexport operations
#[derive(Error, Debug)]
pub enum FabError {
    /// Project directory could not be listed
    #[error("cannot read project directory {dir}: {source}")]
    ProjectDirUnreadable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `.kicad_pro` descriptor in the project directory
    #[error("no .kicad_pro file found in {dir}")]
    NoProject { dir: PathBuf },

    /// More than one `.kicad_pro` descriptor in the project directory
    #[error("found {} .kicad_pro files in {dir}, expected exactly one", .candidates.len())]
    AmbiguousProject {
        dir: PathBuf,
        candidates: Vec<PathBuf>,
    },

    /// Descriptor exists but is unreadable or not a KiCad project file
    #[error("invalid project file {file}: {message}")]
    InvalidProject { file: PathBuf, message: String },

    /// Schematic or board file next to the descriptor is missing
    #[error("{kind} file not found: {path}")]
    MissingDesignFile { kind: &'static str, path: PathBuf },

    /// The CAD tool could not be started or did not answer `--version`
    #[error("{program} is not available: {message}")]
    ToolUnavailable { program: PathBuf, message: String },

    /// The CAD tool exited unsuccessfully while producing an artifact
    #[error("{artifact} failed ({status}){}", format_stderr(.stderr))]
    ToolFailed {
        artifact: ArtifactKind,
        status: String,
        stderr: String,
    },

    /// The CAD tool reported success but the expected output is absent
    #[error("{artifact} did not produce expected output {path}")]
    MissingOutput {
        artifact: ArtifactKind,
        path: PathBuf,
    },

    /// BOM spreadsheet conversion failed
    #[error("BOM conversion failed for {file}: {message}")]
    Bom { file: PathBuf, message: String },

    /// One or more artifacts failed while running with keep-going enabled
    #[error("export incomplete, failed artifacts: {}", join_kinds(.failed))]
    ExportIncomplete { failed: Vec<ArtifactKind> },

    /// Gerber directory does not exist (export skipped or failed)
    #[error("Gerber directory not found: {dir} - run the export first")]
    GerbersMissing { dir: PathBuf },

    /// Gerber directory exists but holds no files
    #[error("Gerber directory is empty: {dir} - refusing to write an empty archive")]
    GerbersEmpty { dir: PathBuf },

    /// Zip writer error
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

fn join_kinds(kinds: &[ArtifactKind]) -> String {
    kinds
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
