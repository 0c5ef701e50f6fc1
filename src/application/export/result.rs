//! Export result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::artifact::ArtifactKind;

/// One artifact that was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProducedArtifact {
    pub kind: ArtifactKind,
    /// File, or directory for multi-file artifacts
    pub path: PathBuf,
}

/// Result of a successful export
#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    pub project: String,
    pub project_root: PathBuf,
    pub output_dir: PathBuf,
    pub tool_version: String,
    pub artifacts: Vec<ProducedArtifact>,
    /// Data rows in the BOM spreadsheet
    pub bom_rows: Option<usize>,
    pub readme: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub elapsed_ms: u128,
}
