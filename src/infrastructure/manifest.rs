//! Export manifest
//!
//! `output/manifest.json` records every file a successful export produced.
//! It is removed when an export starts and written only once every artifact
//! succeeded, so its presence means the output tree is complete.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::domain::layout::relative_slash_path;
use crate::domain::value_objects::ContentHash;
use crate::error::FabResult;
use crate::infrastructure::fs::{hash_file, list_files, remove_file_if_exists, write_atomic};

/// Manifest document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub project: String,
    pub files: Vec<ManifestEntry>,
}

/// One produced file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Path relative to the output root, `/`-separated
    pub path: String,
    pub bytes: u64,
    pub sha256: ContentHash,
}

/// Describe every file under `output_root`, skipping `exclude`.
pub fn collect(project: &str, output_root: &Path, exclude: &[&Path]) -> FabResult<Manifest> {
    let mut files = Vec::new();
    for path in list_files(output_root)? {
        if exclude.iter().any(|e| *e == path) {
            continue;
        }
        files.push(ManifestEntry {
            path: relative_slash_path(output_root, &path),
            bytes: fs::metadata(&path)?.len(),
            sha256: hash_file(&path)?,
        });
    }
    Ok(Manifest {
        project: project.to_string(),
        files,
    })
}

/// Write the manifest as pretty JSON
pub fn write(path: &Path, manifest: &Manifest) -> FabResult<()> {
    let mut json = serde_json::to_string_pretty(manifest).map_err(std::io::Error::other)?;
    json.push('\n');
    write_atomic(path, json.as_bytes())
}

/// Remove a manifest left by an earlier run, if any
pub fn remove_stale(path: &Path) -> FabResult<()> {
    remove_file_if_exists(path)
}
