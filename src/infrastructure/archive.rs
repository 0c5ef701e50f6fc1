//! Gerber release archive
//!
//! Zips everything under `output/Gerbers/` into a single file. Entries are
//! sorted and carry a fixed timestamp, so an unchanged Gerber set always
//! produces a byte-identical archive. The zip is assembled in a temp file and
//! renamed into place, so a failure never leaves a truncated archive behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::layout::relative_slash_path;
use crate::error::{FabError, FabResult};
use crate::infrastructure::fs::{list_files, persist, temp_file_beside};

/// What ended up in the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Entry names, relative to the Gerber directory
    pub entries: Vec<String>,
}

/// Archive every file under `gerbers_dir` into `archive`.
///
/// Fails with `GerbersMissing` or `GerbersEmpty` before touching `archive`.
pub fn write_gerber_archive(gerbers_dir: &Path, archive: &Path) -> FabResult<ArchiveSummary> {
    if !gerbers_dir.is_dir() {
        return Err(FabError::GerbersMissing {
            dir: gerbers_dir.to_path_buf(),
        });
    }

    let files = list_files(gerbers_dir)?;
    if files.is_empty() {
        return Err(FabError::GerbersEmpty {
            dir: gerbers_dir.to_path_buf(),
        });
    }

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let tmp = temp_file_beside(archive)?;
    let mut zip = ZipWriter::new(tmp);
    let mut entries = Vec::with_capacity(files.len());

    for file in &files {
        let name = relative_slash_path(gerbers_dir, file);
        debug!(entry = %name, "adding to archive");
        zip.start_file(name.as_str(), options)?;
        let mut src = fs::File::open(file)?;
        io::copy(&mut src, &mut zip)?;
        entries.push(name);
    }

    let tmp = zip.finish()?;
    persist(tmp, archive)?;

    info!(
        archive = %archive.display(),
        files = entries.len(),
        "wrote Gerber archive"
    );

    Ok(ArchiveSummary {
        path: archive.to_path_buf(),
        entries,
    })
}
