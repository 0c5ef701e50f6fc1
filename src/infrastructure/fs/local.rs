//! Local File System Helpers
//!
//! Atomic writes, hashing and deterministic directory listing.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::value_objects::ContentHash;
use crate::error::FabResult;

/// Create a temp file next to `path` so the final rename stays on one filesystem.
pub fn temp_file_beside(path: &Path) -> FabResult<NamedTempFile> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;
    Ok(NamedTempFile::new_in(parent)?)
}

/// Move a finished temp file into place.
pub fn persist(tmp: NamedTempFile, path: &Path) -> FabResult<()> {
    // NamedTempFile is created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write content to `path` atomically, creating parent directories.
pub fn write_atomic(path: &Path, content: &[u8]) -> FabResult<()> {
    let mut tmp = temp_file_beside(path)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    persist(tmp, path)
}

/// Delete `path` if it exists.
pub fn remove_file_if_exists(path: &Path) -> FabResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Empty `dir`, leaving it in place. A missing `dir` is created.
pub fn reset_dir(dir: &Path) -> FabResult<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Compute the SHA-256 of a file
pub fn hash_file(path: &Path) -> FabResult<ContentHash> {
    let content = fs::read(path)?;
    Ok(ContentHash::from_bytes(&content))
}

/// All regular files under `dir`, recursively, sorted by path.
pub fn list_files(dir: &Path) -> FabResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> FabResult<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            collect_files(&path, files)?;
        } else if file_type.is_file() {
            files.push(path);
        }
    }
    Ok(())
}
