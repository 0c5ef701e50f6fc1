//! KiCad project discovery
//!
//! A project root holds exactly one `.kicad_pro` descriptor. The schematic and
//! board share its file stem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FabError, FabResult};

/// Extension of the KiCad project descriptor
pub const PROJECT_EXTENSION: &str = "kicad_pro";
/// Extension of the root schematic sheet
pub const SCHEMATIC_EXTENSION: &str = "kicad_sch";
/// Extension of the board layout
pub const BOARD_EXTENSION: &str = "kicad_pcb";

/// A discovered KiCad project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
    name: String,
    descriptor: PathBuf,
}

/// Schematic and board paths, verified to exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignFiles {
    pub schematic: PathBuf,
    pub board: PathBuf,
}

impl Project {
    /// Find the single `.kicad_pro` in `root` and validate it.
    ///
    /// Reads only; nothing is created on disk.
    pub fn discover(root: &Path) -> FabResult<Self> {
        let root = fs::canonicalize(root).map_err(|source| FabError::ProjectDirUnreadable {
            dir: root.to_path_buf(),
            source,
        })?;

        let entries = fs::read_dir(&root).map_err(|source| FabError::ProjectDirUnreadable {
            dir: root.clone(),
            source,
        })?;

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && has_extension(p, PROJECT_EXTENSION))
            .collect();
        candidates.sort();

        let descriptor = match candidates.len() {
            0 => return Err(FabError::NoProject { dir: root }),
            1 => candidates.remove(0),
            _ => {
                return Err(FabError::AmbiguousProject {
                    dir: root,
                    candidates,
                })
            }
        };

        let name = descriptor
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let project = Self {
            root,
            name,
            descriptor,
        };
        project.validate_descriptor()?;
        Ok(project)
    }

    /// KiCad writes project files as a JSON object; anything else is not a project.
    fn validate_descriptor(&self) -> FabResult<()> {
        let content =
            fs::read_to_string(&self.descriptor).map_err(|e| FabError::InvalidProject {
                file: self.descriptor.clone(),
                message: e.to_string(),
            })?;

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| FabError::InvalidProject {
                file: self.descriptor.clone(),
                message: e.to_string(),
            })?;

        if !value.is_object() {
            return Err(FabError::InvalidProject {
                file: self.descriptor.clone(),
                message: "expected a JSON object".to_string(),
            });
        }
        Ok(())
    }

    /// Canonical project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project name (descriptor file stem)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &Path {
        &self.descriptor
    }

    /// Base name of the project directory, used to name the release archive
    pub fn dir_name(&self) -> String {
        self.root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }

    pub fn schematic_path(&self) -> PathBuf {
        self.root.join(format!("{}.{}", self.name, SCHEMATIC_EXTENSION))
    }

    pub fn board_path(&self) -> PathBuf {
        self.root.join(format!("{}.{}", self.name, BOARD_EXTENSION))
    }

    /// Resolve the schematic and board, failing if either is missing.
    pub fn design_files(&self) -> FabResult<DesignFiles> {
        let schematic = self.schematic_path();
        if !schematic.is_file() {
            return Err(FabError::MissingDesignFile {
                kind: "schematic",
                path: schematic,
            });
        }

        let board = self.board_path();
        if !board.is_file() {
            return Err(FabError::MissingDesignFile {
                kind: "PCB",
                path: board,
            });
        }

        Ok(DesignFiles { schematic, board })
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}
