//! Fixed output directory layout
//!
//! ```text
//! <project>/
//!   README.md
//!   output/
//!     <name>_schematic.pdf, <name>_BOM.xlsx, <name>_3D_top.png, ...
//!     manifest.json
//!     <dir-name>_Gerbers.zip
//!     Gerbers/
//!       *.gbr, <name>.drl, <name>-all-pos.csv
//! ```
//!
//! The layout is not configurable.

use std::path::{Path, PathBuf};

/// Output root, relative to the project root
pub const OUTPUT_DIR: &str = "output";
/// Fabrication subdirectory, relative to the output root
pub const GERBERS_DIR: &str = "Gerbers";
/// Manifest file name, relative to the output root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Release archive file name for a project directory base name.
pub fn archive_file_name(dir_name: &str) -> String {
    format!("{}_Gerbers.zip", dir_name)
}

/// Paths of every output for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    project_root: PathBuf,
    output_root: PathBuf,
    name: String,
    dir_name: String,
}

impl OutputLayout {
    /// `name` is the project name, `dir_name` the base name of the project directory.
    pub fn new(project_root: &Path, name: &str, dir_name: &str) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            output_root: project_root.join(OUTPUT_DIR),
            name: name.to_string(),
            dir_name: dir_name.to_string(),
        }
    }

    pub fn for_project(project: &super::project::Project) -> Self {
        Self::new(project.root(), project.name(), &project.dir_name())
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn gerbers_dir(&self) -> PathBuf {
        self.output_root.join(GERBERS_DIR)
    }

    fn named(&self, suffix: &str) -> PathBuf {
        self.output_root.join(format!("{}{}", self.name, suffix))
    }

    pub fn schematic_pdf(&self) -> PathBuf {
        self.named("_schematic.pdf")
    }

    pub fn schematic_svg_dir(&self) -> PathBuf {
        self.named("_schematic_svg")
    }

    pub fn erc_report(&self) -> PathBuf {
        self.output_root.join("erc_report.txt")
    }

    pub fn drc_report(&self) -> PathBuf {
        self.output_root.join("drc_report.txt")
    }

    pub fn bom_csv(&self) -> PathBuf {
        self.named("_BOM.csv")
    }

    pub fn bom_xlsx(&self) -> PathBuf {
        self.named("_BOM.xlsx")
    }

    pub fn top_assembly(&self) -> PathBuf {
        self.named("_Top_Assembly.pdf")
    }

    pub fn bottom_assembly(&self) -> PathBuf {
        self.named("_Bottom_Assembly.pdf")
    }

    pub fn render_top(&self) -> PathBuf {
        self.named("_3D_top.png")
    }

    pub fn render_bottom(&self) -> PathBuf {
        self.named("_3D_bottom.png")
    }

    pub fn render_perspective(&self) -> PathBuf {
        self.named("_3D_perspective.png")
    }

    pub fn drill_file(&self) -> PathBuf {
        self.gerbers_dir().join(format!("{}.drl", self.name))
    }

    pub fn position_file(&self) -> PathBuf {
        self.gerbers_dir().join(format!("{}-all-pos.csv", self.name))
    }

    pub fn manifest(&self) -> PathBuf {
        self.output_root.join(MANIFEST_FILE)
    }

    /// Release archive, a sibling of the Gerber directory
    pub fn archive(&self) -> PathBuf {
        self.output_root.join(archive_file_name(&self.dir_name))
    }

    pub fn readme(&self) -> PathBuf {
        self.project_root.join("README.md")
    }

    /// Interactive BOM produced by the external ibom plugin, if present
    pub fn interactive_bom(&self) -> PathBuf {
        self.project_root.join("bom").join("ibom.html")
    }

    /// Path relative to the project root, with `/` separators, for links
    pub fn link(&self, path: &Path) -> String {
        relative_slash_path(&self.project_root, path)
    }
}

/// Render `path` relative to `base` using `/` separators.
///
/// Falls back to the full path when `path` is not under `base`.
pub fn relative_slash_path(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
