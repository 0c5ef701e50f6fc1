//! fabexport - fabrication output exporter for KiCad projects
//!
//! Drives `kicad-cli` to produce Gerbers, drill and pick-and-place files, a BOM
//! spreadsheet, assembly and schematic PDFs and 3D renders into a fixed
//! `output/` layout, and packages the Gerbers into a release archive.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    archive_gerbers, check_environment, ExportResult, ExportUseCase, ReleaseResult,
    ReleaseUseCase,
};
pub use config::Config;
pub use domain::artifact::ArtifactKind;
pub use domain::layout::{archive_file_name, OutputLayout};
pub use domain::project::Project;
pub use error::{FabError, FabResult};
pub use infrastructure::KicadCli;
