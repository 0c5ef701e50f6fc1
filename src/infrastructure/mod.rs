//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and all I/O helpers.
//!
//! ## Structure
//!
//! - `kicad_cli` - CadTool implementation spawning `kicad-cli`
//! - `bom` - CSV to XLSX conversion
//! - `archive` - deterministic Gerber zip
//! - `manifest` - output manifest
//! - `fs/` - atomic writes, hashing, directory listing

pub mod archive;
pub mod bom;
pub mod fs;
pub mod kicad_cli;
pub mod manifest;

// Re-export for convenience
pub use archive::{write_gerber_archive, ArchiveSummary};
pub use kicad_cli::KicadCli;
