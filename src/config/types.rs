//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FabResult;

use super::loader;
use crate::domain::value_objects::ConfigWarning;

/// Default Gerber layer set for a four-layer board
pub const DEFAULT_GERBER_LAYERS: &[&str] = &[
    "F.Cu",
    "In1.Cu",
    "In2.Cu",
    "B.Cu",
    "F.Mask",
    "B.Mask",
    "F.Paste",
    "B.Paste",
    "F.Silkscreen",
    "B.Silkscreen",
    "Edge.Cuts",
];

/// Default BOM columns, in order
pub const DEFAULT_BOM_FIELDS: &[&str] = &[
    "${ITEM_NUMBER}",
    "Reference",
    "Value",
    "Footprint",
    "Description",
    "${QUANTITY}",
    "${DNP}",
    "MPN",
    "SKU",
    "Link",
];

/// Default BOM grouping
pub const DEFAULT_BOM_GROUP_BY: &[&str] = &["Value", "Footprint", "${DNP}"];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// CAD tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KicadConfig {
    /// Path or name of the `kicad-cli` executable
    #[serde(default = "default_cli")]
    pub cli: PathBuf,
}

impl Default for KicadConfig {
    fn default() -> Self {
        Self { cli: default_cli() }
    }
}

fn default_cli() -> PathBuf {
    PathBuf::from("kicad-cli")
}

/// Gerber export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GerbersConfig {
    #[serde(default = "default_layers")]
    pub layers: Vec<String>,
}

impl Default for GerbersConfig {
    fn default() -> Self {
        Self {
            layers: default_layers(),
        }
    }
}

fn default_layers() -> Vec<String> {
    to_strings(DEFAULT_GERBER_LAYERS)
}

/// BOM export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomConfig {
    #[serde(default = "default_bom_fields")]
    pub fields: Vec<String>,

    #[serde(default = "default_bom_group_by")]
    pub group_by: Vec<String>,

    /// Delimiter for reference ranges (`C1-C4`); empty lists every reference
    #[serde(default)]
    pub ref_range_delimiter: String,
}

impl Default for BomConfig {
    fn default() -> Self {
        Self {
            fields: default_bom_fields(),
            group_by: default_bom_group_by(),
            ref_range_delimiter: String::new(),
        }
    }
}

fn default_bom_fields() -> Vec<String> {
    to_strings(DEFAULT_BOM_FIELDS)
}

fn default_bom_group_by() -> Vec<String> {
    to_strings(DEFAULT_BOM_GROUP_BY)
}

/// 3D render configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// `x,y,z` rotation in degrees for the perspective view
    #[serde(default = "default_perspective_rotation")]
    pub perspective_rotation: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            perspective_rotation: default_perspective_rotation(),
        }
    }
}

fn default_perspective_rotation() -> String {
    "315,0,0".to_string()
}

/// Export behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Continue with remaining artifacts after a failure (the run still fails)
    #[serde(default)]
    pub keep_going: bool,

    /// Treat ERC/DRC violations as failures
    #[serde(default)]
    pub fail_on_violations: bool,

    /// Write README.md in the project root
    #[serde(default = "default_true")]
    pub readme: bool,

    /// Write output/manifest.json after a successful export
    #[serde(default = "default_true")]
    pub manifest: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            keep_going: false,
            fail_on_violations: false,
            readme: true,
            manifest: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub kicad: KicadConfig,

    #[serde(default)]
    pub gerbers: GerbersConfig,

    #[serde(default)]
    pub bom: BomConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FabResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve project config, user config or defaults, then apply the environment.
    pub fn resolve(project_root: &Path) -> FabResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(project_root)
    }
}
