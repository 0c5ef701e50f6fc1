//! Configuration module for fabexport
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FABEXPORT_*)
//! 3. Project config (<project>/fabexport.toml)
//! 4. User config (~/.config/fabexport/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only one file is read: the project config wins over the user config.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{
    BomConfig, Config, ExportConfig, GerbersConfig, KicadConfig, RenderConfig,
    DEFAULT_BOM_FIELDS, DEFAULT_BOM_GROUP_BY, DEFAULT_GERBER_LAYERS,
};
