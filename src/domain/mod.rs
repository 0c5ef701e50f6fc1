//! Domain Layer
//!
//! Project discovery, the output layout and the export plan. Apart from
//! project discovery (which has to look at the project directory) nothing here
//! writes to disk or spawns processes.
//!
//! ## Structure
//!
//! - `project` - locating and validating the KiCad project
//! - `layout` - the fixed output directory layout
//! - `artifact` - artifact kinds and the ordered export plan
//! - `value_objects/` - small immutable types (ContentHash, ConfigWarning)
//! - `ports/` - interface definitions for infrastructure

pub mod artifact;
pub mod layout;
pub mod ports;
pub mod project;
pub mod value_objects;
