//! Ports - interfaces the application layer depends on

mod cad_tool;

pub use cad_tool::{CadTool, ToolRun};
