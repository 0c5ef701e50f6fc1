//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on the Domain layer (project, layout, plan, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ExportUseCase` - produce every fabrication artifact (the default target)
//! - `ReleaseUseCase` - export, then archive the Gerbers
//! - `archive_gerbers` - archive existing Gerber output only
//! - `check_environment` - read-only preflight used by `fabexport check`

pub mod check;
pub mod export;
pub mod readme;
pub mod release;


pub use check::{check_environment, CheckItem, CheckReport, CheckStatus};
pub use export::{ExportResult, ExportUseCase, ProducedArtifact};
pub use release::{archive_gerbers, ReleaseResult, ReleaseUseCase};
