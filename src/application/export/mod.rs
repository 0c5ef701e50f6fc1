//! Export use case
//!
//! Drives the CAD tool through every artifact of the export plan.

mod result;
mod use_case;

pub use result::{ExportResult, ProducedArtifact};
pub use use_case::ExportUseCase;
