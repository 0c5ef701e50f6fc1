use anyhow::{Context, Result};

use fabexport::archive_gerbers;

use super::GlobalOptions;
use crate::ui;

pub fn cmd_archive(opts: &GlobalOptions) -> Result<()> {
    let summary = archive_gerbers(&opts.project_dir)
        .with_context(|| format!("archive failed in {}", opts.project_dir.display()))?;

    if opts.json {
        ui::json::emit_result("archive_complete", &summary)?;
    } else {
        ui::output::print_archive(&summary);
    }
    Ok(())
}
