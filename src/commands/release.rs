use anyhow::{Context, Result};

use fabexport::{ExportUseCase, KicadCli, ReleaseUseCase};

use super::{load_config, GlobalOptions};
use crate::ui;

pub fn cmd_release(opts: &GlobalOptions) -> Result<()> {
    let (config, warnings) = load_config(opts)?;
    ui::output::print_config_warnings(&warnings);

    let tool = KicadCli::new(config.kicad.cli.clone());
    let release = ReleaseUseCase::new(ExportUseCase::new(tool, config));
    let result = release
        .execute(&opts.project_dir)
        .with_context(|| format!("release failed in {}", opts.project_dir.display()))?;

    if opts.json {
        ui::json::emit_result("release_complete", &result)?;
    } else {
        ui::output::print_export(&result.export);
        ui::output::print_archive(&result.archive);
    }
    Ok(())
}
