use anyhow::{Context, Result};

use fabexport::{ExportUseCase, KicadCli};

use super::{load_config, GlobalOptions};
use crate::ui;

pub fn cmd_export(opts: &GlobalOptions) -> Result<()> {
    let (config, warnings) = load_config(opts)?;
    ui::output::print_config_warnings(&warnings);

    let tool = KicadCli::new(config.kicad.cli.clone());
    let use_case = ExportUseCase::new(tool, config);
    let result = use_case
        .execute(&opts.project_dir)
        .with_context(|| format!("export failed in {}", opts.project_dir.display()))?;

    if opts.json {
        ui::json::emit_result("export_complete", &result)?;
    } else {
        ui::output::print_export(&result);
    }
    Ok(())
}
