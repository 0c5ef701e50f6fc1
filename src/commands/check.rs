use anyhow::Result;

use fabexport::{check_environment, KicadCli};

use super::{load_config, GlobalOptions};
use crate::ui;

pub fn cmd_check(opts: &GlobalOptions) -> Result<()> {
    let (config, warnings) = load_config(opts)?;
    let tool = KicadCli::new(config.kicad.cli.clone());

    let report = check_environment(&tool, &opts.project_dir, &warnings);

    if opts.json {
        ui::json::emit_result("check_complete", &report)?;
    } else {
        ui::output::print_check(&report);
    }

    if !report.is_success() {
        anyhow::bail!("{} check(s) failed", report.errors);
    }
    Ok(())
}
