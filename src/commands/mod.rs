pub mod archive;
pub mod check;
pub mod export;
pub mod release;

use std::path::PathBuf;

use anyhow::{Context, Result};

use fabexport::domain::value_objects::ConfigWarning;
use fabexport::Config;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub project_dir: PathBuf,
    pub json: bool,
    pub keep_going: bool,
}

/// Resolve configuration for the project directory and apply CLI overrides.
pub fn load_config(opts: &GlobalOptions) -> Result<(Config, Vec<ConfigWarning>)> {
    let (mut config, warnings) = Config::resolve(&opts.project_dir).with_context(|| {
        format!(
            "failed to load configuration for {}",
            opts.project_dir.display()
        )
    })?;
    if opts.keep_going {
        config.export.keep_going = true;
    }
    Ok((config, warnings))
}
