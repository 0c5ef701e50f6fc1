use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fabexport - export fabrication outputs from a KiCad project
#[derive(Parser, Debug)]
#[command(name = "fabexport")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run 'fabexport' without a subcommand to export the project in the current directory."
)]
pub struct Cli {
    /// Project directory (must contain exactly one .kicad_pro file)
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Keep exporting remaining artifacts after a failure (the run still fails)
    #[arg(long, global = true)]
    pub keep_going: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Export every fabrication artifact into output/ (default)
    Export,

    /// Export, then zip output/Gerbers into output/<dir>_Gerbers.zip
    Release,

    /// Zip existing Gerber output without exporting
    Archive,

    /// Check the tool, project and existing output without writing anything
    Check,
}
