//! fabexport - KiCad fabrication output exporter
//!
//! Usage: fabexport [COMMAND]
//!
//! Commands:
//!   export   Export every fabrication artifact (default)
//!   release  Export, then zip the Gerbers for the fab house
//!   archive  Zip existing Gerbers only
//!   check    Preflight the tool and project

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};
use commands::GlobalOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let opts = GlobalOptions {
        project_dir: cli.project_dir,
        json: cli.json,
        keep_going: cli.keep_going,
    };

    match cli.command.unwrap_or(Commands::Export) {
        Commands::Export => commands::export::cmd_export(&opts),
        Commands::Release => commands::release::cmd_release(&opts),
        Commands::Archive => commands::archive::cmd_archive(&opts),
        Commands::Check => commands::check::cmd_check(&opts),
    }
}
