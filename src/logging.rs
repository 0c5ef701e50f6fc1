//! Logging setup
//!
//! Logs go to stderr so stdout stays clean for results and `--json`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an EnvFilter directive that overrides `-v`/`-q`
pub const LOG_ENV: &str = "FABEXPORT_LOG";

pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}
