//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{FabError, FabResult};

use super::types::Config;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "fabexport.toml";
/// User config path, relative to the platform config directory
pub const USER_CONFIG_FILE: &str = "fabexport/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FabResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut ignored: Vec<String> = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |p| {
            ignored.push(p.to_string())
        })
        .map_err(|e| FabError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .iter()
        .map(|dotted| unknown_key_warning(path, &content, dotted))
        .collect();
    Ok((config, warnings))
}

/// `dotted` is the serde path of the ignored value, e.g. `export.keep_goin`.
fn unknown_key_warning(file: &Path, content: &str, dotted: &str) -> ConfigWarning {
    let (section, key) = dotted.rsplit_once('.').unwrap_or(("", dotted));
    ConfigWarning {
        key: key.to_string(),
        file: file.to_path_buf(),
        line: content
            .lines()
            .position(|l| l.trim_start().starts_with(key))
            .map(|i| i + 1),
        suggestion: suggest_key(section, key),
    }
}

/// Load from project config, user config, or defaults, then apply env overrides.
///
/// A config file that exists but does not parse is an error.
pub fn resolve(project_root: &Path) -> FabResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    let candidates = std::iter::once(project_config).chain(user_config_path());

    for path in candidates {
        if path.is_file() {
            debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    debug!("no config file found, using defaults");
    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// User-level config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(USER_CONFIG_FILE))
}

/// Apply environment variable overrides (FABEXPORT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // FABEXPORT_KICAD_CLI
    if let Some(cli) = lookup("FABEXPORT_KICAD_CLI") {
        if !cli.trim().is_empty() {
            config.kicad.cli = PathBuf::from(cli);
        }
    }

    // FABEXPORT_KEEP_GOING
    if let Some(val) = lookup("FABEXPORT_KEEP_GOING") {
        config.export.keep_going = parse_flag(&val);
    }

    // FABEXPORT_FAIL_ON_VIOLATIONS
    if let Some(val) = lookup("FABEXPORT_FAIL_ON_VIOLATIONS") {
        config.export.fail_on_violations = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(
        val.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

/// Keys each table accepts. The empty section lists the top-level tables.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["kicad", "gerbers", "bom", "render", "export"]),
    ("kicad", &["cli"]),
    ("gerbers", &["layers"]),
    ("bom", &["fields", "group_by", "ref_range_delimiter"]),
    ("render", &["perspective_rotation"]),
    (
        "export",
        &["keep_going", "fail_on_violations", "readme", "manifest"],
    ),
];

/// Closest key of the same table within two edits, if any.
fn suggest_key(section: &str, key: &str) -> Option<String> {
    let (_, known) = KNOWN_KEYS.iter().find(|(s, _)| *s == section)?;
    known
        .iter()
        .map(|k| (edit_distance(key, k), *k))
        .filter(|(d, _)| *d <= 2)
        .min_by_key(|(d, _)| *d)
        .map(|(_, k)| k.to_string())
}

/// Levenshtein distance over chars, one row kept.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diag
            } else {
                1 + diag.min(above).min(row[j])
            };
            diag = above;
        }
    }

    row[b.len()]
}
