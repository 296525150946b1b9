//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kalkulator/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::Tab;
use crate::core::calculator::MAX_HISTORY;
use crate::core::converter::Category;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KalkulatorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub converter: ConverterConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_tab: Option<Tab>,
    pub history_limit: Option<usize>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConverterConfig {
    pub default_category: Option<Category>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HISTORY_LIMIT: usize = MAX_HISTORY;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const DEFAULT_CONFIG: &str = r#"# Kalkulator Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_tab = "calculator"         # "calculator" or "converter" (env: KALKULATOR_TAB)
# history_limit = 20                 # 1..=20
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace" (env: KALKULATOR_LOG_LEVEL)

# [converter]
# default_category = "temperature"   # "temperature", "length" or "weight"
"#;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tab: Tab,
    pub category: Category,
    pub history_limit: usize,
    pub log_level: LevelFilter,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub tab: Option<Tab>,
    pub category: Option<Category>,
    pub log_level: Option<LevelFilter>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.kalkulator/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kalkulator").join("config.toml"))
}

/// Outcome of looking for the config file.
#[derive(Debug)]
pub enum LoadedConfig {
    /// Parsed from the file at this path.
    File(KalkulatorConfig, PathBuf),
    /// No file existed; a commented default was written to this path.
    Generated(PathBuf),
    /// No home directory could be determined.
    NoHome,
}

/// Load config from `~/.kalkulator/config.toml`.
///
/// Runs before the logger exists, so it reports what happened through the
/// returned value instead of logging.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(path),
        None => Ok(LoadedConfig::NoHome),
    }
}

/// Load config from `path`, generating the commented default if it is missing.
pub fn load_config_from(path: PathBuf) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        generate_default_config(&path)?;
        return Ok(LoadedConfig::Generated(path));
    }

    let config = parse_config(&fs::read_to_string(&path)?)?;
    Ok(LoadedConfig::File(config, path))
}

pub fn parse_config(contents: &str) -> Result<KalkulatorConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Writes the commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &KalkulatorConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with the environment lookup supplied by the caller.
pub fn resolve_with(
    config: &KalkulatorConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let env_value = |key: &str| env(key).map(|s| s.trim().to_string());

    // Tab: CLI → env → config → default
    let tab = cli
        .tab
        .or_else(|| env_value("KALKULATOR_TAB").and_then(|s| Tab::from_str(&s, true).ok()))
        .or(config.general.default_tab)
        .unwrap_or_default();

    // Category: CLI → config → default
    let category = cli
        .category
        .or(config.converter.default_category)
        .unwrap_or_default();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| env_value("KALKULATOR_LOG_LEVEL").and_then(|s| s.parse().ok()))
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|s| s.trim().parse().ok())
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let history_limit = config
        .general
        .history_limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY);

    ResolvedConfig {
        tab,
        category,
        history_limit,
        log_level,
    }
}

/// The config file's `log_level` when it is set but not a known level.
pub fn invalid_log_level(config: &KalkulatorConfig) -> Option<&str> {
    config
        .general
        .log_level
        .as_deref()
        .filter(|s| s.trim().parse::<LevelFilter>().is_err())
}
