//! # Configuration
//!
//! Centralizes the prototype's few settings with a clear override
//! hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.relic-hunt/config.toml`. If missing on first
//! run, a commented-out default is generated so users can discover the
//! options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HuntConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Screen to open at launch. A debugging aid; the game starts on
    /// `start` otherwise.
    pub start_screen: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// Enable the slide transition between screens.
    pub animations: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_SCREEN: &str = "start";
pub const DEFAULT_ANIMATIONS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_screen: String,
    pub animations: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.relic-hunt/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".relic-hunt").join("config.toml"))
}

/// Load config from `~/.relic-hunt/config.toml`.
pub fn load_config() -> Result<HuntConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HuntConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from the given path.
///
/// If the file doesn't exist, generates a commented-out default there
/// and returns `HuntConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<HuntConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(HuntConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HuntConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Relic Hunt Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "start"    # Screen to open at launch (debugging aid)

# [ui]
# animations = true         # Slide transition between screens
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file →
/// env vars → CLI.
///
/// `cli_screen` is the `--screen` flag (None = not specified).
pub fn resolve(config: &HuntConfig, cli_screen: Option<&str>) -> ResolvedConfig {
    resolve_with(
        config,
        cli_screen,
        std::env::var("RELIC_HUNT_SCREEN").ok(),
    )
}

/// The resolution itself, with the env lookup threaded in so the
/// precedence order can be tested without touching process state.
fn resolve_with(
    config: &HuntConfig,
    cli_screen: Option<&str>,
    env_screen: Option<String>,
) -> ResolvedConfig {
    // Start screen: CLI → env → config → default
    let start_screen = cli_screen
        .map(|s| s.to_string())
        .or(env_screen)
        .or_else(|| config.general.start_screen.clone())
        .unwrap_or_else(|| DEFAULT_START_SCREEN.to_string());

    ResolvedConfig {
        start_screen,
        animations: config.ui.animations.unwrap_or(DEFAULT_ANIMATIONS),
    }
}
