//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atrium/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtriumConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_path: Option<String>,
    pub log_file: Option<String>,
    pub tick_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_PATH: &str = "/";
pub const DEFAULT_LOG_FILE: &str = "atrium.log";
pub const DEFAULT_TICK_MS: u64 = 250;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Initial Location the shell mounts at.
    pub start_path: String,
    /// Destination of the file logger.
    pub log_file: String,
    /// Event poll timeout for the idle loop.
    pub tick_ms: u64,
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

/// Returns the path to `~/.atrium/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atrium").join("config.toml"))
}

/// Load config from `~/.atrium/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtriumConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtriumConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtriumConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AtriumConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: AtriumConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Atrium Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_path = "/"          # Location the shell mounts at (ATRIUM_START_PATH env var also works)
# log_file = "atrium.log"   # File logger destination, relative to the working directory
# tick_ms = 250             # Idle event poll timeout in milliseconds
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

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI.
///
/// `cli_start_path` comes from the `--path` flag (None = not specified).
pub fn resolve(config: &AtriumConfig, cli_start_path: Option<&str>) -> ResolvedConfig {
    // Start path: CLI → env → config → default
    let start_path = cli_start_path
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ATRIUM_START_PATH").ok())
        .or_else(|| config.general.start_path.clone())
        .unwrap_or_else(|| DEFAULT_START_PATH.to_string());

    ResolvedConfig {
        start_path,
        log_file: config
            .general
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        tick_ms: config.general.tick_ms.unwrap_or(DEFAULT_TICK_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AtriumConfig::default();
        assert!(config.general.start_path.is_none());
        assert!(config.general.tick_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = AtriumConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.start_path, DEFAULT_START_PATH);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
        assert_eq!(resolved.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AtriumConfig {
            general: GeneralConfig {
                start_path: Some("/about".to_string()),
                log_file: Some("shell.log".to_string()),
                tick_ms: Some(100),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.start_path, "/about");
        assert_eq!(resolved.log_file, "shell.log");
        assert_eq!(resolved.tick_ms, 100);
    }

    #[test]
    fn test_resolve_cli_start_path_wins() {
        let config = AtriumConfig {
            general: GeneralConfig {
                start_path: Some("/about".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("/"));
        assert_eq!(resolved.start_path, "/");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
start_path = "/about"
log_file = "custom.log"
tick_ms = 50
"#;
        let config: AtriumConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_path.as_deref(), Some("/about"));
        assert_eq!(config.general.log_file.as_deref(), Some("custom.log"));
        assert_eq!(config.general.tick_ms, Some(50));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
start_path = "/about"
"#;
        let config: AtriumConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_path.as_deref(), Some("/about"));
        assert!(config.general.log_file.is_none());
        assert!(config.general.tick_ms.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: AtriumConfig = toml::from_str("").unwrap();
        assert!(config.general.start_path.is_none());
    }
}
