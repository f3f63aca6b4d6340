//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.catalog/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: FixtureConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FixtureConfig {
    /// JSON file holding the product list. Relative paths resolve against `~/.catalog/`.
    pub fixture: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewConfig {
    pub target_name: Option<String>,
    pub font_size_with_units: Option<String>,
    pub font_size_without_units: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TARGET_NAME: &str = "Kayak";
pub const DEFAULT_FONT_SIZE_WITH_UNITS: &str = "30px";
pub const DEFAULT_FONT_SIZE_WITHOUT_UNITS: &str = "30";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means the built-in fixture.
    pub fixture: Option<PathBuf>,
    pub target_name: String,
    pub font_size_with_units: String,
    pub font_size_without_units: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&CatalogConfig::default(), None)
    }
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

fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".catalog"))
}

/// Returns the path to `~/.catalog/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.catalog/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CatalogConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CatalogConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CatalogConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<CatalogConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Catalog Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [catalog]
# fixture = "products.json"          # JSON array of {name, category, price}; relative to ~/.catalog/

# [view]
# target_name = "Kayak"              # Or set CATALOG_TARGET_NAME env var
# font_size_with_units = "30px"
# font_size_without_units = "30"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_fixture` is the `--fixture` flag (None = not specified).
pub fn resolve(config: &CatalogConfig, cli_fixture: Option<&Path>) -> ResolvedConfig {
    resolve_with_env(config, cli_fixture, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`. Empty or blank
/// values count as unset.
fn resolve_with_env(
    config: &CatalogConfig,
    cli_fixture: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    // Fixture: CLI → env → config → built-in
    let fixture = cli_fixture
        .map(Path::to_path_buf)
        .or_else(|| var("CATALOG_FIXTURE").map(PathBuf::from))
        .or_else(|| config.catalog.fixture.as_deref().map(resolve_fixture_path));

    // Target name: env → config → default
    let target_name = var("CATALOG_TARGET_NAME")
        .or_else(|| config.view.target_name.clone())
        .unwrap_or_else(|| DEFAULT_TARGET_NAME.to_string());

    ResolvedConfig {
        fixture,
        target_name,
        font_size_with_units: config
            .view
            .font_size_with_units
            .clone()
            .unwrap_or_else(|| DEFAULT_FONT_SIZE_WITH_UNITS.to_string()),
        font_size_without_units: config
            .view
            .font_size_without_units
            .clone()
            .unwrap_or_else(|| DEFAULT_FONT_SIZE_WITHOUT_UNITS.to_string()),
    }
}

/// Config-file fixture paths are relative to `~/.catalog/`.
fn resolve_fixture_path(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = CatalogConfig::default();
        assert!(config.catalog.fixture.is_none());
        assert!(config.view.target_name.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CatalogConfig {
            view: ViewConfig {
                target_name: None,
                font_size_with_units: Some("12px".to_string()),
                font_size_without_units: Some("12".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, |_| None);
        assert_eq!(resolved.font_size_with_units, "12px");
        assert_eq!(resolved.font_size_without_units, "12");
    }

    #[test]
    fn test_resolve_cli_fixture_wins() {
        let config = CatalogConfig {
            catalog: FixtureConfig {
                fixture: Some("/srv/from-config.json".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Path::new("/tmp/from-cli.json")));
        assert_eq!(resolved.fixture, Some(PathBuf::from("/tmp/from-cli.json")));
    }

    #[test]
    fn test_env_overrides_config() {
        let config = CatalogConfig {
            catalog: FixtureConfig {
                fixture: Some("/srv/from-config.json".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, |key| match key {
            "CATALOG_FIXTURE" => Some("/srv/from-env.json".to_string()),
            "CATALOG_TARGET_NAME" => Some("Stadium".to_string()),
            _ => None,
        });
        assert_eq!(resolved.fixture, Some(PathBuf::from("/srv/from-env.json")));
        assert_eq!(resolved.target_name, "Stadium");
    }

    #[test]
    fn test_blank_env_values_are_unset() {
        let resolved = resolve_with_env(&CatalogConfig::default(), None, |_| {
            Some(String::new())
        });
        assert_eq!(resolved.fixture, None);
        assert_eq!(resolved.target_name, DEFAULT_TARGET_NAME);

        let resolved = resolve_with_env(&CatalogConfig::default(), None, |_| {
            Some("  ".to_string())
        });
        assert_eq!(resolved.fixture, None);
    }

    #[test]
    fn test_absolute_fixture_path_kept() {
        assert_eq!(
            resolve_fixture_path("/srv/products.json"),
            PathBuf::from("/srv/products.json")
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[catalog]
fixture = "products.json"

[view]
target_name = "Stadium"
font_size_with_units = "18px"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.catalog.fixture.as_deref(), Some("products.json"));
        assert_eq!(config.view.target_name.as_deref(), Some("Stadium"));
        assert_eq!(config.view.font_size_with_units.as_deref(), Some("18px"));
        assert!(config.view.font_size_without_units.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[view]
font_size_without_units = "16"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.view.font_size_without_units.as_deref(), Some("16"));
        assert!(config.catalog.fixture.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = parse_config("[view\ntarget_name = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
