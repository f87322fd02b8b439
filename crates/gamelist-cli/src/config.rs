use anyhow::{Context, Result};
use gamelist_types::{OutOfRange, PageSize, SortKey, ViewParameters};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GAMELIST_CONFIG environment variable (with tilde expansion)
/// 3. `<user config dir>/gamelist/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("GAMELIST_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("gamelist").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Initial view settings applied before any command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ViewDefaults {
    #[serde(default)]
    pub per_page: PageSize,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub out_of_range: OutOfRange,
}

impl ViewDefaults {
    pub fn initial_parameters(&self) -> ViewParameters {
        ViewParameters::new()
            .page_size(self.per_page)
            .sort(self.sort)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub defaults: ViewDefaults,
}

impl Config {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve and load, falling back to defaults when no location is known.
    pub fn resolve(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}
