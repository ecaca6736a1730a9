use crate::bootstrap::{DEFAULT_INTRO_DELAY, DEFAULT_SEASON};
use crate::controller::{DEFAULT_NARROW_VIEWPORT_WIDTH, StaleResponses};
use crate::{Error, Result};
use plenilunio_providers::{CatalogSource, DEFAULT_API_BASE_URL, DEFAULT_CLIMATE_TIMEOUT};
use plenilunio_types::SeasonId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PLENILUNIO_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory, if a file exists there
///
/// Returns None when no config file applies; built-in defaults are used.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PLENILUNIO_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("plenilunio").join("config.toml"))
        .filter(|path| path.exists())
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the climate service.
    pub api_base_url: String,
    /// `bundled`, a file path, or an http(s) URL.
    pub catalog: String,
    pub default_season: String,
    /// Season controls shown on interactive surfaces.
    pub controls: Vec<String>,
    pub intro_delay_ms: u64,
    pub climate_timeout_secs: u64,
    pub narrow_viewport_width: u16,
    pub stale_responses: StaleResponses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            catalog: "bundled".to_string(),
            default_season: DEFAULT_SEASON.to_string(),
            controls: (1..=8).map(|id| id.to_string()).collect(),
            intro_delay_ms: DEFAULT_INTRO_DELAY.as_millis() as u64,
            climate_timeout_secs: DEFAULT_CLIMATE_TIMEOUT.as_secs(),
            narrow_viewport_width: DEFAULT_NARROW_VIEWPORT_WIDTH,
            stale_responses: StaleResponses::default(),
        }
    }
}

impl Config {
    /// Load from the resolved path, or defaults when there is none.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.climate_timeout_secs == 0 {
            return Err(Error::Config(
                "climate_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(Error::Config("api_base_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::parse(&self.catalog)
    }

    pub fn control_ids(&self) -> Vec<SeasonId> {
        self.controls
            .iter()
            .map(|id| SeasonId::from(id.as_str()))
            .collect()
    }

    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    pub fn climate_timeout(&self) -> Duration {
        Duration::from_secs(self.climate_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://plenilunio-api.onrender.com");
        assert_eq!(config.default_season, "1");
        assert_eq!(config.controls.len(), 8);
        assert_eq!(config.intro_delay(), Duration::from_secs(2));
        assert_eq!(config.climate_timeout(), Duration::from_secs(60));
        assert_eq!(config.narrow_viewport_width, 768);
        assert_eq!(config.stale_responses, StaleResponses::Discard);
        assert_eq!(config.catalog_source(), CatalogSource::Bundled);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            stale_responses: StaleResponses::Render,
            ..Config::default()
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "intro_delay_ms = 0\nstale_responses = \"render\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.intro_delay_ms, 0);
        assert_eq!(loaded.stale_responses, StaleResponses::Render);
        assert_eq!(loaded.default_season, "1");
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_zero_timeout_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "climate_timeout_secs = 0\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() {
        let resolved = resolve_config_path(Some("/tmp/plenilunio.toml"));
        assert_eq!(resolved, Some(PathBuf::from("/tmp/plenilunio.toml")));
    }
}
