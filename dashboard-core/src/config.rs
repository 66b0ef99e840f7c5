use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    geo::{Coordinates, DisabledGeolocator, FixedGeolocator, Geolocator, IpGeolocator},
    provider::weatherapi::DEFAULT_BASE_URL,
    query::Query,
};

pub const DEFAULT_QUERY: &str = "Jaipur";

/// How the "use my location" action finds the device position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationMode {
    #[default]
    Ip,
    Fixed,
    Disabled,
}

impl GeolocationMode {
    pub const fn all() -> &'static [GeolocationMode] {
        &[GeolocationMode::Ip, GeolocationMode::Fixed, GeolocationMode::Disabled]
    }
}

impl std::fmt::Display for GeolocationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GeolocationMode::Ip => "ip",
            GeolocationMode::Fixed => "fixed",
            GeolocationMode::Disabled => "disabled",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub mode: GeolocationMode,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_query = "Jaipur"
///
/// [geolocation]
/// mode = "fixed"
/// latitude = 26.91
/// longitude = 75.79
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Looked up once when the dashboard starts.
    pub default_query: String,
    pub geolocation: GeolocationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            geolocation: GeolocationConfig::default(),
        }
    }
}

impl Config {
    /// Returns the weatherapi.com key, or an error telling the user how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weather-dashboard configure` and enter your weatherapi.com key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn default_query(&self) -> Result<Query> {
        Query::place(&self.default_query)
            .ok_or_else(|| anyhow!("`default_query` in the config file must not be empty"))
    }

    /// Build the geolocator selected by `[geolocation] mode`.
    pub fn geolocator(&self) -> Result<Arc<dyn Geolocator>> {
        let geo = &self.geolocation;
        let boxed: Arc<dyn Geolocator> = match geo.mode {
            GeolocationMode::Ip => Arc::new(IpGeolocator::new()),
            GeolocationMode::Disabled => Arc::new(DisabledGeolocator),
            GeolocationMode::Fixed => {
                let (Some(latitude), Some(longitude)) = (geo.latitude, geo.longitude) else {
                    return Err(anyhow!(
                        "Geolocation mode `fixed` needs both `latitude` and `longitude`.\n\
                         Hint: run `weather-dashboard configure` to set them."
                    ));
                };
                Arc::new(FixedGeolocator::new(Coordinates { latitude, longitude }))
            }
        };

        Ok(boxed)
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Where the interactive dashboard writes its log.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_local_dir().join("weather-dashboard.log"))
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "weather-dashboard", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key("   ".into());
        assert!(cfg.api_key().is_err());

        cfg.set_api_key("KEY".into());
        assert_eq!(cfg.api_key().unwrap(), "KEY");
    }

    #[test]
    fn defaults_point_at_weatherapi_and_jaipur() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(cfg.default_query().unwrap(), Query::Place("Jaipur".into()));
        assert_eq!(cfg.geolocation.mode, GeolocationMode::Ip);
    }

    #[test]
    fn empty_default_query_is_rejected() {
        let cfg = Config { default_query: "  ".into(), ..Config::default() };
        assert!(cfg.default_query().is_err());
    }

    #[test]
    fn fixed_geolocation_requires_coordinates() {
        let mut cfg = Config::default();
        cfg.geolocation.mode = GeolocationMode::Fixed;
        cfg.geolocation.latitude = Some(26.9);

        let err = cfg.geolocator().unwrap_err();
        assert!(err.to_string().contains("needs both `latitude` and `longitude`"));

        cfg.geolocation.longitude = Some(75.8);
        assert!(cfg.geolocator().is_ok());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: Config = toml::from_str("api_key = \"abc\"\n[geolocation]\nmode = \"disabled\"\n")
            .expect("partial config parses");

        assert_eq!(cfg.api_key().unwrap(), "abc");
        assert_eq!(cfg.default_query, DEFAULT_QUERY);
        assert_eq!(cfg.geolocation.mode, GeolocationMode::Disabled);
    }

    #[test]
    fn save_then_load_from_temp_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.default_query = "Oslo".into();
        cfg.save_to(&path).expect("save succeeds");

        let loaded = Config::load_from(&path).expect("load succeeds");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let loaded = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(loaded, Config::default());
    }
}
