//! Dashboard configuration
//!
//! Loaded from a TOML file where every key is optional. A missing file is
//! not an error and yields the defaults. Environment overrides
//! (`CITY_NAME`, `COUNTRY_CODE`, `UNITS`) are applied after loading.
//!
//! ```toml
//! units = "metric"
//!
//! [location]
//! city = "Philadelphia"
//! country = "US"
//!
//! [display]
//! width = 800
//! height = 480
//!
//! [schedule]
//! update_interval_minutes = 20
//! daily_refresh = "00:00"
//!
//! [panels]
//! forecast_days = 6
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::UnitSystem;

/// Maximum number of forecast cards
pub const MAX_FORECAST_DAYS: usize = 7;

/// Format of `schedule.daily_refresh`
const DAILY_REFRESH_FORMAT: &str = "%H:%M";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub units: UnitSystem,
    pub location: LocationConfig,
    pub display: DisplayConfig,
    pub schedule: ScheduleConfig,
    pub panels: PanelConfig,
    pub assets: AssetConfig,
    pub output: OutputConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub city: String,
    pub country: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            city: "London".into(),
            country: "UK".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Apply the final contrast/saturation pass
    pub enhance: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            enhance: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub update_interval_minutes: u32,
    /// Wall-clock time of the extra daily refresh, "HH:MM"
    pub daily_refresh: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            update_interval_minutes: 20,
            daily_refresh: "00:00".into(),
        }
    }
}

impl ScheduleConfig {
    pub fn daily_refresh_time(&self) -> Result<NaiveTime, ConfigError> {
        NaiveTime::parse_from_str(self.daily_refresh.trim(), DAILY_REFRESH_FORMAT).map_err(|e| {
            ConfigError::Invalid {
                key: "schedule.daily_refresh",
                reason: format!("'{}' is not HH:MM ({e})", self.daily_refresh),
            }
        })
    }
}

/// Which optional panels are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub current: bool,
    pub details: bool,
    pub chart: bool,
    pub forecast: bool,
    /// Number of forecast cards, clamped to 1..=7
    pub forecast_days: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            current: true,
            details: true,
            chart: true,
            forecast: true,
            forecast_days: 6,
        }
    }
}

impl PanelConfig {
    /// Card capacity of the forecast row
    pub fn forecast_capacity(&self) -> usize {
        self.forecast_days.clamp(1, MAX_FORECAST_DAYS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub icon_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            icon_dir: PathBuf::from("icons"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path the PNG sink writes every frame to
    pub frame_path: PathBuf,
    /// Optional extra copy kept for debugging
    pub debug_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            frame_path: PathBuf::from("weather_display.png"),
            debug_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in synthetic data
    #[default]
    Sample,
    /// JSON snapshot written by an external fetcher
    File,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub path: Option<PathBuf>,
}

impl DashboardConfig {
    /// Load and validate the config at `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Apply `CITY_NAME`, `COUNTRY_CODE` and `UNITS` from `lookup`.
    ///
    /// `lookup` is normally `std::env::var`; empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(city) = value("CITY_NAME") {
            self.location.city = city.trim().to_string();
        }
        if let Some(country) = value("COUNTRY_CODE") {
            self.location.country = country.trim().to_string();
        }
        if let Some(units) = value("UNITS") {
            self.units = units.parse()?;
        }

        Ok(())
    }

    /// Reject values that would make rendering or scheduling impossible
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::Invalid {
                key: "display",
                reason: format!(
                    "canvas must be at least 1x1, got {}x{}",
                    self.display.width, self.display.height
                ),
            });
        }

        if self.schedule.update_interval_minutes == 0 {
            return Err(ConfigError::Invalid {
                key: "schedule.update_interval_minutes",
                reason: "interval must be at least one minute".into(),
            });
        }

        self.schedule.daily_refresh_time()?;

        if self.source.kind == SourceKind::File && self.source.path.is_none() {
            return Err(ConfigError::Invalid {
                key: "source.path",
                reason: "a file source needs a snapshot path".into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load(&dir.path().join("inkcast.toml")).unwrap();

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.units, UnitSystem::Imperial);
        assert_eq!((config.display.width, config.display.height), (800, 480));
        assert_eq!(config.schedule.update_interval_minutes, 20);
        assert_eq!(config.panels.forecast_capacity(), 6);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inkcast.toml");
        std::fs::write(
            &path,
            "units = \"metric\"\n[location]\ncity = \"Oslo\"\n[panels]\nchart = false\n",
        )
        .unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.units, UnitSystem::Metric);
        assert_eq!(config.location.city, "Oslo");
        assert_eq!(config.location.country, "UK");
        assert!(!config.panels.chart);
        assert!(config.panels.forecast);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "units = [").unwrap();

        let err = DashboardConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn zero_sizes_and_intervals_are_rejected() {
        let mut config = DashboardConfig::default();
        config.display.width = 0;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.schedule.update_interval_minutes = 0;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.schedule.daily_refresh = "25:00".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn file_source_requires_path() {
        let mut config = DashboardConfig::default();
        config.source.kind = SourceKind::File;
        assert!(config.validate().is_err());

        config.source.path = Some(PathBuf::from("snapshot.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides_replace_location_and_units() {
        let env: HashMap<&str, &str> = [
            ("CITY_NAME", "Philadelphia"),
            ("COUNTRY_CODE", "US"),
            ("UNITS", "metric"),
        ]
        .into_iter()
        .collect();

        let mut config = DashboardConfig::default();
        config
            .apply_env_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.location.city, "Philadelphia");
        assert_eq!(config.location.country, "US");
        assert_eq!(config.units, UnitSystem::Metric);
    }

    #[test]
    fn blank_env_values_are_ignored_and_bad_units_fail() {
        let mut config = DashboardConfig::default();
        config
            .apply_env_overrides(|k| (k == "CITY_NAME").then(|| "  ".to_string()))
            .unwrap();
        assert_eq!(config.location.city, "London");

        let err = config
            .apply_env_overrides(|k| (k == "UNITS").then(|| "kelvin".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "units", .. }));
    }

    #[test]
    fn forecast_days_are_clamped() {
        let mut panels = PanelConfig::default();
        panels.forecast_days = 0;
        assert_eq!(panels.forecast_capacity(), 1);
        panels.forecast_days = 12;
        assert_eq!(panels.forecast_capacity(), MAX_FORECAST_DAYS);
    }

    #[test]
    fn daily_refresh_parses() {
        let schedule = ScheduleConfig::default();
        assert_eq!(
            schedule.daily_refresh_time().unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
    }
}
