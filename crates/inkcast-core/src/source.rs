//! Weather sources
//!
//! The dashboard does not talk to a weather API itself. A [`WeatherSource`]
//! hands over a complete [`WeatherSnapshot`] per cycle, or fails, in which
//! case the cycle renders the no-data frame.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDateTime, NaiveTime};
use log::debug;

use crate::error::SourceError;
use crate::model::{AirQuality, Coordinates, DailyForecast, HourlyPoint, WeatherObservation, WeatherSnapshot};

/// Provider of weather data for one render cycle
pub trait WeatherSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Produce the snapshot for a cycle starting at `now`
    fn fetch(&mut self, now: NaiveDateTime) -> Result<WeatherSnapshot, SourceError>;
}

impl<S: WeatherSource + ?Sized> WeatherSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&mut self, now: NaiveDateTime) -> Result<WeatherSnapshot, SourceError> {
        (**self).fetch(now)
    }
}

// ----------------------------------------------------------------------------
// Sample data
// ----------------------------------------------------------------------------

/// Rain probability of the synthetic hourly timeline, one value per 3 hours
const SAMPLE_RAIN_CHANCES: [u8; 11] = [5, 10, 15, 25, 35, 40, 35, 25, 15, 10, 5];

/// Hours between synthetic hourly points
const SAMPLE_HOURLY_STEP_HOURS: i64 = 3;

/// Number of synthetic forecast days
const SAMPLE_DAYS: i64 = 7;

/// Deterministic synthetic weather: 54°F and partly cloudy in Philadelphia
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }

    /// Current conditions at `now`
    pub fn observation(now: NaiveDateTime) -> WeatherObservation {
        let today = now.date();
        let at = |h, m| today.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default());

        WeatherObservation {
            temperature: 54.0,
            feels_like: 51.0,
            temp_min: 51.0,
            temp_max: 56.0,
            humidity: 60,
            pressure: 1016,
            wind_speed: 5.99,
            wind_direction: 180,
            description: "Partly Cloudy".into(),
            condition: "02d".into(),
            city: "Philadelphia".into(),
            country: "US".into(),
            sunrise: at(7, 20),
            sunset: at(18, 10),
            visibility: 10.0,
            uv_index: 2.9,
            air_quality: AirQuality::from_index(2),
            timestamp: now,
            coordinates: Coordinates {
                lat: 39.95,
                lon: -75.17,
            },
        }
    }

    /// Full snapshot at `now`: the current point plus 11 three-hourly points,
    /// and 7 days starting today
    pub fn snapshot(now: NaiveDateTime) -> WeatherSnapshot {
        let current = Self::observation(now);

        let hourly = SAMPLE_RAIN_CHANCES
            .iter()
            .enumerate()
            .map(|(i, rain)| HourlyPoint {
                time: now + Duration::hours((i as i64 + 1) * SAMPLE_HOURLY_STEP_HOURS),
                temperature: 50.0 + i as f32,
                condition: "02d".into(),
                precipitation: *rain,
            })
            .collect();

        let daily = (0..SAMPLE_DAYS)
            .map(|i| {
                let date = now.date() + Duration::days(i);
                DailyForecast {
                    date,
                    day_name: date.format("%a").to_string(),
                    temp_min: 46.0 + i as f32,
                    temp_max: 54.0 + i as f32,
                    description: "Partly Cloudy".into(),
                    condition: "02d".into(),
                    humidity: 60,
                    wind_speed: 5.99,
                }
            })
            .collect();

        WeatherSnapshot::assemble(current, hourly, daily, now)
    }
}

impl WeatherSource for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn fetch(&mut self, now: NaiveDateTime) -> Result<WeatherSnapshot, SourceError> {
        Ok(Self::snapshot(now))
    }
}

// ----------------------------------------------------------------------------
// Snapshot file
// ----------------------------------------------------------------------------

/// Reads a JSON [`WeatherSnapshot`] written by an external fetcher
#[derive(Debug, Clone)]
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WeatherSource for SnapshotFileSource {
    fn name(&self) -> &str {
        "snapshot-file"
    }

    fn fetch(&mut self, _now: NaiveDateTime) -> Result<WeatherSnapshot, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::Unavailable(format!(
                "no snapshot at {}",
                self.path.display()
            )));
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let snapshot: WeatherSnapshot =
            serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Read snapshot from {}: {} hourly, {} daily",
            self.path.display(),
            snapshot.hourly.len(),
            snapshot.daily.len()
        );
        Ok(snapshot)
    }
}
