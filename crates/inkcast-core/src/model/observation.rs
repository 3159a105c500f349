//! Weather records produced by the fetcher

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Descriptions for the provider's 1..=5 air quality scale
const AIR_QUALITY_LABELS: [&str; 5] = ["Good", "Fair", "Moderate", "Poor", "Very Poor"];

/// Air quality index with its textual label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    /// Provider index (1 = good .. 5 = very poor, 0 = unknown)
    pub index: u8,
    /// Human readable label
    pub label: String,
}

impl AirQuality {
    /// Build from the provider's index, labelling out-of-range values.
    pub fn from_index(index: u8) -> Self {
        let label = match index {
            0 => "N/A",
            i => AIR_QUALITY_LABELS[(i as usize - 1).min(AIR_QUALITY_LABELS.len() - 1)],
        };

        Self {
            index,
            label: label.to_string(),
        }
    }
}

impl Default for AirQuality {
    fn default() -> Self {
        Self::from_index(0)
    }
}

/// Geographic position of the observation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

fn default_visibility() -> f32 {
    10.0
}

/// Current conditions snapshot.
///
/// Temperatures and speeds are in the configured unit system. Timestamps are
/// local wall-clock times of the dashboard's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature: f32,
    pub feels_like: f32,
    pub temp_min: f32,
    pub temp_max: f32,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Pressure in hPa
    pub pressure: u32,
    pub wind_speed: f32,
    /// Wind direction in degrees
    #[serde(default)]
    pub wind_direction: u16,
    pub description: String,
    /// Provider condition code, e.g. "02d"
    pub condition: String,
    pub city: String,
    pub country: String,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    /// Visibility in miles or kilometres
    #[serde(default = "default_visibility")]
    pub visibility: f32,
    #[serde(default)]
    pub uv_index: f32,
    #[serde(default)]
    pub air_quality: AirQuality,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub coordinates: Coordinates,
}

/// One point of the hourly timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub time: NaiveDateTime,
    pub temperature: f32,
    pub condition: String,
    /// Probability of precipitation, 0..=100
    pub precipitation: u8,
}

/// Summary of one forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub day_name: String,
    pub temp_min: f32,
    pub temp_max: f32,
    pub description: String,
    pub condition: String,
    pub humidity: u8,
    /// Average wind speed over the day
    pub wind_speed: f32,
}

impl DailyForecast {
    /// Today's entry as reported by the current observation
    pub fn from_observation(current: &WeatherObservation, date: NaiveDate) -> Self {
        Self {
            date,
            day_name: date.format("%a").to_string(),
            temp_min: current.temp_min,
            temp_max: current.temp_max,
            description: current.description.clone(),
            condition: current.condition.clone(),
            humidity: current.humidity,
            wind_speed: current.wind_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_quality_labels_follow_index() {
        assert_eq!(AirQuality::from_index(1).label, "Good");
        assert_eq!(AirQuality::from_index(2).label, "Fair");
        assert_eq!(AirQuality::from_index(5).label, "Very Poor");
        assert_eq!(AirQuality::from_index(9).label, "Very Poor");
        assert_eq!(AirQuality::from_index(0).label, "N/A");
    }
}
