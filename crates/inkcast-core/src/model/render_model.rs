//! View model assembled fresh for every render cycle

use chrono::NaiveDateTime;

use crate::ui::components::graph::constants::CHART_MAX_POINTS;
use crate::ui::components::graph::{AxisLabel, ChartSample};

use super::observation::{DailyForecast, HourlyPoint, WeatherObservation};
use super::snapshot::WeatherSnapshot;

/// Label used for the first chart sample and the first forecast card
pub const NOW_LABEL: &str = "Now";

/// Everything the panels need, formatted and clipped to panel capacities.
///
/// Built once per cycle from a [`WeatherSnapshot`] and never mutated.
#[derive(Debug, Clone)]
pub struct RenderModel {
    /// "City, Country"
    pub location: String,
    /// "Friday, March 14"
    pub date: String,
    pub current: WeatherObservation,
    /// Chart samples, at most [`CHART_MAX_POINTS`]
    pub hourly: Vec<ChartSample>,
    /// Lowest chart temperature
    pub temp_min: f32,
    /// Highest chart temperature
    pub temp_max: f32,
    /// Forecast days, at most the card capacity
    pub daily: Vec<DailyForecast>,
    /// "3:05pm"
    pub last_updated: String,
}

impl RenderModel {
    /// Build the view model, clipping the daily sequence to `forecast_capacity`.
    pub fn build(snapshot: &WeatherSnapshot, forecast_capacity: usize) -> Self {
        let current = snapshot.current.clone();

        let hourly: Vec<ChartSample> = snapshot
            .hourly
            .iter()
            .take(CHART_MAX_POINTS)
            .enumerate()
            .map(|(i, point)| chart_sample(i, point))
            .collect();

        let (temp_min, temp_max) = temperature_bounds(&hourly, current.temperature);

        let daily = snapshot
            .daily
            .iter()
            .take(forecast_capacity)
            .cloned()
            .collect();

        Self {
            location: format!("{}, {}", current.city, current.country),
            date: current.timestamp.format("%A, %B %d").to_string(),
            last_updated: format_clock_compact(snapshot.last_updated),
            current,
            hourly,
            temp_min,
            temp_max,
            daily,
        }
    }
}

fn chart_sample(index: usize, point: &HourlyPoint) -> ChartSample {
    let mut label = AxisLabel::new();
    if index == 0 {
        let _ = label.push_str(NOW_LABEL);
    } else {
        let _ = core::fmt::write(&mut label, format_args!("{}", hour_label(point.time)));
    }

    ChartSample {
        label,
        temperature: point.temperature,
        precipitation: point.precipitation.min(100),
    }
}

/// Min/max over the chart samples, or the fallback when there are none
fn temperature_bounds(samples: &[ChartSample], fallback: f32) -> (f32, f32) {
    if samples.is_empty() {
        return (fallback, fallback);
    }

    samples.iter().fold((f32::MAX, f32::MIN), |(lo, hi), s| {
        (lo.min(s.temperature), hi.max(s.temperature))
    })
}

/// "3 pm"
fn hour_label(time: NaiveDateTime) -> String {
    time.format("%-I %p").to_string().to_lowercase()
}

/// "3:05pm"
fn format_clock_compact(time: NaiveDateTime) -> String {
    time.format("%-I:%M%p").to_string().to_lowercase()
}

/// "7:20 AM"
pub fn format_clock(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}
