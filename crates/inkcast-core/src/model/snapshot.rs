//! Complete fetcher output for one render cycle

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::observation::{DailyForecast, HourlyPoint, WeatherObservation};

/// Current conditions plus forecast sequences, as handed over by a source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: WeatherObservation,
    /// Chronological hourly timeline
    pub hourly: Vec<HourlyPoint>,
    /// Daily summaries, today first
    pub daily: Vec<DailyForecast>,
    pub last_updated: NaiveDateTime,
}

impl WeatherSnapshot {
    /// Combine raw forecast sequences with the current observation.
    ///
    /// - The first daily entry is replaced by today's values from `current`
    ///   when it is dated today, otherwise today's entry is inserted in front
    ///   (late at night the raw forecast may already start tomorrow).
    /// - A "now" point with 0% precipitation is prepended to the hourly
    ///   timeline so the chart starts at the present.
    ///
    /// Empty sequences are left empty.
    pub fn assemble(
        current: WeatherObservation,
        mut hourly: Vec<HourlyPoint>,
        mut daily: Vec<DailyForecast>,
        now: NaiveDateTime,
    ) -> Self {
        let today = now.date();

        if let Some(first) = daily.first() {
            let today_entry = DailyForecast::from_observation(&current, today);
            if first.date == today {
                daily[0] = today_entry;
            } else {
                daily.insert(0, today_entry);
            }
        }

        if !hourly.is_empty() {
            hourly.insert(
                0,
                HourlyPoint {
                    time: now,
                    temperature: current.temperature,
                    condition: current.condition.clone(),
                    precipitation: 0,
                },
            );
        }

        Self {
            current,
            hourly,
            daily,
            last_updated: now,
        }
    }
}
