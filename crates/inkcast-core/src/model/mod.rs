//! Weather data handed over by sources, and the per-cycle view model

mod observation;
mod render_model;
mod snapshot;
mod units;

pub use observation::{AirQuality, Coordinates, DailyForecast, HourlyPoint, WeatherObservation};
pub use render_model::{NOW_LABEL, RenderModel, format_clock};
pub use snapshot::WeatherSnapshot;
pub use units::{UnitSystem, whole_degrees};
