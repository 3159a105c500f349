//! UI components library

pub mod card;
pub mod graph;

pub use card::{CardMetrics, ForecastCard};
pub use graph::Chart;
