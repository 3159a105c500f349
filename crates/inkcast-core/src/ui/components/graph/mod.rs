//! Chart rendering for the hourly timeline
//!
//! This module provides the dual-series chart drawn across the middle of
//! the dashboard:
//!
//! - Catmull-Rom smoothing of pixel-space control points
//! - Independent value-to-pixel mapping per series
//! - Gradient fills fading from the curve to the band bottom
//! - Corner scale labels and per-sample time labels
//!
//! # Examples
//!
//! ```ignore
//! use inkcast_core::ui::components::graph::*;
//!
//! let chart = Chart::new(
//!     layout.chart,
//!     SeriesStyle::line(ACCENT_WARM, TEMPERATURE_LINE_WIDTH_PX).with_fill(),
//!     SeriesStyle::line(ACCENT_COOL, PRECIPITATION_LINE_WIDTH_PX).with_fill(),
//!     axis_style,
//! );
//! chart.draw(&model.hourly, model.temp_min, model.temp_max, "°F", &mut canvas)?;
//! ```

mod axis;
mod component;
pub mod constants;
mod interpolation;
pub mod series;
pub mod viewport;

pub use axis::{AxisLabel, AxisStyle, percent_label, temperature_label};
pub use component::Chart;
pub use interpolation::smooth;
pub use series::{ChartSample, GradientFill, SeriesStyle};
pub use viewport::{ChartBand, ValueRange};
