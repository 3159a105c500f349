//! Constants for chart rendering
//!
//! All magic numbers are defined here with descriptive names and units.

/// Number of interpolated steps per input interval of the curve smoother
///
/// 20 keeps the curve visually smooth at the chart's sample spacing while
/// staying well under a thousand points for a full chart.
pub const DEFAULT_SMOOTH_SEGMENTS: usize = 20;

/// Maximum number of samples the chart plots
pub const CHART_MAX_POINTS: usize = 8;

/// Maximum length of formatted axis labels (bytes)
pub const MAX_AXIS_LABEL_LENGTH: usize = 16;

/// Opacity of the gradient fill right under the curve (0-255)
pub const FILL_PEAK_ALPHA: u8 = 80;

/// Temperature curve stroke width in pixels
pub const TEMPERATURE_LINE_WIDTH_PX: u32 = 3;

/// Precipitation curve stroke width in pixels
pub const PRECIPITATION_LINE_WIDTH_PX: u32 = 2;

/// Data ranges narrower than this are treated as flat
pub const MIN_DATA_RANGE: f32 = 0.001;

/// Upper bound of the probability axis in percent
pub const PROBABILITY_MAX: f32 = 100.0;

/// How far the top corner labels sit above the band in pixels
pub const CORNER_LABEL_RISE_PX: i32 = 5;

/// How far the bottom corner labels sit above the band bottom in pixels
pub const CORNER_LABEL_DROP_PX: i32 = 8;
