//! Series data and styling for the chart

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;

use super::axis::AxisLabel;
use super::constants::FILL_PEAK_ALPHA;

/// One chart sample: an hourly point reduced to what the chart plots
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSample {
    /// Time label shown under the sample ("Now", "3 pm")
    pub label: AxisLabel,
    pub temperature: f32,
    /// Probability of precipitation, 0..=100
    pub precipitation: u8,
}

/// Translucent fill under a curve, fading from `peak_alpha` at the curve to
/// fully transparent at the band bottom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientFill {
    pub color: Rgb888,
    /// Opacity right under the curve (0-255)
    pub peak_alpha: u8,
}

impl GradientFill {
    pub const fn new(color: Rgb888) -> Self {
        Self {
            color,
            peak_alpha: FILL_PEAK_ALPHA,
        }
    }

    /// Set the opacity right under the curve
    pub const fn with_peak_alpha(mut self, peak_alpha: u8) -> Self {
        self.peak_alpha = peak_alpha;
        self
    }

    /// Opacity `depth` pixels below the curve.
    ///
    /// The ramp always spans the full `band_height`, so every curve loses
    /// opacity at the same rate however close it sits to the band bottom.
    pub fn alpha_at(&self, depth: i32, band_height: i32) -> u8 {
        if band_height <= 0 || depth < 0 || depth >= band_height {
            return 0;
        }
        let remaining = 1.0 - depth as f32 / band_height as f32;
        (self.peak_alpha as f32 * remaining).round() as u8
    }
}

/// Visual style of one series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Line color
    pub color: Rgb888,
    /// Line width in pixels
    pub line_width: u32,
    /// Optional gradient fill under the line
    pub fill: Option<GradientFill>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: Rgb888::WHITE,
            line_width: 1,
            fill: None,
        }
    }
}

impl SeriesStyle {
    /// Stroke-only style
    pub const fn line(color: Rgb888, line_width: u32) -> Self {
        Self {
            color,
            line_width,
            fill: None,
        }
    }

    /// Add a gradient fill in the line color
    pub const fn with_fill(mut self) -> Self {
        self.fill = Some(GradientFill::new(self.color));
        self
    }
}
