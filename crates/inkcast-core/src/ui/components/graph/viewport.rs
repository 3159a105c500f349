//! Mapping from series values to pixel coordinates inside the chart band
//!
//! Both series share the band. Temperatures are scaled between the recorded
//! minimum and maximum, probabilities between 0 and 100 percent. In both
//! cases the minimum lands on the band bottom and the maximum on the band top.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::constants::{MIN_DATA_RANGE, PROBABILITY_MAX};

/// Closed value range of one series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Fixed 0-100 % range used for probabilities
    pub const fn percent() -> Self {
        Self::new(0.0, PROBABILITY_MAX)
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// True when the range is too narrow to scale against
    pub fn is_flat(&self) -> bool {
        self.span().abs() < MIN_DATA_RANGE
    }
}

/// Pixel band the chart plots into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBand {
    area: Rectangle,
}

impl ChartBand {
    pub fn new(area: Rectangle) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    pub fn left(&self) -> i32 {
        self.area.top_left.x
    }

    pub fn right(&self) -> i32 {
        self.area.top_left.x + self.area.size.width as i32
    }

    pub fn top(&self) -> i32 {
        self.area.top_left.y
    }

    /// Baseline the minimum value maps to
    pub fn bottom(&self) -> i32 {
        self.area.top_left.y + self.area.size.height as i32
    }

    /// Vertical center, where a flat series is drawn
    pub fn middle(&self) -> i32 {
        self.area.top_left.y + (self.area.size.height / 2) as i32
    }

    /// Screen y for `value` within `range`.
    ///
    /// A flat range collapses to the band's vertical middle. Values outside
    /// the range are clamped to the band.
    pub fn value_to_y(&self, value: f32, range: ValueRange) -> i32 {
        if range.is_flat() || !value.is_finite() {
            return self.middle();
        }

        let norm = ((value - range.min) / range.span()).clamp(0.0, 1.0);
        self.bottom() - (norm * self.area.size.height as f32) as i32
    }

    /// Screen x of sample `index` out of `count` evenly spaced samples
    pub fn sample_x(&self, index: usize, count: usize) -> i32 {
        if count < 2 {
            return self.left();
        }
        let offset = index as f32 * self.area.size.width as f32 / (count - 1) as f32;
        self.left() + offset as i32
    }

    /// Map a whole series to screen points
    pub fn map_series(&self, values: impl ExactSizeIterator<Item = f32>, range: ValueRange) -> Vec<Point> {
        let count = values.len();
        values
            .enumerate()
            .map(|(i, v)| Point::new(self.sample_x(i, count), self.value_to_y(v, range)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> ChartBand {
        ChartBand::new(Rectangle::new(Point::new(85, 257), Size::new(590, 80)))
    }

    #[test]
    fn higher_temperature_is_higher_on_screen() {
        let band = band();
        let range = ValueRange::new(40.0, 60.0);
        let ys: Vec<i32> = [40.0, 50.0, 60.0]
            .iter()
            .map(|t| band.value_to_y(*t, range))
            .collect();

        assert!(ys[0] > ys[1] && ys[1] > ys[2]);
        assert_eq!(ys[0], band.bottom());
        assert_eq!(ys[2], band.top());
    }

    #[test]
    fn flat_range_collapses_to_middle() {
        let band = band();
        let range = ValueRange::new(54.0, 54.0);
        assert_eq!(band.value_to_y(54.0, range), 297);
        assert_eq!(band.value_to_y(54.0, range), band.middle());
    }

    #[test]
    fn probability_uses_fixed_range() {
        let band = band();
        assert_eq!(band.value_to_y(0.0, ValueRange::percent()), band.bottom());
        assert_eq!(band.value_to_y(100.0, ValueRange::percent()), band.top());
        assert_eq!(band.value_to_y(50.0, ValueRange::percent()), band.bottom() - 40);
    }

    #[test]
    fn samples_span_the_band_width() {
        let band = band();
        assert_eq!(band.sample_x(0, 8), band.left());
        assert_eq!(band.sample_x(7, 8), band.right());
        assert!(band.sample_x(3, 8) < band.sample_x(4, 8));
    }

    #[test]
    fn map_series_keeps_order() {
        let points = band().map_series([40.0, 50.0, 60.0].into_iter(), ValueRange::new(40.0, 60.0));
        assert_eq!(points.len(), 3);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x && w[0].y > w[1].y));
    }
}
