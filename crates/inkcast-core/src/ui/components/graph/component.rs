//! Dual-series time chart
//!
//! Temperature and precipitation probability share one band. Each series is
//! mapped to pixels, smoothed, filled with a fading gradient and stroked.
//! The precipitation layer is drawn after the temperature layer so it sits
//! on top where they overlap.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::framebuffer::BlendTarget;

use super::axis::{AxisStyle, draw_corner_labels, draw_time_labels};
use super::constants::DEFAULT_SMOOTH_SEGMENTS;
use super::interpolation::{draw_curve, draw_gradient_fill, smooth};
use super::series::{ChartSample, SeriesStyle};
use super::viewport::{ChartBand, ValueRange};

/// Chart component for the hourly timeline
pub struct Chart {
    band: ChartBand,
    temperature_style: SeriesStyle,
    precipitation_style: SeriesStyle,
    axis_style: AxisStyle,
    segments: usize,
}

impl Chart {
    /// Create a chart plotting into `area`
    pub fn new(
        area: Rectangle,
        temperature_style: SeriesStyle,
        precipitation_style: SeriesStyle,
        axis_style: AxisStyle,
    ) -> Self {
        Self {
            band: ChartBand::new(area),
            temperature_style,
            precipitation_style,
            axis_style,
            segments: DEFAULT_SMOOTH_SEGMENTS,
        }
    }

    /// Set the number of smoothing steps per sample interval
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn band(&self) -> &ChartBand {
        &self.band
    }

    /// Smoothed temperature curve in screen space
    pub fn temperature_curve(&self, samples: &[ChartSample], range: ValueRange) -> Vec<Point> {
        let points = self
            .band
            .map_series(samples.iter().map(|s| s.temperature), range);
        smooth(&points, self.segments)
    }

    /// Smoothed precipitation curve in screen space
    pub fn precipitation_curve(&self, samples: &[ChartSample]) -> Vec<Point> {
        let points = self.band.map_series(
            samples.iter().map(|s| s.precipitation as f32),
            ValueRange::percent(),
        );
        smooth(&points, self.segments)
    }

    /// Draw both series with labels.
    ///
    /// Fewer than two samples leaves the band empty.
    pub fn draw<D: BlendTarget>(
        &self,
        samples: &[ChartSample],
        temp_min: f32,
        temp_max: f32,
        unit: &str,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if samples.len() < 2 {
            debug!("Skipping chart, {} sample(s)", samples.len());
            return Ok(());
        }

        draw_corner_labels(&self.band, temp_min, temp_max, unit, &self.axis_style, display)?;

        let temperature = self.temperature_curve(samples, ValueRange::new(temp_min, temp_max));
        let precipitation = self.precipitation_curve(samples);

        for (curve, style) in [
            (&temperature, &self.temperature_style),
            (&precipitation, &self.precipitation_style),
        ] {
            if let Some(fill) = &style.fill {
                draw_gradient_fill(curve, &self.band, fill, display);
            }
            draw_curve(curve, style, display)?;
        }

        draw_time_labels(
            &self.band,
            samples.iter().map(|s| s.label.as_str()),
            &self.axis_style,
            display,
        )?;

        debug!(
            "Chart drawn: {} samples, {}..{}",
            samples.len(),
            temp_min,
            temp_max
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Canvas;
    use crate::ui::components::graph::AxisLabel;
    use crate::ui::text::FontSpec;
    use embedded_graphics::mono_font::iso_8859_1::FONT_6X10;
    use embedded_graphics::pixelcolor::Rgb888;

    fn chart() -> Chart {
        Chart::new(
            Rectangle::new(Point::new(85, 257), Size::new(590, 80)),
            SeriesStyle::line(Rgb888::new(255, 140, 66), 3).with_fill(),
            SeriesStyle::line(Rgb888::new(100, 150, 255), 2).with_fill(),
            AxisStyle {
                font: FontSpec::new(&FONT_6X10),
                color: Rgb888::WHITE,
                left_x: 42,
                right_gap: 8,
                time_gap: 10,
            },
        )
    }

    fn samples(temps: &[f32]) -> Vec<ChartSample> {
        temps
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let mut label = AxisLabel::new();
                let _ = core::fmt::write(&mut label, format_args!("{}", i));
                ChartSample {
                    label,
                    temperature: *t,
                    precipitation: (i * 10) as u8,
                }
            })
            .collect()
    }

    #[test]
    fn equal_temperatures_sit_on_band_middle() {
        let chart = chart();
        let curve = chart.temperature_curve(&samples(&[54.0; 8]), ValueRange::new(54.0, 54.0));
        assert!(curve.iter().all(|p| p.y == chart.band().middle()));
    }

    #[test]
    fn equal_temperatures_render() {
        let chart = chart();
        let mut canvas = Canvas::new(Size::new(800, 480), Rgb888::BLACK);
        chart
            .draw(&samples(&[54.0; 8]), 54.0, 54.0, "°F", &mut canvas)
            .unwrap();

        let middle = chart.band().middle();
        assert_eq!(
            canvas.pixel(Point::new(300, middle)),
            Some(Rgb888::new(255, 140, 66))
        );
    }

    #[test]
    fn single_sample_draws_nothing() {
        let mut canvas = Canvas::new(Size::new(800, 480), Rgb888::BLACK);
        chart()
            .draw(&samples(&[54.0]), 54.0, 54.0, "°F", &mut canvas)
            .unwrap();

        let untouched = (0..800).all(|x| {
            (240..360).all(|y| canvas.pixel(Point::new(x, y)) == Some(Rgb888::BLACK))
        });
        assert!(untouched);
    }

    #[test]
    fn precipitation_is_drawn_over_temperature() {
        let chart = chart();
        // A flat temperature range and a steady 50% both sit on the band's
        // middle row, so the two strokes overlap along their whole length.
        let data: Vec<ChartSample> = (0..4)
            .map(|_| ChartSample {
                label: AxisLabel::new(),
                temperature: 54.0,
                precipitation: 50,
            })
            .collect();
        let mut canvas = Canvas::new(Size::new(800, 480), Rgb888::BLACK);
        chart.draw(&data, 54.0, 54.0, "°F", &mut canvas).unwrap();

        let middle = chart.band().middle();
        for x in [200, 380, 600] {
            assert_eq!(
                canvas.pixel(Point::new(x, middle)),
                Some(Rgb888::new(100, 150, 255)),
                "temperature stroke on top at x={x}"
            );
        }
    }

    #[test]
    fn segments_set_curve_density() {
        let chart = chart().with_segments(5);
        let data = samples(&[50.0, 52.0, 55.0, 53.0]);
        let curve = chart.temperature_curve(&data, ValueRange::new(50.0, 55.0));
        assert_eq!(curve.len(), 3 * 5 + 1);
    }

    #[test]
    fn curves_end_on_last_sample() {
        let chart = chart();
        let data = samples(&[50.0, 52.0, 55.0, 53.0]);
        let curve = chart.temperature_curve(&data, ValueRange::new(50.0, 55.0));
        // 53 sits 60% up an 80px band whose bottom is at 337
        assert_eq!(curve.last(), Some(&Point::new(chart.band().right(), 289)));
        assert_eq!(curve.len(), 3 * DEFAULT_SMOOTH_SEGMENTS + 1);
    }
}
