//! Axis label formatting and rendering
//!
//! The chart has no axis lines. Scale is conveyed by four corner labels
//! (max/min temperature on the left, 100%/0% on the right) and one time
//! label centered under every sample.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::model::whole_degrees;
use crate::ui::text::{FontSpec, HAlign, draw_text};

use super::constants::{CORNER_LABEL_DROP_PX, CORNER_LABEL_RISE_PX, MAX_AXIS_LABEL_LENGTH};
use super::viewport::ChartBand;

/// Fixed-capacity label text
pub type AxisLabel = String<MAX_AXIS_LABEL_LENGTH>;

/// Label appearance and placement
#[derive(Clone, Copy)]
pub struct AxisStyle {
    pub font: FontSpec,
    pub color: Rgb888,
    /// Left edge of the temperature labels
    pub left_x: i32,
    /// Gap between the band's right edge and the probability labels
    pub right_gap: i32,
    /// Gap between the band bottom and the time labels
    pub time_gap: i32,
}

/// Format a temperature label such as "56°F"
pub fn temperature_label(value: f32, unit: &str) -> AxisLabel {
    let mut s = AxisLabel::new();
    let _ = core::fmt::write(&mut s, format_args!("{}{}", whole_degrees(value), unit));
    s
}

/// Format a probability label such as "100%"
pub fn percent_label(value: u8) -> AxisLabel {
    let mut s = AxisLabel::new();
    let _ = core::fmt::write(&mut s, format_args!("{}%", value));
    s
}

/// Draw max/min temperature on the left and 100%/0% on the right
pub(super) fn draw_corner_labels<D: DrawTarget<Color = Rgb888>>(
    band: &ChartBand,
    temp_min: f32,
    temp_max: f32,
    unit: &str,
    style: &AxisStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    let top_y = band.top() - CORNER_LABEL_RISE_PX;
    let bottom_y = band.bottom() - CORNER_LABEL_DROP_PX;
    let right_x = band.right() + style.right_gap;

    let labels = [
        (temperature_label(temp_max, unit), Point::new(style.left_x, top_y)),
        (temperature_label(temp_min, unit), Point::new(style.left_x, bottom_y)),
        (percent_label(100), Point::new(right_x, top_y)),
        (percent_label(0), Point::new(right_x, bottom_y)),
    ];

    for (text, position) in labels.iter() {
        draw_text(text, *position, HAlign::Left, style.font, style.color, display)?;
    }

    Ok(())
}

/// Draw each label centered under its sample x position
pub(super) fn draw_time_labels<'a, D: DrawTarget<Color = Rgb888>>(
    band: &ChartBand,
    labels: impl ExactSizeIterator<Item = &'a str>,
    style: &AxisStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    let count = labels.len();
    let y = band.bottom() + style.time_gap;

    for (i, label) in labels.enumerate() {
        let x = band.sample_x(i, count);
        draw_text(label, Point::new(x, y), HAlign::Center, style.font, style.color, display)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_labels_round_to_whole_degrees() {
        assert_eq!(temperature_label(55.6, "°F").as_str(), "56°F");
        assert_eq!(temperature_label(-3.2, "°C").as_str(), "-3°C");
        assert_eq!(temperature_label(-0.4, "°C").as_str(), "0°C");
    }

    #[test]
    fn percent_labels() {
        assert_eq!(percent_label(100).as_str(), "100%");
        assert_eq!(percent_label(0).as_str(), "0%");
    }
}
