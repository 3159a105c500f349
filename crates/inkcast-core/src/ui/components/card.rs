//! Forecast card component

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
};
use image::RgbaImage;

use crate::framebuffer::BlendTarget;
use crate::model::whole_degrees;
use crate::ui::styling::{ColorPalette, Typography};
use crate::ui::text::{FontSpec, HAlign, draw_text_clipped};

/// Vertical placement of the card contents, relative to the card top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    pub day_offset: i32,
    pub icon_offset: i32,
    pub temperature_offset: i32,
    pub corner_radius: u32,
    pub border_width: u32,
}

/// Rounded card with a day name, a condition icon and a temperature range
pub struct ForecastCard<'a> {
    bounds: Rectangle,
    day: &'a str,
    icon: &'a RgbaImage,
    temperatures: &'a str,
    metrics: CardMetrics,
    palette: ColorPalette,
    day_font: FontSpec,
    temperature_font: FontSpec,
}

impl<'a> ForecastCard<'a> {
    pub fn new(
        bounds: Rectangle,
        day: &'a str,
        icon: &'a RgbaImage,
        temperatures: &'a str,
        metrics: CardMetrics,
    ) -> Self {
        let typography = Typography::default();
        Self {
            bounds,
            day,
            icon,
            temperatures,
            metrics,
            palette: ColorPalette::default(),
            day_font: typography.forecast_day,
            temperature_font: typography.forecast_temperature,
        }
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_fonts(mut self, day: FontSpec, temperature: FontSpec) -> Self {
        self.day_font = day;
        self.temperature_font = temperature;
        self
    }

    pub fn draw<D: BlendTarget>(&self, display: &mut D) -> Result<(), D::Error> {
        let style = PrimitiveStyleBuilder::new()
            .fill_color(self.palette.surface)
            .stroke_color(self.palette.border)
            .stroke_width(self.metrics.border_width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        let radius = Size::new(self.metrics.corner_radius, self.metrics.corner_radius);
        RoundedRectangle::with_equal_corners(self.bounds, radius)
            .into_styled(style)
            .draw(display)?;

        let top = self.bounds.top_left.y;
        let width = self.bounds.size.width;
        let center_x = self.bounds.top_left.x + (width / 2) as i32;
        let text_width = width.saturating_sub(2 * self.metrics.border_width);

        self.draw_line(
            self.day,
            center_x,
            top + self.metrics.day_offset,
            self.day_font,
            text_width,
            display,
        )?;

        let icon_x = self.bounds.top_left.x + (width as i32 - self.icon.width() as i32) / 2;
        display.composite(self.icon, Point::new(icon_x, top + self.metrics.icon_offset));

        self.draw_line(
            self.temperatures,
            center_x,
            top + self.metrics.temperature_offset,
            self.temperature_font,
            text_width,
            display,
        )
    }

    fn draw_line<D: BlendTarget>(
        &self,
        text: &str,
        center_x: i32,
        y: i32,
        font: FontSpec,
        max_width: u32,
        display: &mut D,
    ) -> Result<(), D::Error> {
        draw_text_clipped(
            text,
            Point::new(center_x, y),
            HAlign::Center,
            font,
            max_width,
            self.palette.text_primary,
            display,
        )
    }
}

/// Text shown on a card for a temperature range, e.g. "56 / 51°"
pub fn range_label(max: f32, min: f32) -> String {
    format!("{} / {}°", whole_degrees(max), whole_degrees(min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Canvas;

    const METRICS: CardMetrics = CardMetrics {
        day_offset: 6,
        icon_offset: 25,
        temperature_offset: 73,
        corner_radius: 8,
        border_width: 2,
    };

    #[test]
    fn card_draws_surface_and_border() {
        let palette = ColorPalette::dark();
        let mut canvas = Canvas::new(Size::new(200, 120), Rgb888::BLACK);
        let icon = RgbaImage::new(46, 46);
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(111, 90));

        ForecastCard::new(bounds, "Today", &icon, "56 / 51°", METRICS)
            .with_palette(palette)
            .draw(&mut canvas)
            .unwrap();

        // Straight edge midway along the top carries the border
        assert_eq!(canvas.pixel(Point::new(65, 10)), Some(palette.border));
        // Corners are rounded away
        assert_eq!(canvas.pixel(Point::new(10, 10)), Some(Rgb888::BLACK));
        // Inside, away from text and icon, is the surface
        assert_eq!(canvas.pixel(Point::new(14, 50)), Some(palette.surface));
    }

    #[test]
    fn range_label_rounds() {
        assert_eq!(range_label(55.6, 50.9), "56 / 51°");
        assert_eq!(range_label(0.2, -0.3), "0 / 0°");
    }
}
