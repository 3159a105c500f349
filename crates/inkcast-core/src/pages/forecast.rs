//! Forecast row: one card per day, evenly dividing the canvas width

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::framebuffer::BlendTarget;
use crate::icons::{IconSlot, resolve};
use crate::model::{DailyForecast, RenderModel};
use crate::render::RenderContext;
use crate::ui::components::card::range_label;
use crate::ui::components::{CardMetrics, ForecastCard};

use super::panel::Panel;

/// Label of the first card, whatever weekday it falls on
pub const TODAY_LABEL: &str = "Today";

/// Day label shown on card `index`
pub fn card_label(index: usize, day: &DailyForecast) -> &str {
    if index == 0 { TODAY_LABEL } else { &day.day_name }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForecastPanel;

impl Panel for ForecastPanel {
    fn name(&self) -> &'static str {
        "forecast"
    }

    fn draw<D: BlendTarget>(
        &self,
        ctx: &RenderContext,
        model: &RenderModel,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if model.daily.is_empty() {
            debug!("No forecast days, skipping card row");
            return Ok(());
        }

        let layout = &ctx.layout;
        let fonts = &ctx.theme.typography;
        let row = layout.card_row(model.daily.len());
        let metrics = CardMetrics {
            day_offset: layout.card_day_offset,
            icon_offset: layout.card_icon_offset,
            temperature_offset: layout.card_temperature_offset,
            corner_radius: layout.card_radius,
            border_width: layout.card_border,
        };

        for (i, day) in model.daily.iter().enumerate() {
            let bounds = Rectangle::new(
                Point::new(row.x(i), layout.forecast_y),
                Size::new(row.card_width, layout.card_height),
            );
            // A night glyph would misrepresent a whole day
            let icon = resolve(&day.condition, 0.0, true);
            let temperatures = range_label(day.temp_max, day.temp_min);

            ForecastCard::new(
                bounds,
                card_label(i, day),
                ctx.icons.weather(icon, IconSlot::Card),
                &temperatures,
                metrics,
            )
            .with_palette(ctx.theme.palette)
            .with_fonts(fonts.forecast_day, fonts.forecast_temperature)
            .draw(display)?;
        }

        debug!("Drew {} forecast cards, {}px wide", row.count, row.card_width);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(name: &str) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            day_name: name.into(),
            temp_min: 46.0,
            temp_max: 54.0,
            description: "Partly Cloudy".into(),
            condition: "02n".into(),
            humidity: 60,
            wind_speed: 5.99,
        }
    }

    #[test]
    fn first_card_reads_today() {
        assert_eq!(card_label(0, &day("Sat")), TODAY_LABEL);
        assert_eq!(card_label(1, &day("Sun")), "Sun");
    }
}
