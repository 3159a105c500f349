//! Current conditions: hero icon, large temperature, description, feels-like

use embedded_graphics::prelude::*;

use crate::framebuffer::BlendTarget;
use crate::icons::{IconSlot, resolve};
use crate::model::{RenderModel, whole_degrees};
use crate::render::RenderContext;
use crate::ui::text::{HAlign, draw_text, draw_text_clipped};

use super::panel::Panel;

/// Space kept free between the text block and the details grid
const DETAILS_CLEARANCE_PX: i32 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentPanel;

impl Panel for CurrentPanel {
    fn name(&self) -> &'static str {
        "current"
    }

    fn draw<D: BlendTarget>(
        &self,
        ctx: &RenderContext,
        model: &RenderModel,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let layout = &ctx.layout;
        let fonts = &ctx.theme.typography;
        let palette = &ctx.theme.palette;
        let current = &model.current;

        let icon = resolve(
            &current.condition,
            ctx.units.wind_mph(current.wind_speed),
            false,
        );
        display.composite(ctx.icons.weather(icon, IconSlot::Hero), layout.hero_icon);

        let origin = layout.temperature;
        let numeral = whole_degrees(current.temperature).to_string();
        draw_text(
            &numeral,
            origin,
            HAlign::Left,
            fonts.temperature,
            palette.text_primary,
            display,
        )?;

        // The unit glyph uses its own, smaller font and hangs off the numeral
        let unit_x = origin.x + fonts.temperature.text_width(&numeral) as i32 + layout.unit_gap;
        draw_text(
            ctx.units.temperature_unit(),
            Point::new(unit_x, origin.y),
            HAlign::Left,
            fonts.temperature_unit,
            palette.text_primary,
            display,
        )?;

        let text_width = (layout.detail_columns[0] - DETAILS_CLEARANCE_PX - origin.x).max(0) as u32;
        draw_text_clipped(
            &current.description,
            origin + Point::new(0, layout.description_offset),
            HAlign::Left,
            fonts.description,
            text_width,
            palette.text_secondary,
            display,
        )?;

        let feels_like = format!("Feels Like {}°", whole_degrees(current.feels_like));
        draw_text_clipped(
            &feels_like,
            origin + Point::new(0, layout.feels_like_offset),
            HAlign::Left,
            fonts.feels_like,
            text_width,
            palette.text_secondary,
            display,
        )
    }
}
