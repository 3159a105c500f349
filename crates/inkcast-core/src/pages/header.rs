//! Header: centered location and date, last-updated stamp on the right

use embedded_graphics::prelude::*;

use crate::framebuffer::BlendTarget;
use crate::model::RenderModel;
use crate::render::RenderContext;
use crate::ui::text::{HAlign, draw_text, draw_text_clipped};

use super::panel::Panel;

/// Space kept free between the location and the stamp
const STAMP_CLEARANCE_PX: i32 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderPanel;

impl Panel for HeaderPanel {
    fn name(&self) -> &'static str {
        "header"
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
        let center_x = (layout.size.width / 2) as i32;

        let stamp_right = layout.size.width as i32 - layout.updated_right_margin;
        let stamp_left = stamp_right - fonts.date.text_width(&model.last_updated) as i32;
        draw_text(
            &model.last_updated,
            Point::new(stamp_right, layout.updated_y),
            HAlign::Right,
            fonts.date,
            palette.text_secondary,
            display,
        )?;

        // Centered text may extend equally to both sides, so the stamp
        // bounds the whole width.
        let location_width = 2 * (stamp_left - STAMP_CLEARANCE_PX - center_x).max(0);
        draw_text_clipped(
            &model.location,
            Point::new(center_x, layout.location_y),
            HAlign::Center,
            fonts.location,
            location_width as u32,
            palette.text_primary,
            display,
        )?;

        draw_text_clipped(
            &model.date,
            Point::new(center_x, layout.date_y),
            HAlign::Center,
            fonts.date,
            layout.size.width,
            palette.text_secondary,
            display,
        )
    }
}
