//! No-data frame
//!
//! Displays a centered message when a cycle has no weather to show

use embedded_graphics::prelude::*;

use crate::framebuffer::BlendTarget;
use crate::render::RenderContext;
use crate::ui::text::{HAlign, draw_text_clipped};

/// Full-frame message shown instead of the panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoDataPage {
    message: &'static str,
    help: &'static str,
}

impl NoDataPage {
    pub fn new() -> Self {
        Self {
            message: "Weather Data Unavailable",
            help: "Retrying at the next update",
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn draw<D: BlendTarget>(&self, ctx: &RenderContext, display: &mut D) -> Result<(), D::Error> {
        let size = ctx.layout.size;
        let fonts = &ctx.theme.typography;
        let palette = &ctx.theme.palette;
        let center = Point::new((size.width / 2) as i32, (size.height / 2) as i32);

        // Headline one line-height above center
        draw_text_clipped(
            self.message,
            center - Point::new(0, fonts.headline.line_height() as i32),
            HAlign::Center,
            fonts.headline,
            size.width,
            palette.error,
            display,
        )?;

        // Help text one line-height below center
        draw_text_clipped(
            self.help,
            center + Point::new(0, fonts.body.line_height() as i32),
            HAlign::Center,
            fonts.body,
            size.width,
            palette.text_primary,
            display,
        )
    }
}

impl Default for NoDataPage {
    fn default() -> Self {
        Self::new()
    }
}
