//! Frame composer
//!
//! [`Dashboard`] owns the [`RenderContext`] and the ordered list of enabled
//! panels. Each call to [`Dashboard::render`] starts from a fresh canvas, so a
//! failed or partial cycle never leaks into the next one.

use embedded_graphics::prelude::*;
use image::RgbImage;
use log::debug;

use crate::framebuffer::{BlendTarget, Canvas};
use crate::model::RenderModel;
use crate::render::RenderContext;

use super::chart::ChartPanel;
use super::current::CurrentPanel;
use super::details::DetailsPanel;
use super::forecast::ForecastPanel;
use super::header::HeaderPanel;
use super::no_data::NoDataPage;
use super::panel::{Panel, PanelWrapper};

pub struct Dashboard {
    ctx: RenderContext,
    panels: Vec<PanelWrapper>,
}

impl Dashboard {
    /// Compose the panels enabled in `ctx.panels`, header first
    pub fn new(ctx: RenderContext) -> Self {
        let switches = ctx.panels;
        let mut panels = vec![PanelWrapper::Header(HeaderPanel)];

        if switches.current {
            panels.push(PanelWrapper::Current(CurrentPanel));
        }
        if switches.details {
            panels.push(PanelWrapper::Details(DetailsPanel));
        }
        if switches.chart {
            panels.push(PanelWrapper::Chart(ChartPanel));
        }
        if switches.forecast {
            panels.push(PanelWrapper::Forecast(ForecastPanel));
        }

        Self { ctx, panels }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Names of the panels drawn for a full frame, in drawing order
    pub fn panel_names(&self) -> Vec<&'static str> {
        self.panels.iter().map(Panel::name).collect()
    }

    /// Draw a frame onto `display`: every enabled panel for `Some`, the
    /// no-data message for `None`.
    pub fn draw<D: BlendTarget>(
        &self,
        model: Option<&RenderModel>,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let Some(model) = model else {
            let page = NoDataPage::new();
            debug!("Drawing no-data frame: {}", page.message());
            return page.draw(&self.ctx, display);
        };

        for panel in &self.panels {
            debug!("Drawing {} panel", panel.name());
            panel.draw(&self.ctx, model, display)?;
        }
        Ok(())
    }

    /// Render onto a fresh gradient canvas
    pub fn render(&self, model: Option<&RenderModel>) -> Canvas {
        let palette = &self.ctx.theme.palette;
        let mut canvas = Canvas::with_vertical_gradient(
            self.ctx.layout.size,
            palette.background_top,
            palette.background_bottom,
        );

        let Ok(()) = self.draw(model, &mut canvas);
        canvas
    }

    /// Render and export the frame handed to sinks
    pub fn frame(&self, model: Option<&RenderModel>) -> RgbImage {
        self.render(model).to_rgb_image(self.ctx.enhance_frame)
    }

    /// Canvas dimensions
    pub fn size(&self) -> Size {
        self.ctx.layout.size
    }
}
