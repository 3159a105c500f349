//! Hourly temperature and precipitation chart

use log::debug;

use crate::framebuffer::BlendTarget;
use crate::model::RenderModel;
use crate::render::RenderContext;
use crate::ui::components::graph::constants::{
    PRECIPITATION_LINE_WIDTH_PX, TEMPERATURE_LINE_WIDTH_PX,
};
use crate::ui::components::graph::{AxisStyle, Chart, SeriesStyle};

use super::panel::Panel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartPanel;

impl ChartPanel {
    /// Chart component styled for `ctx`
    pub fn chart(ctx: &RenderContext) -> Chart {
        let layout = &ctx.layout;
        let palette = &ctx.theme.palette;

        Chart::new(
            layout.chart,
            SeriesStyle::line(palette.temperature, TEMPERATURE_LINE_WIDTH_PX).with_fill(),
            SeriesStyle::line(palette.precipitation, PRECIPITATION_LINE_WIDTH_PX).with_fill(),
            AxisStyle {
                font: ctx.theme.typography.axis,
                color: palette.text_secondary,
                left_x: layout.chart_label_x,
                right_gap: layout.chart_label_gap,
                time_gap: layout.time_label_gap,
            },
        )
    }
}

impl Panel for ChartPanel {
    fn name(&self) -> &'static str {
        "chart"
    }

    fn draw<D: BlendTarget>(
        &self,
        ctx: &RenderContext,
        model: &RenderModel,
        display: &mut D,
    ) -> Result<(), D::Error> {
        debug!("Chart over {} hourly points", model.hourly.len());
        Self::chart(ctx).draw(
            &model.hourly,
            model.temp_min,
            model.temp_max,
            ctx.units.temperature_unit(),
            display,
        )
    }
}
