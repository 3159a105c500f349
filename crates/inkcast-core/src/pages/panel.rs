//! Panel abstraction and the enum wrapper the dashboard stores panels in.
//!
//! Every rectangular region of the frame (header, current conditions,
//! details, chart, forecast row) implements [`Panel`]. Panels are stateless:
//! all inputs arrive through the [`RenderContext`] and the per-cycle
//! [`RenderModel`], so drawing the same model twice yields the same pixels.
//!
//! [`PanelWrapper`] lets the [`Dashboard`](super::Dashboard) keep an ordered
//! list of heterogeneous panels without trait objects, which the generic
//! `draw` method would not allow anyway.

use crate::framebuffer::BlendTarget;
use crate::model::RenderModel;
use crate::render::RenderContext;

use super::chart::ChartPanel;
use super::current::CurrentPanel;
use super::details::DetailsPanel;
use super::forecast::ForecastPanel;
use super::header::HeaderPanel;

// ---------------------------------------------------------------------------
// Panel trait
// ---------------------------------------------------------------------------

/// One logical region of the dashboard
pub trait Panel {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Draw this panel's contents for `model`
    fn draw<D: BlendTarget>(
        &self,
        ctx: &RenderContext,
        model: &RenderModel,
        display: &mut D,
    ) -> Result<(), D::Error>;
}

// ---------------------------------------------------------------------------
// PanelWrapper
// ---------------------------------------------------------------------------

/// Enum-based wrapper over the concrete panel types.
///
/// When adding a panel, add a variant here and the delegation below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelWrapper {
    Header(HeaderPanel),
    Current(CurrentPanel),
    Details(DetailsPanel),
    Chart(ChartPanel),
    Forecast(ForecastPanel),
}

impl Panel for PanelWrapper {
    fn name(&self) -> &'static str {
        match self {
            PanelWrapper::Header(panel) => panel.name(),
            PanelWrapper::Current(panel) => panel.name(),
            PanelWrapper::Details(panel) => panel.name(),
            PanelWrapper::Chart(panel) => panel.name(),
            PanelWrapper::Forecast(panel) => panel.name(),
        }
    }

    fn draw<D: BlendTarget>(
        &self,
        ctx: &RenderContext,
        model: &RenderModel,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            PanelWrapper::Header(panel) => panel.draw(ctx, model, display),
            PanelWrapper::Current(panel) => panel.draw(ctx, model, display),
            PanelWrapper::Details(panel) => panel.draw(ctx, model, display),
            PanelWrapper::Chart(panel) => panel.draw(ctx, model, display),
            PanelWrapper::Forecast(panel) => panel.draw(ctx, model, display),
        }
    }
}
