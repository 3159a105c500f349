//! Dashboard panels and the frame composer

mod chart;
mod current;
mod dashboard;
mod details;
mod forecast;
mod header;
mod no_data;
mod panel;

pub use chart::ChartPanel;
pub use current::CurrentPanel;
pub use dashboard::Dashboard;
pub use details::{DETAIL_ROWS, DetailRow, DetailsPanel, detail_rows};
pub use forecast::{ForecastPanel, TODAY_LABEL, card_label};
pub use header::HeaderPanel;
pub use no_data::NoDataPage;
pub use panel::{Panel, PanelWrapper};
