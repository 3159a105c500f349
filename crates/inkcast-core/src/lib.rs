//! Hardware-independent core library for inkcast
//!
//! This crate contains all display-agnostic logic of the inkcast e-paper
//! weather dashboard: the weather data model, the per-cycle render model,
//! icon resolution and enhancement, the panels and chart drawn through
//! `embedded-graphics`, the in-memory canvas, configuration, and the
//! source/sink seams the render cycle talks to.
//!
//! A cycle is fetch → [`RenderModel::build`] → [`Dashboard::render`] →
//! [`DisplaySink::show`], driven by [`render::run_cycle`].

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod icons;
pub mod model;
pub mod pages;
pub mod render;
pub mod sink;
pub mod source;
pub mod ui;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use framebuffer::{BlendTarget, Canvas};
pub use model::{RenderModel, WeatherSnapshot};
pub use pages::Dashboard;
pub use render::{CycleReport, RenderContext, run_cycle};
pub use sink::{DisplaySink, PngFileSink};
pub use source::{SampleSource, SnapshotFileSource, WeatherSource};
