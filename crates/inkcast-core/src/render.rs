//! Render context and the fetch → render → deliver cycle

use chrono::NaiveDateTime;
use embedded_graphics::prelude::*;
use log::{error, info, warn};

use crate::config::{DashboardConfig, OutputConfig, PanelConfig};
use crate::error::DashboardResult;
use crate::icons::IconSet;
use crate::model::{RenderModel, UnitSystem};
use crate::pages::Dashboard;
use crate::sink::{DisplaySink, save_png};
use crate::source::WeatherSource;
use crate::ui::styling::{Layout, Theme};

/// Everything that stays fixed between render cycles.
///
/// Built once at start-up and only rebuilt when the icon directory changes.
pub struct RenderContext {
    pub theme: Theme,
    pub layout: Layout,
    pub units: UnitSystem,
    pub panels: PanelConfig,
    pub icons: IconSet,
    /// Apply the final contrast/saturation pass on export
    pub enhance_frame: bool,
}

impl RenderContext {
    /// Build the context, loading and enhancing icons from `assets.icon_dir`
    pub fn new(config: &DashboardConfig) -> Self {
        let theme = Theme::dark();
        let layout = layout_for(config);
        let icons = IconSet::load(
            &config.assets.icon_dir,
            layout.icon_sizes(),
            theme.palette.sun,
        );

        if !icons.missing().is_empty() {
            warn!(
                "{} icon(s) missing from {}: {}",
                icons.missing().len(),
                config.assets.icon_dir.display(),
                icons.missing().join(", ")
            );
        }

        Self::assemble(config, theme, layout, icons)
    }

    /// Build the context around an already prepared icon set
    pub fn with_icons(config: &DashboardConfig, icons: IconSet) -> Self {
        Self::assemble(config, Theme::dark(), layout_for(config), icons)
    }

    fn assemble(config: &DashboardConfig, theme: Theme, layout: Layout, icons: IconSet) -> Self {
        Self {
            theme,
            layout,
            units: config.units,
            panels: config.panels,
            icons,
            enhance_frame: config.display.enhance,
        }
    }

    /// Number of forecast cards the row holds
    pub fn forecast_capacity(&self) -> usize {
        self.panels.forecast_capacity()
    }
}

fn layout_for(config: &DashboardConfig) -> Layout {
    Layout::for_size(Size::new(config.display.width, config.display.height))
}

/// Outcome of one render cycle
#[derive(Debug, Clone, PartialEq)]
pub enum CycleReport {
    /// Weather data was drawn
    Rendered {
        location: String,
        temperature: f32,
    },
    /// The no-data frame was drawn instead
    Placeholder { reason: String },
}

/// Run one cycle: fetch, build the view model, render and deliver.
///
/// Source failures never escape; they turn into the no-data frame. Only a
/// failing sink is reported as an error, leaving the last good image on the
/// display. A failed debug copy is logged and ignored.
pub fn run_cycle<S, K>(
    source: &mut S,
    dashboard: &Dashboard,
    sink: &mut K,
    output: &OutputConfig,
    now: NaiveDateTime,
) -> DashboardResult<CycleReport>
where
    S: WeatherSource + ?Sized,
    K: DisplaySink + ?Sized,
{
    info!("Starting weather update from {}", source.name());

    let (model, report) = match source.fetch(now) {
        Ok(snapshot) => {
            let model = RenderModel::build(&snapshot, dashboard.context().forecast_capacity());
            let report = CycleReport::Rendered {
                location: model.location.clone(),
                temperature: model.current.temperature,
            };
            (Some(model), report)
        }
        Err(e) => {
            error!("Failed to fetch weather data: {e}");
            (
                None,
                CycleReport::Placeholder {
                    reason: e.to_string(),
                },
            )
        }
    };

    let frame = dashboard.frame(model.as_ref());

    if let Some(path) = &output.debug_path {
        match save_png(&frame, path) {
            Ok(()) => info!("Debug copy saved as {}", path.display()),
            Err(e) => warn!("Could not save debug copy: {e}"),
        }
    }

    sink.show(&frame)?;

    match &report {
        CycleReport::Rendered {
            location,
            temperature,
        } => info!(
            "Weather update successful: {location}, {temperature:.0}{}",
            dashboard.context().units.temperature_unit()
        ),
        CycleReport::Placeholder { .. } => info!("No-data frame delivered"),
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SinkError, SourceError};
    use crate::model::WeatherSnapshot;
    use crate::source::SampleSource;
    use chrono::NaiveDate;
    use image::RgbImage;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(15, 5, 0)
            .unwrap()
    }

    fn dashboard() -> Dashboard {
        let config = DashboardConfig::default();
        let layout = layout_for(&config);
        Dashboard::new(RenderContext::with_icons(
            &config,
            IconSet::placeholders(layout.icon_sizes()),
        ))
    }

    struct FailingSource;

    impl WeatherSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&mut self, _now: NaiveDateTime) -> Result<WeatherSnapshot, SourceError> {
            Err(SourceError::Unavailable("offline".into()))
        }
    }

    #[derive(Default)]
    struct MemorySink {
        frames: Vec<RgbImage>,
    }

    impl DisplaySink for MemorySink {
        fn show(&mut self, frame: &RgbImage) -> Result<(), SinkError> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    #[test]
    fn sample_cycle_renders_and_delivers() {
        let mut sink = MemorySink::default();
        let report = run_cycle(
            &mut SampleSource::new(),
            &dashboard(),
            &mut sink,
            &OutputConfig::default(),
            now(),
        )
        .unwrap();

        assert_eq!(
            report,
            CycleReport::Rendered {
                location: "Philadelphia, US".into(),
                temperature: 54.0,
            }
        );
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].dimensions(), (800, 480));
    }

    #[test]
    fn failing_source_delivers_placeholder() {
        let mut sink = MemorySink::default();
        let report = run_cycle(
            &mut FailingSource,
            &dashboard(),
            &mut sink,
            &OutputConfig::default(),
            now(),
        )
        .unwrap();

        assert!(matches!(report, CycleReport::Placeholder { ref reason } if reason.contains("offline")));
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn debug_copy_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            frame_path: dir.path().join("frame.png"),
            debug_path: Some(dir.path().join("debug").join("frame.png")),
        };

        run_cycle(
            &mut SampleSource::new(),
            &dashboard(),
            &mut MemorySink::default(),
            &output,
            now(),
        )
        .unwrap();

        assert!(dir.path().join("debug").join("frame.png").exists());
    }

    #[test]
    fn context_follows_config() {
        let mut config = DashboardConfig::default();
        config.display.width = 400;
        config.display.height = 240;
        config.panels.forecast_days = 9;
        config.display.enhance = false;

        let layout = layout_for(&config);
        let ctx = RenderContext::with_icons(&config, IconSet::placeholders(layout.icon_sizes()));

        assert_eq!(ctx.layout.size, Size::new(400, 240));
        assert_eq!(ctx.forecast_capacity(), 7);
        assert!(!ctx.enhance_frame);
    }
}
