//! End-to-end rendering with the synthetic weather sample

use chrono::{Duration, NaiveDate, NaiveDateTime};
use embedded_graphics::prelude::*;

use inkcast_core::config::DashboardConfig;
use inkcast_core::icons::IconSet;
use inkcast_core::pages::{TODAY_LABEL, card_label};
use inkcast_core::ui::styling::Layout;
use inkcast_core::{
    Dashboard, DisplaySink, PngFileSink, RenderContext, RenderModel, SampleSource, WeatherSource,
};

fn friday_afternoon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(15, 5, 0)
        .unwrap()
}

fn dashboard(config: &DashboardConfig) -> Dashboard {
    let layout = Layout::for_size(Size::new(config.display.width, config.display.height));
    Dashboard::new(RenderContext::with_icons(
        config,
        IconSet::placeholders(layout.icon_sizes()),
    ))
}

#[test]
fn sample_frame_has_configured_dimensions() {
    for (width, height) in [(800, 480), (640, 384), (1200, 825)] {
        let mut config = DashboardConfig::default();
        config.display.width = width;
        config.display.height = height;

        let snapshot = SampleSource::new().fetch(friday_afternoon()).unwrap();
        let model = RenderModel::build(&snapshot, config.panels.forecast_capacity());
        let frame = dashboard(&config).frame(Some(&model));

        assert_eq!(frame.dimensions(), (width, height));
    }
}

#[test]
fn first_card_reads_today_on_any_weekday() {
    for offset in 0..7 {
        let now = friday_afternoon() + Duration::days(offset);
        let model = RenderModel::build(&SampleSource::snapshot(now), 6);

        assert_eq!(model.daily.len(), 6);
        assert_eq!(card_label(0, &model.daily[0]), TODAY_LABEL);
        assert_ne!(card_label(1, &model.daily[1]), TODAY_LABEL);
    }
}

#[test]
fn sample_chart_uses_eight_points() {
    let model = RenderModel::build(&SampleSource::snapshot(friday_afternoon()), 6);

    assert_eq!(model.hourly.len(), 8);
    assert_eq!(model.hourly[0].precipitation, 0);
    assert_eq!(model.hourly[1].precipitation, 5);
    assert!(model.temp_min < model.temp_max);
}

#[test]
fn no_data_frame_renders() {
    let config = DashboardConfig::default();
    let frame = dashboard(&config).frame(None);
    assert_eq!(frame.dimensions(), (800, 480));
}

#[test]
fn no_data_frame_differs_from_weather_frame() {
    let config = DashboardConfig::default();
    let dashboard = dashboard(&config);
    let model = RenderModel::build(&SampleSource::snapshot(friday_afternoon()), 6);

    assert_ne!(dashboard.frame(None), dashboard.frame(Some(&model)));
}

#[test]
fn rendering_is_repeatable() {
    let config = DashboardConfig::default();
    let dashboard = dashboard(&config);
    let model = RenderModel::build(&SampleSource::snapshot(friday_afternoon()), 6);

    let first = dashboard.frame(Some(&model));
    let _ = dashboard.frame(None);
    let second = dashboard.frame(Some(&model));
    assert_eq!(first, second);
}

#[test]
fn card_row_fits_canvas() {
    for width in [800, 640, 1200] {
        let layout = Layout::for_size(Size::new(width, 480));
        for count in [1, 6, 7] {
            let row = layout.card_row(count);
            let used = row.span();

            assert!(
                row.left as u32 + used <= width,
                "{count} cards overflow a {width}px canvas"
            );
            assert!(used + layout.card_row_margins <= width);
        }
    }
}

#[test]
fn png_sink_writes_rendered_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather_display.png");
    let config = DashboardConfig::default();
    let model = RenderModel::build(&SampleSource::snapshot(friday_afternoon()), 6);

    PngFileSink::new(&path)
        .show(&dashboard(&config).frame(Some(&model)))
        .unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (800, 480));
}
