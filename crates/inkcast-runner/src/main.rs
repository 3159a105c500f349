//! Render loop for the inkcast e-paper weather dashboard.
//!
//! Loads configuration, builds the render context once, then runs one
//! fetch → render → deliver cycle immediately and again on every scheduled
//! tick. Frames are written to a PNG file that the display driver picks up.
//!
//! ```text
//! inkcast --config inkcast.toml        # run forever
//! inkcast --once                       # single cycle, then exit
//! RUST_LOG=debug inkcast --once        # per-panel logging
//! ```

mod schedule;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{Duration, Local, NaiveDateTime};
use clap::Parser;
use log::{error, info};

use inkcast_core::config::{DashboardConfig, OutputConfig, SourceKind};
use inkcast_core::{
    CycleReport, Dashboard, DisplaySink, PngFileSink, RenderContext, SampleSource,
    SnapshotFileSource, WeatherSource, run_cycle,
};

use crate::schedule::next_due;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "inkcast", version, about = "E-paper weather dashboard renderer")]
struct Cli {
    /// Path of the TOML configuration file
    #[arg(short, long, default_value = "inkcast.toml")]
    config: PathBuf,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn load_config(path: &Path) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::load(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

fn build_source(config: &DashboardConfig) -> Result<Box<dyn WeatherSource>> {
    match config.source.kind {
        SourceKind::Sample => Ok(Box::new(SampleSource::new())),
        SourceKind::File => {
            let path = config
                .source
                .path
                .clone()
                .ok_or_else(|| anyhow!("source.kind = \"file\" needs source.path"))?;
            let source = SnapshotFileSource::new(path);
            info!("Reading weather snapshots from {}", source.path().display());
            Ok(Box::new(source))
        }
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

/// Run one cycle, containing every failure. Returns whether a frame reached
/// the sink.
fn run_guarded(
    source: &mut dyn WeatherSource,
    dashboard: &Dashboard,
    sink: &mut dyn DisplaySink,
    output: &OutputConfig,
) -> bool {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        run_cycle(source, dashboard, sink, output, local_now())
    }));

    match outcome {
        Ok(Ok(CycleReport::Rendered { .. })) => true,
        Ok(Ok(CycleReport::Placeholder { reason })) => {
            info!("Showing no-data frame: {reason}");
            true
        }
        Ok(Err(e)) => {
            error!("Render cycle failed, keeping previous image: {e}");
            false
        }
        Err(_) => {
            error!("Render cycle panicked, keeping previous image");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // A missing .env is fine; the config file and defaults still apply
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let daily_at = config.schedule.daily_refresh_time()?;
    let interval = Duration::minutes(i64::from(config.schedule.update_interval_minutes));

    info!(
        "Weather dashboard for {}, {} ({}x{}, {})",
        config.location.city,
        config.location.country,
        config.display.width,
        config.display.height,
        config.units
    );

    let dashboard = Dashboard::new(RenderContext::new(&config));
    let mut source = build_source(&config)?;
    let mut sink = PngFileSink::new(&config.output.frame_path);
    info!("Frames are written to {}", sink.path().display());

    if cli.once {
        info!("Running single weather update");
        return if run_guarded(source.as_mut(), &dashboard, &mut sink, &config.output) {
            Ok(())
        } else {
            Err(anyhow!("single update did not deliver a frame"))
        };
    }

    info!(
        "Updates every {} minutes, daily refresh at {}",
        config.schedule.update_interval_minutes,
        daily_at.format("%H:%M")
    );

    loop {
        let started = local_now();
        run_guarded(source.as_mut(), &dashboard, &mut sink, &config.output);

        let now = local_now();
        let due = next_due(now, started, interval, daily_at);
        info!("Next update at {}", due.format("%Y-%m-%d %H:%M"));
        std::thread::sleep((due - now).to_std().unwrap_or_default());
    }
}
