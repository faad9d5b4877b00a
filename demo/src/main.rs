//! Renders the measure overlay over a sample screen and saves it as a PNG.

mod scene;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::{
    config::HookBuilder,
    eyre::{Result, eyre},
};
use tracing::{info, warn};
use waterui_measure::{
    MeasureConfig, MeasureExt, Measurement, MonospaceEstimate, Point, Surface,
    config::CONFIG_ENV, logging,
};
use waterui_measure_tiny_skia::TinySkiaSurface;

use crate::scene::{HEIGHT, Scene, WIDTH};

#[derive(Parser)]
#[command(name = "measure-demo")]
#[command(about = "Render the WaterUI measure overlay over a sample screen", long_about = None)]
#[command(version)]
struct Cli {
    /// Where to write the rendered PNG
    #[arg(short, long, default_value = "measure-overlay.png")]
    output: PathBuf,

    /// Tap at `x,y`; repeat for several taps. Defaults to a scripted tour
    #[arg(short, long = "tap", value_parser = parse_point)]
    taps: Vec<Point>,

    /// Configuration file; falls back to the path in the config env var
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let x = x.trim().parse().map_err(|err| format!("invalid x: {err}"))?;
    let y = y.trim().parse().map_err(|err| format!("invalid y: {err}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    HookBuilder::default()
        .display_env_section(false)
        .issue_url("https://github.com/water-rs/waterui/issues/new")
        .install()?;

    let config = match &cli.config {
        Some(path) => MeasureConfig::from_path(path)?,
        None => MeasureConfig::from_env()?,
    };

    let directives = match cli.verbose {
        0 => config.log_filter.as_deref(),
        1 => Some("debug"),
        _ => Some("trace"),
    };
    logging::init_tracing(directives);
    if cli.config.is_none() && std::env::var_os(CONFIG_ENV).is_none() {
        info!("using the default overlay style; set {CONFIG_ENV} to override it");
    }

    let scene = Scene::layout();
    let enabled = nami::binding(false);
    let overlay = "screen".measure_overlay(&enabled).with_style(config.style);
    overlay.layout(scene.report());
    enabled.set(true);
    if !overlay.is_enabled() {
        warn!("overlay is inactive in release builds; enable the `always-on` feature");
    }

    let taps = if cli.taps.is_empty() {
        scene.script()
    } else {
        cli.taps
    };
    for point in taps {
        match overlay.tap(point) {
            Some(id) => info!(%id, x = point.x, y = point.y, "tapped"),
            None => info!(x = point.x, y = point.y, "tap missed"),
        }
        if let Some(measurement) = overlay.measurement() {
            log_measurement(&measurement);
        }
    }

    let mut surface =
        TinySkiaSurface::new(WIDTH, HEIGHT).ok_or_else(|| eyre!("empty surface size"))?;
    surface.set_clear_color(Scene::background());
    surface.clear();
    for block in &scene.blocks {
        surface.fill_rect(&block.frame, block.color);
    }
    let commands = overlay.draw(&MonospaceEstimate::default());
    waterui_measure::replay(&commands, &mut surface);

    surface.pixmap().save_png(&cli.output)?;
    info!(path = %cli.output.display(), commands = commands.len(), "overlay written");
    Ok(())
}

fn log_measurement(measurement: &Measurement) {
    match measurement {
        Measurement::Sibling(gap) => info!(
            horizontal = ?gap.horizontal.map(|gap| gap.distance),
            vertical = ?gap.vertical.map(|gap| gap.distance),
            "sibling gap"
        ),
        Measurement::Containment(insets) => info!(
            top = insets.top.distance,
            bottom = insets.bottom.distance,
            left = insets.left.distance,
            right = insets.right.distance,
            "containment insets"
        ),
    }
}
