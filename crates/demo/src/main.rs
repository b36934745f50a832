// File: crates/demo/src/main.rs
// Summary: Builds the two-week mood dataset, renders the line chart and presents it as a 600x600 PNG.

use anyhow::{Context, Result};
use mood_chart::{ChartOptions, ColorScale, Dataset, Gregorian, HostFrame, LineChart};
use mood_chart_render_skia::{PngPresenter, SkiaRasterizer};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_OUT: &str = "target/out/mood_chart.png";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mood_chart=info,mood_chart_render_skia=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Optional output path, defaults under target/
    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));

    let dataset = Dataset::sample(&Gregorian).context("building sample mood dataset")?;
    let options = ChartOptions { color_scale: ColorScale::mood(), ..ChartOptions::default() };
    options
        .color_scale
        .validate(&dataset)
        .context("color scale does not cover the dataset")?;

    let chart = LineChart::new(options);
    let view = chart.render(&dataset).context("rendering mood chart")?;
    info!(commands = view.commands.len(), "chart ready");

    let mut presenter = PngPresenter::new(&out, SkiaRasterizer::default());
    HostFrame::default()
        .present_in(&mut presenter, &view)
        .with_context(|| format!("presenting to {}", out.display()))?;

    println!("Wrote {}", out.display());
    Ok(())
}
