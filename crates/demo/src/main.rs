// File: crates/demo/src/main.rs
// Summary: Demo replays an OHLCV CSV through the colorful moving average, logs crossovers and writes a PNG.

mod cli;
mod load;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cma_chart::{theme, Chart, RenderOptions};
use cma_core::{BarOutcome, BarUpdate, ColorfulMa, Crossover, Indicator, IndicatorConfig};
use tracing::info;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_json);

    let base = match &cli.config {
        Some(path) => IndicatorConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => IndicatorConfig::default(),
    };
    let cfg = cli.apply(base);
    let theme = theme::find(&cli.theme).with_context(|| {
        let names: Vec<_> = theme::presets().iter().map(|t| t.name).collect();
        format!("unknown theme '{}'; expected one of {names:?}", cli.theme)
    })?;
    let mut indicator = ColorfulMa::initialize(cfg).context("invalid indicator settings")?;
    info!(indicator = %indicator.name(), "configured");

    let bars = load::load_ohlcv_csv(&cli.csv).with_context(|| format!("failed to load CSV '{}'", cli.csv.display()))?;
    if bars.is_empty() {
        anyhow::bail!("no bars loaded; check headers/delimiter.");
    }
    info!(bars = bars.len(), path = %cli.csv.display(), "loaded");

    let mut snapshots = Vec::with_capacity(bars.len());
    let (mut bullish, mut bearish) = (0usize, 0usize);
    for bar in &bars {
        if let BarOutcome::Committed(snap) = indicator.on_bar(&BarUpdate::closed(*bar)) {
            match snap.crossover {
                Crossover::Bullish => bullish += 1,
                Crossover::Bearish => bearish += 1,
                Crossover::None => {}
            }
            if snap.crossover.is_signal() {
                info!(time = snap.time, crossover = ?snap.crossover, average = snap.average, "crossover");
            }
            snapshots.push(snap);
        }
    }
    let last = indicator.state().last();
    info!(committed = snapshots.len(), delta = last.delta, gamma = last.gamma, bullish, bearish, "replay done");

    let keep = cli.tail.unwrap_or(bars.len()).min(bars.len());
    let shown = &bars[bars.len() - keep..];
    let from = shown.first().map_or(f64::NEG_INFINITY, |b| b.time);

    let mut chart = Chart::new().with_title(indicator.name());
    chart.add_bars(shown.iter().copied());
    chart.add_snapshots(snapshots.into_iter().filter(|s| s.time >= from));
    chart.autoscale_axes(0.05);

    let opts = RenderOptions { theme, ..RenderOptions::default() };
    let out = cli.out.clone().unwrap_or_else(|| default_out(&cli.csv));
    chart.render_to_png(&opts, &out)?;
    info!(path = %out.display(), "wrote chart");
    Ok(())
}

/// target/out/cma_<stem>.png
fn default_out(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("cma_{stem}.png"))
}
