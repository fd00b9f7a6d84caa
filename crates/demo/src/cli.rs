// File: crates/demo/src/cli.rs
// Summary: Command-line arguments; every indicator field can override the TOML config.

use std::path::PathBuf;

use clap::Parser;
use cma_core::{AverageKind, ColorScale, IndicatorConfig, IntrabarPolicy, PriceSource};

#[derive(Parser, Debug)]
#[command(name = "cma-demo")]
#[command(about = "Replay an OHLCV CSV through the colorful moving average and render it to PNG")]
#[command(version)]
pub struct Cli {
    /// OHLCV CSV with a header row (time/open/high/low/close/volume)
    pub csv: PathBuf,

    /// Indicator settings as TOML; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Moving average: t3, sma, ema, rma, wma, vwma, lsma, hma
    #[arg(long)]
    pub average: Option<AverageKind>,

    /// Lookback period (1..=100)
    #[arg(short, long)]
    pub period: Option<u32>,

    /// Price fed to the average: close, open, high, low
    #[arg(long)]
    pub source: Option<PriceSource>,

    /// T3 volume factor (0.1..=1.0)
    #[arg(long)]
    pub volume_factor: Option<f64>,

    /// Normalizer contrast (> 0)
    #[arg(long)]
    pub contrast: Option<f64>,

    /// Intrabar handling: closed-bars-only, every-update
    #[arg(long)]
    pub intrabar: Option<IntrabarPolicy>,

    /// Line coloring: red-green, legacy
    #[arg(long)]
    pub color_scale: Option<ColorScale>,

    /// Chart theme preset: dark, light, high-contrast-dark
    #[arg(long, default_value = "dark")]
    pub theme: String,

    /// Only plot the last N bars (the indicator still sees all of them)
    #[arg(long)]
    pub tail: Option<usize>,

    /// Output PNG; defaults to target/out/cma_<stem>.png
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Fold the flags over a base config.
    pub fn apply(&self, mut cfg: IndicatorConfig) -> IndicatorConfig {
        if let Some(v) = self.average { cfg.average = v; }
        if let Some(v) = self.period { cfg.period = v; }
        if let Some(v) = self.source { cfg.source = v; }
        if let Some(v) = self.volume_factor { cfg.t3_volume_factor = v; }
        if let Some(v) = self.contrast { cfg.contrast = v; }
        if let Some(v) = self.intrabar { cfg.intrabar = v; }
        if let Some(v) = self.color_scale { cfg.color_scale = v; }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["cma-demo", "bars.csv", "--average", "HMA", "--period", "21", "--intrabar", "every-update"]);
        let cfg = cli.apply(IndicatorConfig::default());
        assert_eq!(cfg.average, AverageKind::Hma);
        assert_eq!(cfg.period, 21);
        assert_eq!(cfg.intrabar, IntrabarPolicy::EveryUpdate);
        assert_eq!(cfg.source, PriceSource::Close);
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert!(Cli::try_parse_from(["cma-demo", "bars.csv", "--average", "kama"]).is_err());
    }
}
