// File: crates/demo/src/load.rs
// Summary: OHLCV CSV loader with header detection and epoch / RFC 3339 / calendar time parsing.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use cma_core::Bar;
use tracing::{debug, warn};

/// Load bars; rows missing a price or breaking OHLC ordering are skipped with a warning.
/// Rows without a parseable time are numbered by position.
pub fn load_ohlcv_csv(path: &Path) -> Result<Vec<Bar>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.iter().any(|n| h.as_str() == *n));
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "vol", "v"]);

    let (Some(i_open), Some(i_high), Some(i_low), Some(i_close)) = (i_open, i_high, i_low, i_close) else {
        anyhow::bail!("{}: need open/high/low/close columns, found {:?}", path.display(), headers);
    };
    if i_volume.is_none() {
        warn!("no volume column; VWMA falls back to a simple mean");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let num = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());

        let time = i_time.and_then(|i| rec.get(i)).and_then(parse_time).unwrap_or(row as f64);
        let volume = i_volume.and_then(num).unwrap_or(0.0);
        let (Some(o), Some(h), Some(l), Some(c)) = (num(i_open), num(i_high), num(i_low), num(i_close)) else {
            warn!(row = row + 1, "missing price; row skipped");
            continue;
        };
        match Bar::try_new(time, o, h, l, c, volume) {
            Ok(bar) => out.push(bar),
            Err(e) => warn!(row = row + 1, error = %e, "bad bar; row skipped"),
        }
    }
    Ok(out)
}

/// Seconds since the epoch. Integers above 1e12 are taken as milliseconds.
pub fn parse_time(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Some(if n > 10_i64.pow(12) { n as f64 / 1000.0 } else { n as f64 });
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64 / 1000.0);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp() as f64);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp() as f64)
}
