// File: crates/cma-core/src/bar.rs
// Summary: Bar model (OHLCV) and per-notification update envelope.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub time: f64, // time/index (displayed on X)
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Construct a bar enforcing OHLC invariants:
    /// low <= min(open,close), high >= max(open,close), low <= high, volume >= 0.
    pub fn try_new(time: f64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Result<Self, IndicatorError> {
        let lo = open.min(close);
        let hi = open.max(close);
        if low > lo { return Err(IndicatorError::InvalidBar("low above min(open,close)")); }
        if high < hi { return Err(IndicatorError::InvalidBar("high below max(open,close)")); }
        if low > high { return Err(IndicatorError::InvalidBar("low above high")); }
        if volume < 0.0 { return Err(IndicatorError::InvalidBar("negative volume")); }
        Ok(Self { time, open, high, low, close, volume })
    }

    /// Bar with identical OHLC and zero volume; handy for feeding a bare price stream.
    pub fn flat(time: f64, price: f64) -> Self {
        Self { time, open: price, high: price, low: price, close: price, volume: 0.0 }
    }

    pub fn is_up(&self) -> bool { self.close >= self.open }
}

/// Price field the moving average is computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    #[default]
    Close,
    Open,
    High,
    Low,
}

impl PriceSource {
    pub fn select(&self, bar: &Bar) -> f64 {
        match self {
            PriceSource::Close => bar.close,
            PriceSource::Open => bar.open,
            PriceSource::High => bar.high,
            PriceSource::Low => bar.low,
        }
    }
}

/// Whether a notification closes its bar or is an intrabar revision of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarStatus {
    Final,
    Provisional,
}

#[derive(Clone, Copy, Debug)]
pub struct BarUpdate {
    pub bar: Bar,
    pub status: BarStatus,
}

impl BarUpdate {
    pub fn closed(bar: Bar) -> Self { Self { bar, status: BarStatus::Final } }
    pub fn provisional(bar: Bar) -> Self { Self { bar, status: BarStatus::Provisional } }
}
