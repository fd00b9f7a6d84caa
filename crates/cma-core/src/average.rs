// File: crates/cma-core/src/average.rs
// Summary: Streaming moving averages (T3, SMA, EMA, RMA, WMA, VWMA, LSMA, HMA) behind one tagged variant.
// Notes:
// - Every variant yields `None` until it has seen enough samples (warm-up).
// - All state is plain data so an average can be cloned to preview an intrabar tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::IndicatorConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AverageKind {
    #[default]
    T3,
    Sma,
    Ema,
    Rma,
    Wma,
    Vwma,
    Lsma,
    Hma,
}

impl AverageKind {
    pub const ALL: [AverageKind; 8] = [
        AverageKind::T3,
        AverageKind::Sma,
        AverageKind::Ema,
        AverageKind::Rma,
        AverageKind::Wma,
        AverageKind::Vwma,
        AverageKind::Lsma,
        AverageKind::Hma,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AverageKind::T3 => "T3",
            AverageKind::Sma => "SMA",
            AverageKind::Ema => "EMA",
            AverageKind::Rma => "RMA",
            AverageKind::Wma => "WMA",
            AverageKind::Vwma => "VWMA",
            AverageKind::Lsma => "LSMA",
            AverageKind::Hma => "HMA",
        }
    }
}

/// Push into a bounded window, evicting the oldest sample once `cap` is reached.
fn push_bounded<T>(window: &mut VecDeque<T>, cap: usize, item: T) -> Option<T> {
    let evicted = if window.len() == cap { window.pop_front() } else { None };
    window.push_back(item);
    evicted
}

#[derive(Clone, Debug)]
pub struct Sma {
    period: usize,
    window: VecDeque<f64>,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        let p = period.max(1);
        Self { period: p, window: VecDeque::with_capacity(p) }
    }

    /// Summed from the window each time, so an outlier is gone once it leaves.
    pub fn next(&mut self, price: f64) -> Option<f64> {
        push_bounded(&mut self.window, self.period, price);
        if self.window.len() < self.period { return None; }
        Some(self.window.iter().sum::<f64>() / self.period as f64)
    }
}

/// Exponential smoothing seeded with the SMA of the first `period` samples.
#[derive(Clone, Debug)]
pub struct Ema {
    alpha: f64,
    seed: Sma,
    value: Option<f64>,
}

impl Ema {
    /// Standard EMA, alpha = 2 / (period + 1).
    pub fn new(period: usize) -> Self {
        let p = period.max(1);
        Self { alpha: 2.0 / (p as f64 + 1.0), seed: Sma::new(p), value: None }
    }

    /// Wilder's running average (RMA), alpha = 1 / period.
    pub fn wilder(period: usize) -> Self {
        let p = period.max(1);
        Self { alpha: 1.0 / p as f64, seed: Sma::new(p), value: None }
    }

    pub fn next(&mut self, price: f64) -> Option<f64> {
        let v = match self.value {
            Some(prev) => prev + self.alpha * (price - prev),
            None => self.seed.next(price)?,
        };
        self.value = Some(v);
        Some(v)
    }
}

/// Linearly weighted average; newest sample weighs `period`, oldest weighs 1.
#[derive(Clone, Debug)]
pub struct Wma {
    period: usize,
    window: VecDeque<f64>,
}

impl Wma {
    pub fn new(period: usize) -> Self {
        let p = period.max(1);
        Self { period: p, window: VecDeque::with_capacity(p) }
    }

    pub fn next(&mut self, price: f64) -> Option<f64> {
        push_bounded(&mut self.window, self.period, price);
        if self.window.len() < self.period { return None; }
        let weighted: f64 = self.window.iter().enumerate().map(|(i, v)| (i + 1) as f64 * v).sum();
        let denom = (self.period * (self.period + 1)) as f64 / 2.0;
        Some(weighted / denom)
    }
}

/// Volume-weighted average over the window; plain mean when the window carries no volume.
#[derive(Clone, Debug)]
pub struct Vwma {
    period: usize,
    window: VecDeque<(f64, f64)>,
}

impl Vwma {
    pub fn new(period: usize) -> Self {
        let p = period.max(1);
        Self { period: p, window: VecDeque::with_capacity(p) }
    }

    pub fn next(&mut self, price: f64, volume: f64) -> Option<f64> {
        push_bounded(&mut self.window, self.period, (price, volume.max(0.0)));
        if self.window.len() < self.period { return None; }
        let volume_sum: f64 = self.window.iter().map(|&(_, v)| v).sum();
        if volume_sum > 0.0 {
            let pv: f64 = self.window.iter().map(|&(p, v)| p * v).sum();
            Some(pv / volume_sum)
        } else {
            Some(self.window.iter().map(|&(p, _)| p).sum::<f64>() / self.period as f64)
        }
    }
}

/// Least-squares moving average: endpoint of the regression line over the window.
#[derive(Clone, Debug)]
pub struct Lsma {
    period: usize,
    window: VecDeque<f64>,
}

impl Lsma {
    pub fn new(period: usize) -> Self {
        let p = period.max(1);
        Self { period: p, window: VecDeque::with_capacity(p) }
    }

    pub fn next(&mut self, price: f64) -> Option<f64> {
        push_bounded(&mut self.window, self.period, price);
        if self.window.len() < self.period { return None; }
        let n = self.period as f64;
        if self.period == 1 { return Some(price); }
        let sum_x = n * (n - 1.0) / 2.0;
        let sum_xx = (n - 1.0) * n * (2.0 * n - 1.0) / 6.0;
        let (sum_y, sum_xy) = self
            .window
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sy, sxy), (i, &y)| (sy + y, sxy + i as f64 * y));
        let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
        let intercept = (sum_y - slope * sum_x) / n;
        Some(intercept + slope * (n - 1.0))
    }
}

/// Hull moving average: WMA(2 * WMA(p/2) - WMA(p), floor(sqrt(p))).
#[derive(Clone, Debug)]
pub struct Hma {
    half: Wma,
    full: Wma,
    smooth: Wma,
}

impl Hma {
    pub fn new(period: usize) -> Self {
        let p = period.max(1);
        let sqrt_p = ((p as f64).sqrt().floor() as usize).max(1);
        Self { half: Wma::new((p / 2).max(1)), full: Wma::new(p), smooth: Wma::new(sqrt_p) }
    }

    pub fn next(&mut self, price: f64) -> Option<f64> {
        let half = self.half.next(price);
        let full = self.full.next(price);
        match (half, full) {
            (Some(h), Some(f)) => self.smooth.next(2.0 * h - f),
            _ => None,
        }
    }
}

/// Tillson T3: six cascaded EMAs blended by the volume factor.
#[derive(Clone, Debug)]
pub struct T3 {
    stages: [Ema; 6],
    coeffs: [f64; 4],
}

impl T3 {
    pub fn new(period: usize, volume_factor: f64) -> Self {
        let v = volume_factor;
        let v2 = v * v;
        let c1 = -(v2 * v);
        let c2 = 3.0 * (v2 - c1);
        let c3 = -6.0 * v2 - 3.0 * (v - c1);
        let c4 = 1.0 + 3.0 * v - c1 + 3.0 * v2;
        Self { stages: std::array::from_fn(|_| Ema::new(period)), coeffs: [c1, c2, c3, c4] }
    }

    pub fn next(&mut self, price: f64) -> Option<f64> {
        let mut e = [0.0f64; 6];
        let mut x = price;
        for (slot, stage) in e.iter_mut().zip(self.stages.iter_mut()) {
            x = stage.next(x)?;
            *slot = x;
        }
        let [c1, c2, c3, c4] = self.coeffs;
        Some(c1 * e[5] + c2 * e[4] + c3 * e[3] + c4 * e[2])
    }
}

/// The moving-average collaborator feeding the momentum core.
#[derive(Clone, Debug)]
pub enum Average {
    T3(T3),
    Sma(Sma),
    Ema(Ema),
    Rma(Ema),
    Wma(Wma),
    Vwma(Vwma),
    Lsma(Lsma),
    Hma(Hma),
}

impl Average {
    pub fn new(kind: AverageKind, period: usize, volume_factor: f64) -> Self {
        match kind {
            AverageKind::T3 => Average::T3(T3::new(period, volume_factor)),
            AverageKind::Sma => Average::Sma(Sma::new(period)),
            AverageKind::Ema => Average::Ema(Ema::new(period)),
            AverageKind::Rma => Average::Rma(Ema::wilder(period)),
            AverageKind::Wma => Average::Wma(Wma::new(period)),
            AverageKind::Vwma => Average::Vwma(Vwma::new(period)),
            AverageKind::Lsma => Average::Lsma(Lsma::new(period)),
            AverageKind::Hma => Average::Hma(Hma::new(period)),
        }
    }

    pub fn from_config(config: &IndicatorConfig) -> Self {
        Self::new(config.average, config.period as usize, config.t3_volume_factor)
    }

    pub fn kind(&self) -> AverageKind {
        match self {
            Average::T3(_) => AverageKind::T3,
            Average::Sma(_) => AverageKind::Sma,
            Average::Ema(_) => AverageKind::Ema,
            Average::Rma(_) => AverageKind::Rma,
            Average::Wma(_) => AverageKind::Wma,
            Average::Vwma(_) => AverageKind::Vwma,
            Average::Lsma(_) => AverageKind::Lsma,
            Average::Hma(_) => AverageKind::Hma,
        }
    }

    /// Feed one sample; `None` while warming up. Only VWMA reads `volume`.
    pub fn next(&mut self, price: f64, volume: f64) -> Option<f64> {
        match self {
            Average::T3(a) => a.next(price),
            Average::Sma(a) => a.next(price),
            Average::Ema(a) | Average::Rma(a) => a.next(price),
            Average::Wma(a) => a.next(price),
            Average::Vwma(a) => a.next(price, volume),
            Average::Lsma(a) => a.next(price),
            Average::Hma(a) => a.next(price),
        }
    }
}
