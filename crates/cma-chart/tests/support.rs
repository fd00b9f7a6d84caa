// File: crates/cma-chart/tests/support.rs
// Purpose: Deterministic bars and snapshots shared by the chart tests.

#![allow(dead_code)]

use cma_core::{AverageKind, Bar, ColorfulMa, Indicator, IndicatorConfig, Snapshot};

pub fn zigzag_bars(n: usize) -> Vec<Bar> {
    let mut v = Vec::with_capacity(n);
    let mut price = 10.0f64;
    for i in 0..n {
        let o = price;
        let c = o + (i as f64 * 0.6).sin() * 0.8;
        let h = o.max(c) + 0.3;
        let l = o.min(c) - 0.3;
        price = c;
        v.push(Bar::try_new(i as f64, o, h, l, c, 100.0).expect("valid bar"));
    }
    v
}

pub fn snapshots_for(bars: &[Bar]) -> Vec<Snapshot> {
    let cfg = IndicatorConfig { average: AverageKind::Ema, period: 3, ..IndicatorConfig::default() };
    let mut ind = ColorfulMa::initialize(cfg).expect("valid config");
    ind.compute(bars)
}
