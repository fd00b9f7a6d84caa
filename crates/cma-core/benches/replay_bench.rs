use cma_core::{AverageKind, Bar, ColorfulMa, Indicator, IndicatorConfig};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_bars(n: usize) -> Vec<Bar> {
    let mut v = Vec::with_capacity(n);
    let mut price = 100.0f64;
    for i in 0..n {
        let o = price;
        let c = o + (i as f64 * 0.05).sin();
        let h = o.max(c) + 0.5;
        let l = o.min(c) - 0.5;
        price = c;
        v.push(Bar { time: i as f64, open: o, high: h, low: l, close: c, volume: 1_000.0 + (i % 17) as f64 });
    }
    v
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    let bars = gen_bars(50_000);
    for kind in [AverageKind::T3, AverageKind::Sma, AverageKind::Hma, AverageKind::Vwma] {
        for &period in &[8u32, 50u32] {
            let cfg = IndicatorConfig { average: kind, period, ..IndicatorConfig::default() };
            group.bench_with_input(BenchmarkId::from_parameter(format!("{}_{period}", kind.label())), &cfg, |b, cfg| {
                b.iter_batched(
                    || ColorfulMa::initialize(cfg.clone()).expect("valid config"),
                    |mut ind| { black_box(ind.compute(&bars)); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_replay);
criterion_main!(benches);
