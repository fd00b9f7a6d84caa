use anyhow::Result;
use cma_chart::{Chart, RenderOptions};
use cma_core::{AverageKind, Bar, ColorfulMa, Indicator, IndicatorConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_chart(n: usize) -> Chart {
    let mut bars = Vec::with_capacity(n);
    for i in 0..n {
        let c = (i as f64 * 0.01).sin() * 10.0 + 50.0;
        let o = c - (i as f64 * 0.3).cos();
        bars.push(Bar { time: i as f64, open: o, high: o.max(c) + 0.5, low: o.min(c) - 0.5, close: c, volume: 1.0 });
    }
    let cfg = IndicatorConfig { average: AverageKind::Ema, period: 14, ..IndicatorConfig::default() };
    let snaps = ColorfulMa::initialize(cfg).map(|mut ind| ind.compute(&bars)).unwrap_or_default();

    let mut ch = Chart::new();
    ch.add_bars(bars);
    ch.add_snapshots(snaps);
    ch.autoscale_axes(0.02);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("bars_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
