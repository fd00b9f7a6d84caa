// File: crates/cma-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

mod support;

use cma_chart::{Chart, RenderOptions};

#[test]
fn render_smoke_png() {
    let bars = support::zigzag_bars(40);
    let snaps = support::snapshots_for(&bars);

    let mut chart = Chart::new().with_title("smoke");
    chart.add_bars(bars);
    chart.add_snapshots(snaps);
    chart.autoscale_axes(0.05);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_chart_still_renders() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
