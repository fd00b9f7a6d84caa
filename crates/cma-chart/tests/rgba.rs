// File: crates/cma-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

mod support;

use cma_chart::{Axis, Chart, RenderOptions, Theme};
use cma_core::{Crossover, Rgb, Snapshot};

fn flat_snapshot(time: f64, average: f64, color: Rgb) -> Snapshot {
    Snapshot {
        time,
        average,
        delta: 0.0,
        gamma: 0.0,
        normalized_delta: 0.0,
        normalized_gamma: 0.0,
        color,
        crossover: Crossover::None,
        provisional: false,
    }
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_bars(support::zigzag_bars(5));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(pixel(&px, stride, 0, 0), [18, 18, 20, 255]);
}

#[test]
fn average_line_takes_snapshot_color() {
    // horizontal line through the vertical middle of the plot
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 10.0);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    let green = Rgb::new(0, 255, 0);
    chart.add_snapshots((0..=10).map(|i| flat_snapshot(i as f64, 5.0, green)));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::light();
    opts.line_width = 4.0;
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    let mid_x = (opts.insets.left as i32 + opts.width - opts.insets.right as i32) / 2;
    let mid_y = (opts.insets.top as i32 + opts.height - opts.insets.bottom as i32) / 2;
    assert_eq!(pixel(&px, stride, mid_x as usize, mid_y as usize), [0, 255, 0, 255]);
}

#[test]
fn readout_boxes_land_in_the_top_inset() {
    let mut chart = Chart::new();
    chart.add_snapshots([flat_snapshot(0.0, 1.0, Rgb::RED), Snapshot { delta: 2.0, ..flat_snapshot(1.0, 2.0, Rgb::RED) }]);
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // Δ box spans (95..135, 45..65): green for positive delta; Γ box (195..235) red for gamma = 0
    assert_eq!(pixel(&px, stride, 110, 55), [0, 128, 0, 255]);
    assert_eq!(pixel(&px, stride, 210, 55), [255, 0, 0, 255]);
}
