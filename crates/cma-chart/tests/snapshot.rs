// File: crates/cma-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic chart (bars + colored average + markers) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, only checks that the render decodes at the requested size and logs a note.
//   No goldens are committed: the pixel comparison starts once a run with
//   UPDATE_SNAPSHOTS=1 has written tests/__snapshots__/*.png.

mod support;

use cma_chart::{Chart, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        assert_eq!(got_img.dimensions(), (480, 320));
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(draw_bars: bool) -> Vec<u8> {
    let bars = support::zigzag_bars(30);
    let snaps = support::snapshots_for(&bars);
    let mut chart = Chart::new();
    chart.add_bars(bars);
    chart.add_snapshots(snaps);
    chart.autoscale_axes(0.02);

    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 320;
    opts.draw_labels = false; // deterministic
    opts.draw_bars = draw_bars;
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_colored_average() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/colored_average.png");
    write_or_compare(&path, &render_bytes(true));
}

#[test]
fn golden_average_only() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/average_only.png");
    write_or_compare(&path, &render_bytes(false));
}

#[test]
fn rendering_is_repeatable() {
    assert_eq!(render_bytes(true), render_bytes(true));
}
