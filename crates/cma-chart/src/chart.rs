// File: crates/cma-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (Skia CPU raster surface, PNG via `image`).

use anyhow::{Context, Result};
use cma_core::{render_history, Bar, DrawCommand, ReadoutLayout, Snapshot};
use skia_safe as skia;
use tracing::debug;

use crate::paint::{make_font, paint_commands, Frame, PaintOptions};
use crate::theme::Theme;
use crate::Axis;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Plot rectangle `(l, t, r, b)` left inside a `width` x `height` surface.
    pub fn plot_rect(&self, width: i32, height: i32) -> (i32, i32, i32, i32) {
        (self.left as i32, self.top as i32, width - self.right as i32, height - self.bottom as i32)
    }
}

impl Default for Insets {
    // the tall top margin holds the Δ/Γ readout panel
    fn default() -> Self {
        Self { left: 72, right: 24, top: 88, bottom: 56 }
    }
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Axis labels, title and readout text. Off for pixel-stable snapshots.
    pub draw_labels: bool,
    pub draw_bars: bool,
    pub line_width: f32,
    pub marker_size: f32,
    pub readout: ReadoutLayout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            draw_bars: true,
            line_width: 2.0,
            marker_size: 6.0,
            readout: ReadoutLayout::default(),
        }
    }
}

pub struct Chart {
    pub title: String,
    pub bars: Vec<Bar>,
    pub snapshots: Vec<Snapshot>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            bars: Vec::new(),
            snapshots: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_bars(&mut self, bars: impl IntoIterator<Item = Bar>) {
        self.bars.extend(bars);
    }

    pub fn add_snapshots(&mut self, snapshots: impl IntoIterator<Item = Snapshot>) {
        self.snapshots.extend(snapshots);
    }

    /// Fit both axes to the data; `margin` pads the Y range by that fraction of its span.
    /// Leaves the axes alone when there is nothing to fit.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for b in &self.bars {
            x_min = x_min.min(b.time);
            x_max = x_max.max(b.time);
            y_min = y_min.min(b.low);
            y_max = y_max.max(b.high);
        }
        for s in &self.snapshots {
            x_min = x_min.min(s.time);
            x_max = x_max.max(s.time);
            y_min = y_min.min(s.average);
            y_max = y_max.max(s.average);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let pad = (y_max - y_min) * margin.max(0.0);
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - pad;
        self.y_axis.max = y_max + pad;
    }

    /// Paint everything onto `canvas`, which must be `opts.width` x `opts.height`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);

        let (l, t, r, b) = opts.insets.plot_rect(opts.width, opts.height);
        let frame = Frame::new(l as f32, t as f32, r as f32, b as f32, &self.x_axis, &self.y_axis);

        draw_grid(canvas, l, t, r, b, &opts.theme);
        draw_axes(canvas, l, t, r, b, &self.x_axis, &self.y_axis, opts);
        if opts.draw_bars {
            draw_bars(canvas, &frame, &self.bars, &opts.theme);
        }

        // clip the series to the plot; the readout panel sits in the top inset
        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(l as f32, t as f32, r as f32, b as f32), skia::ClipOp::Intersect, true);
        let cmds = render_history(&self.snapshots, &opts.readout);
        let (series, readouts): (Vec<_>, Vec<_>) = cmds
            .into_iter()
            .partition(|c| matches!(c, DrawCommand::LinePoint { .. } | DrawCommand::Marker { .. }));
        let popts = PaintOptions {
            line_width: opts.line_width,
            marker_size: opts.marker_size,
            draw_text: opts.draw_labels,
            marker_outline: opts.theme.marker_outline,
        };
        paint_commands(canvas, &frame, &series, &popts);
        canvas.restore();
        paint_commands(canvas, &frame, &readouts, &popts);

        if opts.draw_labels && !self.title.is_empty() {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(opts.theme.axis_label);
            canvas.draw_str(&self.title, (l as f32, 24.0), &make_font(14.0, false), &paint);
        }
    }

    /// Render into a tightly packed RGBA8 (unpremultiplied) buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back raster surface failed");
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote chart");
        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in grid_lines(l, r, 10) {
        canvas.draw_line((x, t as f32), (x, b as f32), &paint);
    }
    for y in grid_lines(t, b, 6) {
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

/// `n` evenly spaced positions from `from` to `to` inclusive.
fn grid_lines(from: i32, to: i32, n: usize) -> impl Iterator<Item = f32> {
    let step = (to - from) as f32 / n.saturating_sub(1).max(1) as f32;
    (0..n).map(move |i| from as f32 + step * i as f32)
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, x: &Axis, y: &Axis, opts: &RenderOptions) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(opts.theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);

    if !opts.draw_labels { return; }

    let mut paint_text = skia::Paint::default();
    paint_text.set_anti_alias(true);
    paint_text.set_color(opts.theme.axis_label);
    let font = make_font(14.0, false);
    canvas.draw_str(&x.label, (r as f32 - 80.0, b as f32 + 24.0), &font, &paint_text);
    canvas.draw_str(&y.label, (l as f32 - 56.0, t as f32 + 14.0), &font, &paint_text);

    // min/max price ticks
    let small = make_font(11.0, false);
    canvas.draw_str(format!("{:.2}", y.max), (4.0, t as f32 + 4.0), &small, &paint_text);
    canvas.draw_str(format!("{:.2}", y.min), (4.0, b as f32), &small, &paint_text);
}

fn draw_bars(canvas: &skia::Canvas, frame: &Frame, bars: &[Bar], theme: &Theme) {
    if bars.is_empty() { return; }

    let mut wick = skia::Paint::default();
    wick.set_anti_alias(true);
    wick.set_style(skia::paint::Style::Stroke);
    wick.set_stroke_width(1.0);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    // body width in pixels (roughly one “bar width” as fraction of plot)
    let n = bars.len() as f32;
    let bar_px = ((frame.right - frame.left) / n).max(3.0) * 0.7;

    for c in bars {
        let x = frame.sx(c.time);
        let y_o = frame.sy(c.open);
        let y_h = frame.sy(c.high);
        let y_l = frame.sy(c.low);
        let y_c = frame.sy(c.close);

        let color = if c.is_up() { theme.candle_up } else { theme.candle_down };
        wick.set_color(color);
        body.set_color(color);

        canvas.draw_line((x, y_h), (x, y_l), &wick);

        let half = bar_px * 0.5;
        let top = y_o.min(y_c);
        let bot = y_o.max(y_c);
        let rect = skia::Rect::from_ltrb(x - half, top, x + half, bot.max(top + 1.0));
        canvas.draw_rect(rect, &body);
    }
}
