// File: crates/cma-chart/src/paint.rs
// Summary: Executes core draw commands on a Skia canvas (colored segments, markers, readout boxes and text).

use cma_core::{DrawCommand, MarkerIcon, MarkerPlacement, Rgb};
use skia_safe as skia;

use crate::Axis;

pub fn to_skia(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

/// Plot rectangle in pixels plus the world ranges it shows.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Frame {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self { left, top, right, bottom, x_min: x_axis.min, x_span: x_axis.span(), y_min: y_axis.min, y_span: y_axis.span() }
    }

    #[inline]
    pub fn sx(&self, x: f64) -> f32 {
        self.left + ((x - self.x_min) / self.x_span) as f32 * (self.right - self.left)
    }

    #[inline]
    pub fn sy(&self, y: f64) -> f32 {
        self.bottom - ((y - self.y_min) / self.y_span) as f32 * (self.bottom - self.top)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PaintOptions {
    pub line_width: f32,
    pub marker_size: f32,
    pub draw_text: bool,
    pub marker_outline: skia::Color,
}

/// System sans-serif at `size`, bold on request; the default font when the platform has none.
pub fn make_font(size: f32, bold: bool) -> skia::Font {
    let style = if bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() };
    let mut font = skia::FontMgr::default()
        .legacy_make_typeface(None, style)
        .map(|tf| skia::Font::from_typeface(tf, size))
        .unwrap_or_default();
    font.set_size(size.max(1.0));
    font
}

fn draw_marker(
    canvas: &skia::Canvas,
    at: (f32, f32),
    color: Rgb,
    icon: MarkerIcon,
    placement: MarkerPlacement,
    opts: &PaintOptions,
) {
    let (x, y) = at;
    let s = opts.marker_size;
    let gap = s * 1.2;
    let (near, far) = match placement {
        MarkerPlacement::Below => (y + gap, y + gap + s * 1.6),
        MarkerPlacement::Above => (y - gap, y - gap - s * 1.6),
    };
    // screen y grows downward: an up-arrow's apex is the smaller y
    let (apex, foot) = match icon {
        MarkerIcon::UpArrow => (near.min(far), near.max(far)),
        MarkerIcon::DownArrow => (near.max(far), near.min(far)),
    };
    let mut path = skia::Path::new();
    path.move_to((x, apex));
    path.line_to((x - s, foot));
    path.line_to((x + s, foot));
    path.close();

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(to_skia(color));
    canvas.draw_path(&path, &fill);

    let mut outline = skia::Paint::default();
    outline.set_anti_alias(true);
    outline.set_style(skia::paint::Style::Stroke);
    outline.set_stroke_width(1.0);
    outline.set_color(opts.marker_outline);
    canvas.draw_path(&path, &outline);
}

/// Run `cmds` in order. Consecutive `LinePoint`s are joined; each segment takes its end point's color.
pub fn paint_commands(canvas: &skia::Canvas, frame: &Frame, cmds: &[DrawCommand], opts: &PaintOptions) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.line_width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);

    let mut prev: Option<(f32, f32)> = None;
    for cmd in cmds {
        match cmd {
            DrawCommand::LinePoint { time, value, color } => {
                let p = (frame.sx(*time), frame.sy(*value));
                if let Some(q) = prev {
                    stroke.set_color(to_skia(*color));
                    canvas.draw_line(q, p, &stroke);
                }
                prev = Some(p);
            }
            DrawCommand::Marker { time, value, color, icon, placement } => {
                draw_marker(canvas, (frame.sx(*time), frame.sy(*value)), *color, *icon, *placement, opts);
            }
            DrawCommand::FillRect { left, top, width, height, color } => {
                let mut fill = skia::Paint::default();
                fill.set_style(skia::paint::Style::Fill);
                fill.set_color(to_skia(*color));
                canvas.draw_rect(skia::Rect::from_xywh(*left, *top, *width, *height), &fill);
            }
            DrawCommand::Text { text, x, y, size, bold, color } => {
                if !opts.draw_text { continue; }
                let font = make_font(*size, *bold);
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(to_skia(*color));
                // origin is the top-left of the line box; Skia wants the baseline
                canvas.draw_str(text, (*x, *y + *size * 0.8), &font, &paint);
            }
        }
    }
}
