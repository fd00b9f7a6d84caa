// File: crates/cma-core/src/render.rs
// Summary: Renderer-agnostic draw commands derived from snapshots (line color, crossover markers, Δ/Γ readouts).
// Notes:
// - Line points and markers live in chart space (time, value); readouts live in screen pixels.
// - Nothing here touches indicator state; a backend only executes the commands.

use crate::color::Rgb;
use crate::indicator::Snapshot;
use crate::signal::Crossover;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerIcon {
    UpArrow,
    DownArrow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerPlacement {
    Below,
    Above,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Moving-average vertex; the segment ending here takes `color`.
    LinePoint { time: f64, value: f64, color: Rgb },
    Marker { time: f64, value: f64, color: Rgb, icon: MarkerIcon, placement: MarkerPlacement },
    FillRect { left: f32, top: f32, width: f32, height: f32, color: Rgb },
    /// `(x, y)` is the text origin (top-left of the line box).
    Text { text: String, x: f32, y: f32, size: f32, bold: bool, color: Rgb },
}

/// Screen placement of the Δ and Γ readouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadoutLayout {
    pub delta_origin: (f32, f32),
    pub gamma_origin: (f32, f32),
    pub box_width: f32,
    pub box_height: f32,
    pub box_pad: f32,
    pub glyph_size: f32,
    pub value_size: f32,
    pub value_offset: f32,
}

impl Default for ReadoutLayout {
    fn default() -> Self {
        Self {
            delta_origin: (100.0, 50.0),
            gamma_origin: (200.0, 50.0),
            box_width: 40.0,
            box_height: 20.0,
            box_pad: 5.0,
            glyph_size: 16.0,
            value_size: 12.0,
            value_offset: 20.0,
        }
    }
}

pub const DELTA_GLYPH: char = '\u{0394}';
pub const GAMMA_GLYPH: char = '\u{0393}';

/// Round to two decimals, ties to even; negative zero collapses to zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0 + 0.0
}

/// "Δ: 1.23" style readout text.
pub fn format_readout(glyph: char, value: f64) -> String {
    format!("{glyph}: {}", round2(value))
}

/// Marker for a crossover, if any: bullish is a green up-arrow under the line, bearish a red down-arrow over it.
pub fn marker_for(snapshot: &Snapshot) -> Option<DrawCommand> {
    let (color, icon, placement) = match snapshot.crossover {
        Crossover::None => return None,
        Crossover::Bullish => (Rgb::GREEN, MarkerIcon::UpArrow, MarkerPlacement::Below),
        Crossover::Bearish => (Rgb::RED, MarkerIcon::DownArrow, MarkerPlacement::Above),
    };
    Some(DrawCommand::Marker { time: snapshot.time, value: snapshot.average, color, icon, placement })
}

fn readout(out: &mut Vec<DrawCommand>, glyph: char, value: f64, origin: (f32, f32), layout: &ReadoutLayout) {
    let (x, y) = origin;
    out.push(DrawCommand::FillRect {
        left: x - layout.box_pad,
        top: y - layout.box_pad,
        width: layout.box_width,
        height: layout.box_height,
        color: if value > 0.0 { Rgb::GREEN } else { Rgb::RED },
    });
    out.push(DrawCommand::Text {
        text: glyph.to_string(),
        x,
        y,
        size: layout.glyph_size,
        bold: true,
        color: Rgb::BLACK,
    });
    out.push(DrawCommand::Text {
        text: format_readout(glyph, value),
        x: x + layout.value_offset,
        y,
        size: layout.value_size,
        bold: false,
        color: if value < 0.0 { Rgb::WHITE } else { Rgb::BLACK },
    });
}

/// Δ and Γ readout panel for one snapshot.
pub fn readouts(snapshot: &Snapshot, layout: &ReadoutLayout) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(6);
    readout(&mut out, DELTA_GLYPH, snapshot.delta, layout.delta_origin, layout);
    readout(&mut out, GAMMA_GLYPH, snapshot.gamma, layout.gamma_origin, layout);
    out
}

/// Everything one bar contributes: line vertex, optional marker, readouts.
pub fn render(snapshot: &Snapshot, layout: &ReadoutLayout) -> Vec<DrawCommand> {
    let mut out = vec![DrawCommand::LinePoint { time: snapshot.time, value: snapshot.average, color: snapshot.color }];
    out.extend(marker_for(snapshot));
    out.extend(readouts(snapshot, layout));
    out
}

/// Whole history: every vertex and marker, readouts for the latest snapshot only.
pub fn render_history(snapshots: &[Snapshot], layout: &ReadoutLayout) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(snapshots.len() + 6);
    for s in snapshots {
        out.push(DrawCommand::LinePoint { time: s.time, value: s.average, color: s.color });
        out.extend(marker_for(s));
    }
    if let Some(last) = snapshots.last() {
        out.extend(readouts(last, layout));
    }
    out
}
