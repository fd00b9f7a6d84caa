// File: crates/cma-chart/src/lib.rs
// Summary: Skia raster backend for the colorful moving average: candles, colored line, markers and readouts.

pub mod axis;
pub mod chart;
pub mod paint;
pub mod theme;

pub use axis::Axis;
pub use chart::{Chart, Insets, RenderOptions, HEIGHT, WIDTH};
pub use paint::{paint_commands, Frame, PaintOptions};
pub use theme::Theme;
