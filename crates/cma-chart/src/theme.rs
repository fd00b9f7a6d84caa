// File: crates/cma-chart/src/theme.rs
// Summary: Light/Dark theming for the chart frame and candles; the average line brings its own colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub candle_up: skia::Color,
    pub candle_down: skia::Color,
    /// Stroke around crossover markers so they read on any candle color.
    pub marker_outline: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            candle_up: skia::Color::from_argb(140, 40, 200, 120),
            candle_down: skia::Color::from_argb(140, 220, 80, 80),
            marker_outline: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            candle_up: skia::Color::from_argb(120, 20, 160, 90),
            candle_down: skia::Color::from_argb(120, 200, 60, 60),
            marker_outline: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            candle_up: skia::Color::from_argb(160, 0x00, 0xaa, 0xff),
            candle_down: skia::Color::from_argb(160, 0xff, 0x00, 0xff),
            marker_outline: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Preset by name, case-insensitive.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
