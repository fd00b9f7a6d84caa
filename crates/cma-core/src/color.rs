// File: crates/cma-core/src/color.rs
// Summary: RGB color type and the momentum -> red/green gradient.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);

    /// Packed 0xAARRGGBB with full alpha.
    pub const fn to_argb(self) -> u32 {
        0xff00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Channel mapping applied to the gradient position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScale {
    /// red = 255 - f, green = f: saturated red at -100, saturated green at +100.
    #[default]
    RedGreen,
    /// red = 510 - f, green = f: the host plugin's channel math (red stays pinned, red -> yellow).
    Legacy,
}

/// Gradient position for a normalized momentum: 1.275 * nd + 127.5, i.e. 0 at -100 and 255 at +100.
/// Written as 127.5 * (1 + nd/100) so both ends land exactly on 0 and 255.
#[inline]
pub fn gradient_position(normalized_delta: f64) -> f64 {
    127.5 * (1.0 + normalized_delta / 100.0)
}

/// Clamp to a channel and truncate toward zero; NaN maps to 0.
#[inline]
fn channel(v: f64) -> u8 {
    if v.is_nan() { 0 } else { v.clamp(0.0, 255.0) as u8 }
}

/// Line color for a normalized momentum. Blue is always 0.
pub fn momentum_color(normalized_delta: f64, scale: ColorScale) -> Rgb {
    let f = gradient_position(normalized_delta);
    let red = match scale {
        ColorScale::RedGreen => 255.0 - f,
        ColorScale::Legacy => 510.0 - f,
    };
    Rgb::new(channel(red), channel(f), 0)
}
