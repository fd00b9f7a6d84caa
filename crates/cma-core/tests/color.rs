// File: crates/cma-core/tests/color.rs
// Purpose: Gradient endpoints, clamping and the legacy channel mapping.

use cma_core::color::gradient_position;
use cma_core::{momentum_color, ColorScale, Rgb};

#[test]
fn gradient_endpoints() {
    assert_eq!(gradient_position(100.0), 255.0);
    assert_eq!(gradient_position(-100.0), 0.0);
    assert_eq!(gradient_position(0.0), 127.5);
}

#[test]
fn red_green_extremes_and_midpoint() {
    assert_eq!(momentum_color(100.0, ColorScale::RedGreen), Rgb::new(0, 255, 0));
    assert_eq!(momentum_color(-100.0, ColorScale::RedGreen), Rgb::new(255, 0, 0));
    assert_eq!(momentum_color(0.0, ColorScale::RedGreen), Rgb::new(127, 127, 0));
}

#[test]
fn channels_clamp_instead_of_wrapping() {
    assert_eq!(momentum_color(250.0, ColorScale::RedGreen), Rgb::new(0, 255, 0));
    assert_eq!(momentum_color(-250.0, ColorScale::RedGreen), Rgb::new(255, 0, 0));
    assert_eq!(momentum_color(f64::NAN, ColorScale::RedGreen).b, 0);
}

#[test]
fn gradient_moves_monotonically() {
    let mut prev = momentum_color(-100.0, ColorScale::RedGreen);
    for i in -99..=100 {
        let c = momentum_color(i as f64, ColorScale::RedGreen);
        assert!(c.g >= prev.g && c.r <= prev.r);
        assert_eq!(c.b, 0);
        prev = c;
    }
}

#[test]
fn legacy_scale_keeps_red_pinned() {
    assert_eq!(momentum_color(0.0, ColorScale::Legacy), Rgb::new(255, 127, 0));
    assert_eq!(momentum_color(100.0, ColorScale::Legacy), Rgb::new(255, 255, 0));
    assert_eq!(momentum_color(-100.0, ColorScale::Legacy), Rgb::new(255, 0, 0));
}

#[test]
fn argb_packing() {
    assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_argb(), 0xff12_3456);
}
