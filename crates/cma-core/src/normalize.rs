// File: crates/cma-core/src/normalize.rs
// Summary: Contrast-tunable squashing of unbounded values into the open range (-100, 100).
// Notes:
// - Closed form: 100 - 200 / ((1 + c/|x|)^x + 1).
// - With p = x * ln(1 + c/|x|) this equals 100 * tanh(p / 2), which is what we
//   evaluate: no power of a near-1 base, no overflow for large |x|.
// - The curve is odd and saturates at +-100 * tanh(c / 2) as |x| grows.

/// Contrast used by the host plugin.
pub const DEFAULT_CONTRAST: f64 = 1.0;

/// Largest magnitude `normalize` ever returns; strictly inside 100.
pub const NORMALIZED_LIMIT: f64 = 100.0 - 1e-9;

/// Total and pure: any input maps to a finite value in (-100, 100).
/// Zero, NaN and a non-positive or non-finite `contrast` all map to 0.
pub fn normalize(value: f64, contrast: f64) -> f64 {
    if value == 0.0 || value.is_nan() || !contrast.is_finite() || contrast <= 0.0 {
        return 0.0;
    }
    let magnitude = value.abs();
    let half_exponent = if value.is_infinite() {
        // limit of x * ln(1 + c/|x|) as |x| -> inf
        contrast.copysign(value) * 0.5
    } else {
        let ratio = contrast / magnitude;
        // subnormal |x|: the curve is flat at 0 there
        if !ratio.is_finite() { return 0.0; }
        value * ratio.ln_1p() * 0.5
    };
    let out = 100.0 * half_exponent.tanh();
    if out.is_nan() { return 0.0; }
    out.clamp(-NORMALIZED_LIMIT, NORMALIZED_LIMIT)
}

/// `normalize` with `DEFAULT_CONTRAST`.
pub fn normalize_default(value: f64) -> f64 {
    normalize(value, DEFAULT_CONTRAST)
}
