/// Clamp into `[0, 1]`, mapping NaN to `0`.
pub(crate) fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `x` inside `[start, start + width)` as a fraction, unclamped.
///
/// `width <= 0` is treated as a step at `start`.
pub(crate) fn ramp(x: f64, start: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return if x >= start { 1.0 } else { 0.0 };
    }
    (x - start) / width
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
