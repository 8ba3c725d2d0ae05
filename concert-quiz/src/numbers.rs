//! Numeric conversion helpers centralizing the casts the quiz needs.

use num_traits::cast::cast;

/// Divide two counts as `f32`, returning 0.0 when the denominator is zero.
#[must_use]
pub fn ratio_f32(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        return 0.0;
    }
    let num = cast::<usize, f64>(numerator).unwrap_or(0.0);
    let den = cast::<usize, f64>(denominator).unwrap_or(1.0);
    cast::<f64, f32>((num / den).clamp(0.0, f64::from(f32::MAX))).unwrap_or(0.0)
}

/// Saturating `u64` addition used for deadline arithmetic.
#[must_use]
pub const fn deadline_after(now: u64, delay: u64) -> u64 {
    now.saturating_add(delay)
}
