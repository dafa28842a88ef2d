//! Precision used for weight arithmetic.
use rug::Float;

/// Bits of precision for weights, partition sums and cumulative sums.
///
/// Partition sums and the cumulative sums built while sampling must be computed
/// at the same precision and in the same order so that they agree exactly.
pub const WEIGHT_PRECISION: u32 = 128;

const RELATIVE_TOLERANCE: f64 = 1e-5;
const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// `|a - b| <= atol + rtol * |b|`, the usual asymmetric closeness test.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * b.abs()
}

/// A new `Float` holding `value` at [`WEIGHT_PRECISION`].
pub fn weight_float(value: f64) -> Float {
    Float::with_val(WEIGHT_PRECISION, value)
}
