use crate::{Bits, Float};

/// Factor for reducing the resolution of floating point numbers before
/// comparing them.
const ROUNDING_FACTOR: Float = 1e12;

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two HSV triples describe the same color.
///
/// Before comparing, this macro reduces the hue to `0..360`, which makes 0°
/// and 360° the same hue, and then normalizes all three coordinates just like
/// [`assert_close_enough`].
///
/// # Panics
///
/// This macro panics if the normalized coordinates are not identical.
#[cfg(test)]
macro_rules! assert_same_hsv {
    ($hsv1:expr, $hsv2:expr $(,)?) => {
        let (hsv1, hsv2) = ($hsv1, $hsv2);
        let bits1 = $crate::core::to_eq_hsv(&hsv1);
        let bits2 = $crate::core::to_eq_hsv(&hsv2);
        assert_eq!(bits1, bits2, "HSV coordinates differ:\n{:?}\n{:?}", hsv1, hsv2);
    };
}

#[cfg(test)]
pub(crate) use assert_same_hsv;

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}

/// Normalize HSV coordinates for equality testing and hashing.
///
/// Full rotations are removed from the hue, so 0° and 360° compare equal.
#[must_use = "function returns new coordinates and does not mutate original value"]
pub(crate) fn to_eq_hsv(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [h, s, v] = *coordinates;
    let h = if h.is_nan() { 0.0 } else { h.rem_euclid(360.0) };

    // rem_euclid may round 360 - ε up to 360 again.
    let h = if h == 360.0 { 0.0 } else { h };
    [to_eq_bits(h), to_eq_bits(s), to_eq_bits(v)]
}

// ====================================================================================================================
