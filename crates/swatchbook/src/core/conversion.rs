use crate::Float;

/// The largest 24-bit color value.
pub(crate) const MAX_HEX: u32 = 0xff_ffff;

/// The distance between adjacent levels of the web-safe 6x6x6 cube.
const WEB_SAFE_STEP: u8 = 51;

/// Pack the three 8-bit coordinates into one 24-bit integer with red in the
/// most significant byte.
#[inline]
pub(crate) const fn pack_24bit(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Unpack a 24-bit integer into its three 8-bit coordinates. Bits above the
/// lower 24 are ignored.
#[inline]
pub(crate) const fn unpack_24bit(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

/// Wrap an arbitrary integer into a byte by masking its low 8 bits.
///
/// This mirrors bit-packing semantics rather than numeric clamping: 256 wraps
/// around to 0 and -1 becomes 255.
#[inline]
pub(crate) const fn wrap_channel(value: i32) -> u8 {
    (value & 0xff) as u8
}

/// Clamp the value into `0..=max`. Not-a-number becomes zero.
#[inline]
pub(crate) fn clamp_unit(value: Float, max: Float) -> Float {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if max < value {
        max
    } else {
        value
    }
}

/// Normalize HSV coordinates by clamping the hue into `0..=360` and the
/// saturation and value into `0..=1`.
#[inline]
pub(crate) fn normalize_hsv(h: Float, s: Float, v: Float) -> [Float; 3] {
    [clamp_unit(h, 360.0), clamp_unit(s, 1.0), clamp_unit(v, 1.0)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 8-bit RGB coordinates to HSV.
///
/// The hue is in degrees `0..360`, saturation and value are in `0..=1`.
/// Achromatic colors, i.e., grays including black and white, have hue and
/// saturation zero. The maximum coordinate is determined on the integers, so
/// that the piecewise selection never depends on floating point equality.
pub(crate) fn rgb_to_hsv(rgb: [u8; 3]) -> [Float; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let val = max as Float / 255.0;

    if max == min {
        return [0.0, 0.0, val];
    }

    let [rf, gf, bf] = rgb.map(|c| c as Float / 255.0);
    let diff = (max - min) as Float / 255.0;

    let sextant = if max == r {
        ((gf - bf) / diff).rem_euclid(6.0)
    } else if max == g {
        (bf - rf) / diff + 2.0
    } else {
        (rf - gf) / diff + 4.0
    };

    [sextant * 60.0, diff / (max as Float / 255.0), val]
}

/// Convert HSV coordinates to 8-bit RGB.
///
/// The coordinates must be normalized with [`normalize_hsv`] first. A hue of
/// exactly 360 falls into the last sextant and hence produces the same color as
/// a hue of 0. Each coordinate is rounded half away from zero.
pub(crate) fn hsv_to_rgb(hsv: [Float; 3]) -> [u8; 3] {
    let [hue, sat, val] = hsv;
    let c = val * sat;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = val - c;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r, g, b].map(|coordinate| to_byte(coordinate + m))
}

/// Scale a unit coordinate to `0..=255` and round. Out-of-range results
/// saturate.
#[inline]
fn to_byte(coordinate: Float) -> u8 {
    (coordinate * 255.0).round().clamp(0.0, 255.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Round the coordinate to the nearest web-safe level, i.e., multiple of 51.
///
/// Ties would round down, but since 51 is odd, no byte is exactly halfway
/// between two levels.
#[inline]
pub(crate) const fn to_web_safe(coordinate: u8) -> u8 {
    let remainder = coordinate % WEB_SAFE_STEP;
    if 2 * remainder as u16 > WEB_SAFE_STEP as u16 {
        coordinate - remainder + WEB_SAFE_STEP
    } else {
        coordinate - remainder
    }
}

// ====================================================================================================================
