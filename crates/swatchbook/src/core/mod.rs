mod conversion;
mod equality;
mod string;

// conversion
pub(crate) use conversion::{
    hsv_to_rgb, normalize_hsv, pack_24bit, rgb_to_hsv, to_web_safe, unpack_24bit, wrap_channel,
    MAX_HEX,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_hsv;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_hsv;

// string
pub(crate) use string::{format_hex, format_hsv, parse_hex, resolve_hex};
