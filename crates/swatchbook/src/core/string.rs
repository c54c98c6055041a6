use crate::error::ColorFormatError;
use crate::Float;

/// Parse the hexadecimal digits into a 24-bit color. The digits must be three
/// or six ASCII hex digits; three digits are expanded by doubling each one.
fn parse_digits(digits: &str) -> Result<u32, ColorFormatError> {
    fn digit(byte: u8) -> Result<u32, ColorFormatError> {
        char::from(byte)
            .to_digit(16)
            .ok_or(ColorFormatError::MalformedHex)
    }

    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => bytes
            .iter()
            .try_fold(0_u32, |acc, &b| -> Result<u32, ColorFormatError> {
                let n = digit(b)?;
                Ok((acc << 8) | (n << 4) | n)
            }),
        6 => bytes
            .iter()
            .try_fold(0_u32, |acc, &b| -> Result<u32, ColorFormatError> {
                Ok((acc << 4) | digit(b)?)
            }),
        n if n < 6 => Err(ColorFormatError::MissingDigits),
        _ => Err(ColorFormatError::TooManyDigits),
    }
}

/// Strip surrounding white space and at most one leading hash.
#[inline]
fn strip(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('#').unwrap_or(s)
}

/// Strictly parse a color in hexadecimal notation.
///
/// This function accepts three or six hexadecimal digits in either case,
/// optionally prefixed by a `#` and surrounded by white space. Anything else is
/// an error.
pub(crate) fn parse_hex(s: &str) -> Result<u32, ColorFormatError> {
    parse_digits(strip(s))
}

/// Leniently resolve a string in hexadecimal notation to a 24-bit color.
///
/// Unlike [`parse_hex`], this function never fails. Strings with more than six
/// digits are truncated to the first six. Any other malformed string, i.e., one
/// with fewer than six (but not three) digits or with characters that are not
/// hexadecimal digits, resolves to black.
pub(crate) fn resolve_hex(s: &str) -> u32 {
    let digits = strip(s);
    let digits = if 6 < digits.len() {
        // Cutting through a multi-byte character leaves no valid prefix.
        digits.get(..6).ok_or(ColorFormatError::MalformedHex)
    } else {
        Ok(digits)
    };

    digits.and_then(parse_digits).unwrap_or_else(|error| {
        log::debug!("hex color {:?} resolves to black: {}", s, error);
        0
    })
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the 24-bit color with six lowercase hexadecimal digits, optionally
/// prefixed by a `#`.
pub(crate) fn format_hex(hex: u32, with_hash: bool) -> String {
    if with_hash {
        format!("#{:06x}", hex)
    } else {
        format!("{:06x}", hex)
    }
}

/// Format the HSV coordinates in functional notation.
///
/// Coordinates are written with Rust's shortest round-tripping representation,
/// so whole numbers have no fractional part: `hsv(120,1,0.5)`.
pub(crate) fn format_hsv(
    hsv: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [h, s, v] = *hsv;
    f.write_fmt(format_args!("hsv({},{},{})", h, s, v))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex, resolve_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#123")?, 0x112233);
        assert_eq!(parse_hex("123")?, 0x112233);
        assert_eq!(parse_hex("f0a")?, 0xff00aa);
        assert_eq!(parse_hex("#112233")?, 0x112233);
        assert_eq!(parse_hex("  #AbCdEf ")?, 0xabcdef);
        assert_eq!(parse_hex("#12"), Err(ColorFormatError::MissingDigits));
        assert_eq!(parse_hex(""), Err(ColorFormatError::MissingDigits));
        assert_eq!(parse_hex("#1234"), Err(ColorFormatError::MissingDigits));
        assert_eq!(parse_hex("1234567"), Err(ColorFormatError::TooManyDigits));
        assert_eq!(parse_hex("##123"), Err(ColorFormatError::MissingDigits));
        assert_eq!(parse_hex("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#12345g"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#💩"), Err(ColorFormatError::MissingDigits));
        assert_eq!(parse_hex("💩ab"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_resolve_hex() {
        assert_eq!(resolve_hex("f0a"), resolve_hex("ff00aa"));
        assert_eq!(resolve_hex("#ff00aa"), 0xff00aa);
        assert_eq!(resolve_hex("12"), 0);
        assert_eq!(resolve_hex("#12345"), 0);
        assert_eq!(resolve_hex("1234567"), 0x123456);
        assert_eq!(resolve_hex("#abcdef0123"), 0xabcdef);
        assert_eq!(resolve_hex("xyz"), 0);
        assert_eq!(resolve_hex("12345💩"), 0);
        assert_eq!(resolve_hex("123456💩"), 0x123456);
        assert_eq!(resolve_hex("#1234💩ab"), 0);
        assert_eq!(resolve_hex("1234ab💩💩"), 0x1234ab);
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(0xff0000, true), "#ff0000");
        assert_eq!(format_hex(0xff, true), "#0000ff");
        assert_eq!(format_hex(0, false), "000000");
        assert_eq!(format_hex(0xABCDEF, false), "abcdef");
    }
}
