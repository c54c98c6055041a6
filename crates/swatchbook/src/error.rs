//! Utility module with swatchbook's errors.

#[cfg(feature = "pyffi")]
use pyo3::{
    exceptions::{PyOSError, PyValueError},
    prelude::*,
};

/// An erroneous hexadecimal color format.
///
/// Only the strict parser, i.e., [`Color as
/// FromStr`](../struct.Color.html#impl-FromStr-for-Color), reports this error.
/// The lenient [`Color::from_hex_str`](crate::Color::from_hex_str) and
/// [`Color::set_hex_str`](crate::Color::set_hex_str) recover from it by
/// truncating overlong input or falling back on black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with fewer than six hexadecimal digits that is not the
    /// three-digit shorthand. For example, `#12` and `#1234` are missing
    /// digits.
    MissingDigits,

    /// A color format with more than six hexadecimal digits. For example,
    /// `#1234567` has one digit too many.
    TooManyDigits,

    /// A color format with the right length but characters that are not
    /// hexadecimal digits. For example, `#0g0` has a malformed second digit.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            MissingDigits => {
                f.write_str("hex color should have 3 or 6 digits but has fewer than 6")
            }
            TooManyDigits => f.write_str("hex color should have 3 or 6 digits but has more"),
            MalformedHex => f.write_str("hex color should contain only hexadecimal digits"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while building, rendering, or saving a [`GplPalette`](crate::GplPalette).
#[derive(Debug)]
pub enum PaletteError {
    /// The palette has more than [`MAX_COLORS`](crate::gpl::MAX_COLORS)
    /// entries. The count is the number of entries actually supplied.
    TooLarge { count: usize },

    /// The palette title is empty or consists of white space only.
    EmptyTitle,

    /// The palette entry with the given index has no RGB representation.
    InvalidEntry { index: usize },

    /// The file sink could not write the file with the given name.
    SinkUnavailable {
        filename: String,
        source: std::io::Error,
    },

    /// The [`std::fmt::Write`] passed to
    /// [`GplPalette::write_gpl`](crate::GplPalette::write_gpl) failed.
    WriterFailed(std::fmt::Error),
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLarge { count } => f.write_fmt(format_args!(
                "palette should have at most {} colors but has {}",
                crate::gpl::MAX_COLORS,
                count
            )),
            Self::EmptyTitle => f.write_str("palette title should not be empty"),
            Self::InvalidEntry { index } => f.write_fmt(format_args!(
                "palette entry {} has no RGB representation",
                index
            )),
            Self::SinkUnavailable { filename, .. } => {
                f.write_fmt(format_args!("could not write palette file {}", filename))
            }
            Self::WriterFailed(_) => f.write_str("could not write palette text"),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SinkUnavailable { source, .. } => Some(source),
            Self::WriterFailed(source) => Some(source),
            _ => None,
        }
    }
}

impl From<PaletteError> for std::io::Error {
    fn from(value: PaletteError) -> Self {
        match value {
            PaletteError::SinkUnavailable { source, .. } => source,
            PaletteError::WriterFailed(_) => std::io::Error::other(value),
            _ => std::io::Error::new(std::io::ErrorKind::InvalidInput, value),
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<PaletteError> for PyErr {
    fn from(value: PaletteError) -> Self {
        match value {
            PaletteError::SinkUnavailable { .. } | PaletteError::WriterFailed(_) => {
                PyOSError::new_err(value.to_string())
            }
            _ => PyValueError::new_err(value.to_string()),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorFormatError, PaletteError};
    use std::error::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            ColorFormatError::TooManyDigits.to_string(),
            "hex color should have 3 or 6 digits but has more"
        );
        assert_eq!(
            PaletteError::TooLarge { count: 257 }.to_string(),
            "palette should have at most 256 colors but has 257"
        );
        assert_eq!(
            PaletteError::InvalidEntry { index: 3 }.to_string(),
            "palette entry 3 has no RGB representation"
        );
    }

    #[test]
    fn test_source() {
        let error = PaletteError::SinkUnavailable {
            filename: "My_Palette.gpl".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(error.to_string(), "could not write palette file My_Palette.gpl");
        assert_eq!(error.source().map(ToString::to_string), Some("read-only".to_string()));
        assert!(PaletteError::EmptyTitle.source().is_none());

        let io_error = std::io::Error::from(error);
        assert_eq!(io_error.kind(), std::io::ErrorKind::PermissionDenied);
        let io_error = std::io::Error::from(PaletteError::EmptyTitle);
        assert_eq!(io_error.kind(), std::io::ErrorKind::InvalidInput);

        let error = PaletteError::WriterFailed(std::fmt::Error);
        assert_eq!(error.to_string(), "could not write palette text");
        assert!(error.source().is_some());
        let io_error = std::io::Error::from(error);
        assert_eq!(io_error.kind(), std::io::ErrorKind::Other);
    }
}
