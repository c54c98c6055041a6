//! Export of colors as GIMP palette files.
//!
//! A [`GplPalette`] combines up to [`MAX_COLORS`] color-like entries with a
//! title and an optional comment. It renders them in the GPL text format
//! understood by GIMP and many other graphics applications:
//!
//! ```text
//! GIMP Palette
//! Name: My Palette
//! Columns: 8
//! #An optional comment
//!
//! 255   0   0 #ff0000
//!   0 128 255 Sky
//! ```
//!
//! Each color line has the red, green, and blue coordinates right-aligned in
//! three columns, followed by the entry's name or, if it has none, its hashed
//! hexadecimal notation.
use std::borrow::Cow;

use crate::error::PaletteError;
use crate::sink::FileSink;
use crate::termco::{ColorLike, Rgb};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The maximum number of colors in a palette.
pub const MAX_COLORS: usize = 256;

/// The number of columns GIMP uses when displaying the palette.
const COLUMNS: usize = 8;

/// Replace line breaks, which would corrupt the header.
fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

/// Determine whether the character must not appear in a file name.
fn is_unsafe_in_filename(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}

/// A palette of colors ready for export in GIMP's GPL format.
///
/// A palette is immutable once built. Its size is checked upon construction,
/// whereas its entries are converted to RGB only when rendering.
///
/// # Examples
///
/// ```
/// # use swatchbook::{Color, GplPalette};
/// # use swatchbook::error::PaletteError;
/// # use swatchbook::sink::MemorySink;
/// let palette = GplPalette::new("My Palette", vec![Color::from_rgb(255, 0, 0)])?;
/// assert_eq!(
///     palette.to_gpl()?,
///     "GIMP Palette\nName: My Palette\nColumns: 8\n\n255   0   0 #ff0000\n"
/// );
///
/// let mut sink = MemorySink::new();
/// palette.save(&mut sink)?;
/// assert!(sink.get("My_Palette.gpl").is_some());
/// # Ok::<(), PaletteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GplPalette<C> {
    title: String,
    comment: Option<String>,
    entries: Vec<C>,
}

impl<C: ColorLike> GplPalette<C> {
    /// Create a new palette with the given title and entries.
    ///
    /// This method fails if the title is empty or if there are more than
    /// [`MAX_COLORS`] entries. Line breaks in the title are replaced with
    /// spaces.
    pub fn new(title: &str, entries: Vec<C>) -> Result<Self, PaletteError> {
        if MAX_COLORS < entries.len() {
            return Err(PaletteError::TooLarge {
                count: entries.len(),
            });
        } else if title.trim().is_empty() {
            return Err(PaletteError::EmptyTitle);
        }

        log::trace!("new palette {:?} with {} colors", title, entries.len());
        Ok(Self {
            title: single_line(title),
            comment: None,
            entries,
        })
    }

    /// Add a one-line comment to this palette. Line breaks are replaced with
    /// spaces.
    #[must_use = "method returns a new palette and does not mutate the original value"]
    pub fn with_comment(self, comment: &str) -> Self {
        Self {
            comment: Some(single_line(comment)),
            ..self
        }
    }

    /// Access the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Access the comment.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Access the entries.
    pub fn entries(&self) -> &[C] {
        &self.entries
    }

    /// Determine the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Determine the file name for this palette.
    ///
    /// The file name is the title with the `.gpl` extension. Spaces, path
    /// separators, control characters, and characters that are not allowed in
    /// Windows file names are replaced by underscores. The result thus is a
    /// single path component.
    ///
    /// ```
    /// # use swatchbook::{Color, GplPalette};
    /// # use swatchbook::error::PaletteError;
    /// let palette = GplPalette::<Color>::new("../AC/DC: Live", vec![])?;
    /// assert_eq!(palette.filename(), ".._AC_DC__Live.gpl");
    /// # Ok::<(), PaletteError>(())
    /// ```
    pub fn filename(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .map(|c| if is_unsafe_in_filename(c) { '_' } else { c })
            .collect();
        format!("{}.gpl", stem)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Resolve every entry to its RGB color and line label.
    fn resolve(&self) -> Result<Vec<(Rgb, Option<&str>)>, PaletteError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .to_rgb()
                    .map(|rgb| (rgb, entry.label()))
                    .ok_or(PaletteError::InvalidEntry { index })
            })
            .collect()
    }

    /// Write this palette in GPL format.
    ///
    /// This method fails with [`PaletteError::InvalidEntry`] if an entry has no
    /// RGB representation. In that case, nothing has been written. If the
    /// writer fails, this method returns [`PaletteError::WriterFailed`].
    pub fn write_gpl<W: std::fmt::Write>(&self, out: &mut W) -> Result<(), PaletteError> {
        let lines = self.resolve()?;
        Self::write_lines(&self.title, self.comment.as_deref(), &lines, out)
            .map_err(PaletteError::WriterFailed)
    }

    fn write_lines<W: std::fmt::Write>(
        title: &str,
        comment: Option<&str>,
        lines: &[(Rgb, Option<&str>)],
        out: &mut W,
    ) -> std::fmt::Result {
        out.write_fmt(format_args!(
            "GIMP Palette\nName: {}\nColumns: {}\n",
            title, COLUMNS
        ))?;
        if let Some(comment) = comment {
            out.write_fmt(format_args!("#{}\n", comment))?;
        }
        out.write_str("\n")?;

        for &(rgb, label) in lines {
            let [r, g, b] = *rgb.as_ref();
            let name = label.map_or_else(|| Cow::Owned(rgb.to_hex_string()), Cow::Borrowed);
            out.write_fmt(format_args!("{:>3} {:>3} {:>3} {}\n", r, g, b, name))?;
        }

        Ok(())
    }

    /// Render this palette in GPL format.
    ///
    /// This method fails with [`PaletteError::InvalidEntry`] if an entry has no
    /// RGB representation.
    pub fn to_gpl(&self) -> Result<String, PaletteError> {
        let mut text = String::with_capacity(48 + 20 * self.entries.len());
        self.write_gpl(&mut text)?;
        Ok(text)
    }

    /// Save this palette with the given file sink.
    ///
    /// This method renders the palette and then writes it under
    /// [`GplPalette::filename`] with one call to the sink. If rendering fails,
    /// the sink is not called. If the sink fails, this method returns
    /// [`PaletteError::SinkUnavailable`] wrapping the sink's error.
    pub fn save<S: FileSink>(&self, sink: &mut S) -> Result<(), PaletteError> {
        let content = self.to_gpl()?;
        let filename = self.filename();

        log::debug!("saving palette {:?} as {}", self.title, filename);
        sink.write(&filename, &content)
            .map_err(|source| PaletteError::SinkUnavailable { filename, source })
    }
}

/// Render the colors as a GIMP palette with the given title and comment. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(signature = (title, colors, comment=None))]
pub fn gpl_text(
    title: &str,
    colors: Vec<crate::Color>,
    comment: Option<&str>,
) -> PyResult<String> {
    let mut palette = GplPalette::new(title, colors)?;
    if let Some(comment) = comment {
        palette = palette.with_comment(comment);
    }
    Ok(palette.to_gpl()?)
}

// ====================================================================================================================
