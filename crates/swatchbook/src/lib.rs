//! # Swatchbook
//!
//! Swatchbook models everyday 24-bit colors and exports them as palettes for
//! graphics applications.
//!
//!
//! ## 1. Overview
//!
//! Swatchbook's main abstractions are:
//!
//!   * [`Color`] implements **mutable colors** that hold their RGB, HSV, and
//!     hexadecimal encodings at the same time. Whichever encoding a caller
//!     writes, the other two are recomputed right away, so that all three
//!     always describe the same color.
//!   * The [`termco`] module offers the **plain value types**
//!     [`Rgb`](termco::Rgb) and [`Hsv`](termco::Hsv), the
//!     [`ColorLike`](termco::ColorLike) capability, and the
//!     [`Named`](termco::Named) adapter for attaching display names.
//!   * [`GplPalette`] **exports colors** in the GIMP palette format, which is
//!     understood by many graphics applications. It writes the result through
//!     a [`FileSink`](sink::FileSink), which either is a directory on disk or
//!     in-memory storage.
//!
//!
//! ## 2. Colors
//!
//! Colors can be created from any of their encodings and then modified through
//! any other:
//!
//! ```
//! # use swatchbook::Color;
//! let mut color = Color::from_hex_str("#0080ff");
//! assert_eq!((color.red(), color.green(), color.blue()), (0, 128, 255));
//! assert_eq!(color.to_hsv_string(), "hsv(209.88235294117646,1,1)");
//!
//! color.set_val(0.5);
//! assert_eq!(color.to_hex_string(true), "#004080");
//!
//! color.invert();
//! assert_eq!(color.to_hex_string(false), "ffbf7f");
//! ```
//!
//! Out-of-range inputs are normalized instead of rejected. The lenient
//! [`Color::from_hex_str`] falls back on black for input it cannot make sense
//! of, whereas the strict [`Color as
//! FromStr`](struct.Color.html#impl-FromStr-for-Color) reports a
//! [`ColorFormatError`](error::ColorFormatError).
//!
//!
//! ## 3. Palettes
//!
//! A palette has a title, an optional comment, and at most [`MAX_COLORS`](gpl::MAX_COLORS)
//! entries:
//!
//! ```
//! # use swatchbook::{Color, GplPalette};
//! # use swatchbook::error::PaletteError;
//! # use swatchbook::sink::MemorySink;
//! # use swatchbook::termco::Named;
//! let palette = GplPalette::new(
//!     "Fire and Ice",
//!     vec![
//!         Named::new("Fire", Color::from_rgb(226, 88, 34)),
//!         Named::new("Ice", Color::from_hex(0xa5f2f3)),
//!     ],
//! )?
//! .with_comment("Made with swatchbook");
//!
//! let mut sink = MemorySink::new();
//! palette.save(&mut sink)?;
//! assert_eq!(
//!     sink.get("Fire_and_Ice.gpl"),
//!     Some("GIMP Palette\nName: Fire and Ice\nColumns: 8\n#Made with swatchbook\n\n\
//!     226  88  34 Fire\n165 242 243 Ice\n")
//! );
//! # Ok::<(), PaletteError>(())
//! ```
//!
//!
//! ## 4. Feature Flags
//!
//! Swatchbook has two feature flags:
//!
//!   * `random` (default) enables [`Color::random`], [`Color::random_hsv`],
//!     and their `_with` variants, which depend on the `rand` crate.
//!   * `pyffi` enables Python bindings for [`Color`] and palette rendering
//!     through [PyO3](https://pyo3.rs/).
//!
//! The crate writes diagnostic messages through the [`log`](https://docs.rs/log)
//! facade. It never installs a logger itself.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod core;
pub mod error;
pub mod gpl;
mod object;
pub mod sink;
pub mod termco;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use gpl::GplPalette;
pub use object::Color;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Color>()?;
    m.add_function(wrap_pyfunction!(gpl::gpl_text, m)?)?;
    m.add("MAX_COLORS", gpl::MAX_COLORS)?;
    Ok(())
}
