//! Plain color representations and the capability shared by all colors.
//!
//! This module offers [`Rgb`] and [`Hsv`] as simple, immutable value types for
//! the two coordinate-based encodings handled by this crate. Unlike
//! [`Color`](crate::Color), they do not keep other encodings in sync and do not
//! normalize their coordinates.
//!
//! [`ColorLike`] is the capability of being converted to [`Rgb`]. It is what
//! [`GplPalette`](crate::GplPalette) requires of its entries. [`Named`] adapts
//! any color-like value to carry an explicit display name.
use crate::core::{format_hex, format_hsv, hsv_to_rgb, normalize_hsv, pack_24bit, to_eq_hsv};
use crate::{Color, Float};

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A 24-bit RGB color.
///
/// # Examples
///
/// ```
/// # use swatchbook::termco::Rgb;
/// let orange = Rgb::new(255, 135, 0);
/// assert_eq!(orange.as_ref(), &[255_u8, 135, 0]);
/// assert_eq!(orange[1], 135);
/// assert_eq!(orange.to_hex(), 0xff8700);
/// assert_eq!(orange.to_string(), "rgb(255,135,0)");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Access the red coordinate.
    pub const fn red(&self) -> u8 {
        self.0[0]
    }

    /// Access the green coordinate.
    pub const fn green(&self) -> u8 {
        self.0[1]
    }

    /// Access the blue coordinate.
    pub const fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Pack this color into a 24-bit integer with red in the most significant
    /// byte.
    pub const fn to_hex(&self) -> u32 {
        pack_24bit(self.0[0], self.0[1], self.0[2])
    }

    /// Format this color in hashed hexadecimal notation, e.g., `#ff8700`.
    pub fn to_hex_string(&self) -> String {
        format_hex(self.to_hex(), true)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<Hsv> for Rgb {
    /// Convert the HSV color to RGB after clamping its coordinates.
    fn from(value: Hsv) -> Self {
        let [h, s, v] = value.0;
        Self(hsv_to_rgb(normalize_hsv(h, s, v)))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("rgb({},{},{})", r, g, b))
    }
}

// ====================================================================================================================
// Hsv
// ====================================================================================================================

/// An HSV color.
///
/// The hue is measured in degrees, whereas saturation and value have unit
/// range. An `Hsv` stores its coordinates exactly as given; they are only
/// clamped when converting to [`Rgb`] or [`Color`].
///
/// Equality and hashing reduce resolution of the coordinates and remove full
/// rotations from the hue, so that 0° and 360° are the same hue:
///
/// ```
/// # use swatchbook::termco::Hsv;
/// assert_eq!(Hsv::new(0.0, 1.0, 1.0), Hsv::new(360.0, 1.0, 1.0));
/// assert_eq!(Hsv::new(120.0, 1.0, 0.5).to_string(), "hsv(120,1,0.5)");
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Hsv([Float; 3]);

impl Hsv {
    /// Create a new HSV color from its coordinates.
    pub const fn new(hue: Float, sat: Float, val: Float) -> Self {
        Self([hue, sat, val])
    }

    /// Access the hue.
    pub const fn hue(&self) -> Float {
        self.0[0]
    }

    /// Access the saturation.
    pub const fn sat(&self) -> Float {
        self.0[1]
    }

    /// Access the value.
    pub const fn val(&self) -> Float {
        self.0[2]
    }
}

impl AsRef<[Float; 3]> for Hsv {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl From<[Float; 3]> for Hsv {
    fn from(value: [Float; 3]) -> Self {
        Self(value)
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        to_eq_hsv(&self.0) == to_eq_hsv(&other.0)
    }
}

impl Eq for Hsv {}

impl std::hash::Hash for Hsv {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_hsv(&self.0).hash(state);
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hsv(&self.0, f)
    }
}

// ====================================================================================================================
// ColorLike
// ====================================================================================================================

/// The capability of being rendered as an RGB color.
///
/// [`GplPalette`](crate::GplPalette) accepts any color-like entries. Besides
/// this crate's own color types, the trait is implemented for [`Named`] to
/// attach an explicit display name, for `Option` to represent placeholders
/// without a color, and for references and boxes, so that palettes can mix
/// different kinds of entries as `Box<dyn ColorLike>`.
pub trait ColorLike {
    /// Convert this value to an RGB color.
    ///
    /// This method returns `None` if the value has no color, which makes it an
    /// invalid palette entry.
    fn to_rgb(&self) -> Option<Rgb>;

    /// Get this value's display name, if it has one.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl ColorLike for Rgb {
    fn to_rgb(&self) -> Option<Rgb> {
        Some(*self)
    }
}

impl ColorLike for Hsv {
    fn to_rgb(&self) -> Option<Rgb> {
        Some(Rgb::from(*self))
    }
}

impl ColorLike for Color {
    fn to_rgb(&self) -> Option<Rgb> {
        Some(Color::to_rgb(self))
    }
}

impl<C: ColorLike> ColorLike for Option<C> {
    fn to_rgb(&self) -> Option<Rgb> {
        self.as_ref().and_then(ColorLike::to_rgb)
    }

    fn label(&self) -> Option<&str> {
        self.as_ref().and_then(ColorLike::label)
    }
}

impl<C: ColorLike + ?Sized> ColorLike for &C {
    fn to_rgb(&self) -> Option<Rgb> {
        (**self).to_rgb()
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

impl<C: ColorLike + ?Sized> ColorLike for Box<C> {
    fn to_rgb(&self) -> Option<Rgb> {
        (**self).to_rgb()
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color-like value with an explicit display name.
///
/// ```
/// # use swatchbook::termco::{ColorLike, Named, Rgb};
/// let brick = Named::new("Fire brick", Rgb::new(177, 31, 36));
/// assert_eq!(brick.label(), Some("Fire brick"));
/// assert_eq!(brick.to_rgb(), Some(Rgb::new(177, 31, 36)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Named<C> {
    name: String,
    color: C,
}

impl<C> Named<C> {
    /// Attach the name to the color.
    pub fn new<S: Into<String>>(name: S, color: C) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Access the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the color.
    pub const fn color(&self) -> &C {
        &self.color
    }
}

impl<C: ColorLike> ColorLike for Named<C> {
    fn to_rgb(&self) -> Option<Rgb> {
        self.color.to_rgb()
    }

    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorLike, Hsv, Named, Rgb};
    use crate::Color;

    #[test]
    fn test_rgb() {
        let teal = Rgb::new(0, 128, 128);
        assert_eq!(teal.red(), 0);
        assert_eq!(teal.green(), 128);
        assert_eq!(teal.blue(), 128);
        assert_eq!(teal.to_hex(), 0x008080);
        assert_eq!(teal.to_hex_string(), "#008080");
        assert_eq!(teal.to_string(), "rgb(0,128,128)");
        assert_eq!(<[u8; 3]>::from(teal), [0, 128, 128]);
        assert_eq!(Rgb::from([0, 128, 128]), teal);
    }

    #[test]
    fn test_hsv() {
        assert_eq!(Rgb::from(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from(Hsv::new(360.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from(Hsv::new(-10.0, 2.0, -1.0)), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::from(Hsv::new(720.0, 1.0, 1.0)), Rgb::new(255, 0, 0));

        assert_eq!(Hsv::new(-60.0, 1.0, 1.0), Hsv::new(300.0, 1.0, 1.0));
        assert_ne!(Hsv::new(60.0, 1.0, 1.0), Hsv::new(300.0, 1.0, 1.0));
        assert_eq!(Hsv::new(210.0, 0.5, 0.8).to_string(), "hsv(210,0.5,0.8)");
    }

    #[test]
    fn test_color_like() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(red.to_rgb(), Some(red));
        assert_eq!(red.label(), None);
        assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_rgb(), Some(red));
        assert_eq!(ColorLike::to_rgb(&Color::from_hex(0xff0000)), Some(red));

        let missing: Option<Rgb> = None;
        assert_eq!(missing.to_rgb(), None);
        assert_eq!(Some(red).to_rgb(), Some(red));

        let named = Named::new("Red", red);
        assert_eq!(named.name(), "Red");
        assert_eq!(named.color(), &red);
        assert_eq!(Some(&named).label(), Some("Red"));

        let mixed: Vec<Box<dyn ColorLike>> = vec![
            Box::new(red),
            Box::new(Hsv::new(120.0, 1.0, 1.0)),
            Box::new(named.clone()),
            Box::new(None::<Color>),
        ];
        let rgbs: Vec<_> = mixed.iter().map(ColorLike::to_rgb).collect();
        assert_eq!(
            rgbs,
            vec![Some(red), Some(Rgb::new(0, 255, 0)), Some(red), None]
        );
        assert_eq!(mixed[2].label(), Some("Red"));
    }
}
