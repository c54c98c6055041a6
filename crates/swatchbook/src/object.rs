use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    format_hex, hsv_to_rgb, normalize_hsv, pack_24bit, parse_hex, resolve_hex, rgb_to_hsv,
    to_web_safe, unpack_24bit, wrap_channel, MAX_HEX,
};
use crate::error::ColorFormatError;
use crate::termco::{Hsv, Rgb};
use crate::Float;

/// A color in RGB, HSV, and hexadecimal form.
///
/// Every color object holds all three encodings at once and keeps them
/// consistent: Each constructor and each setter treats the encoding it writes
/// as authoritative and then immediately recomputes the other two. There is no
/// lazy caching, so no accessor ever observes a stale value, and every setter
/// call pays for a full conversion.
///
/// # Normalization
///
/// Out-of-range inputs are normalized, never rejected:
///
///   * RGB coordinates are integers wrapped into a byte by masking their low
///     eight bits, just like bit-packing does. Hence 256 becomes 0 and -1
///     becomes 255.
///   * The hue is clamped to `0..=360`, saturation and value to `0..=1`.
///     Not-a-number becomes 0.
///   * Hexadecimal integers are masked to 24 bits. Hexadecimal strings are
///     resolved as described for [`Color::from_hex_str`].
///
/// After an HSV write, the color keeps the clamped HSV coordinates as given,
/// while RGB and hexadecimal are derived from them by rounding. After any other
/// write, the HSV coordinates are derived from RGB. Achromatic colors have hue
/// and saturation zero.
///
/// # Equality
///
/// Two colors are equal if their 24-bit values are equal. The floating point
/// HSV coordinates play no part in equality testing or hashing.
///
/// ```
/// # use swatchbook::Color;
/// let red = Color::from_hsv(0.0, 1.0, 1.0);
/// assert_eq!(red, Color::from_hsv(360.0, 1.0, 1.0));
/// assert_eq!(red, Color::from_rgb(255, 0, 0));
/// assert_eq!(red, Color::from_hex_str("#f00"));
/// assert_eq!(red.to_rgb_string(), "rgb(255,0,0)");
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, module = "swatchbook.color"))]
#[derive(Copy, Clone, Debug)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    hue: Float,
    sat: Float,
    val: Float,
    hex: u32,
}

impl Color {
    /// An all-black color with every encoding filled in.
    const BLACK: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
        hue: 0.0,
        sat: 0.0,
        val: 0.0,
        hex: 0,
    };

    // ----------------------------------------------------------------------------------------------------------------

    /// Instantiate a new color from RGB coordinates.
    ///
    /// Each coordinate is wrapped into a byte by masking its low eight bits.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// let color = Color::from_rgb(256, 128, -1);
    /// assert_eq!((color.red(), color.green(), color.blue()), (0, 128, 255));
    /// assert_eq!(color.hex(), 0x0080ff);
    /// ```
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Self {
        let mut color = Self::BLACK;
        color.set_rgb(r, g, b);
        color
    }

    /// Instantiate a new color from HSV coordinates.
    ///
    /// The hue is clamped to `0..=360` and saturation and value to `0..=1`,
    /// with not-a-number becoming 0.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// let color = Color::from_hsv(-10.0, 2.0, -1.0);
    /// assert_eq!((color.hue(), color.sat(), color.val()), (0.0, 1.0, 0.0));
    /// assert_eq!(color.hex(), 0);
    /// ```
    pub fn from_hsv(h: Float, s: Float, v: Float) -> Self {
        let mut color = Self::BLACK;
        color.set_hsv(h, s, v);
        color
    }

    /// Instantiate a new color from a 24-bit integer. Higher bits are ignored.
    pub fn from_hex(hex: u32) -> Self {
        let mut color = Self::BLACK;
        color.set_hex(hex);
        color
    }

    /// Instantiate a new color from a string in hexadecimal notation.
    ///
    /// This constructor never fails. It ignores surrounding white space and at
    /// most one leading `#`, accepts upper- and lowercase digits, and expands
    /// three-digit shorthands by doubling each digit. It truncates longer
    /// strings to their first six digits. Other malformed strings, i.e., with
    /// fewer than six (but not three) digits or with characters other than
    /// hexadecimal digits, resolve to black. Use [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) for strict parsing.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::from_hex_str("f0a"), Color::from_hex_str("#FF00AA"));
    /// assert_eq!(Color::from_hex_str("12").hex(), 0x000000);
    /// assert_eq!(Color::from_hex_str("1234567").hex(), 0x123456);
    /// ```
    pub fn from_hex_str(s: &str) -> Self {
        let mut color = Self::BLACK;
        color.set_hex_str(s);
        color
    }

    /// Instantiate a random color.
    ///
    /// The 24-bit value is drawn uniformly from `0..=0xffffff` using the
    /// thread-local random number generator.
    #[cfg(feature = "random")]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Instantiate a random color with the given random number generator.
    #[cfg(feature = "random")]
    pub fn random_with<R: rand::Rng>(rng: &mut R) -> Self {
        Self::from_hex(rng.random_range(0..=MAX_HEX))
    }

    /// Instantiate a random color by drawing its HSV coordinates.
    ///
    /// The hue is a whole number of degrees in `0..=360`, and saturation and
    /// value are whole percentages in `0..=1`. Unlike [`Color::random`], the
    /// color keeps the drawn HSV coordinates as given.
    #[cfg(feature = "random")]
    pub fn random_hsv() -> Self {
        Self::random_hsv_with(&mut rand::rng())
    }

    /// Instantiate a random color by drawing its HSV coordinates with the
    /// given random number generator.
    #[cfg(feature = "random")]
    pub fn random_hsv_with<R: rand::Rng>(rng: &mut R) -> Self {
        let hue = Float::from(rng.random_range(0..=360_u16));
        let sat = Float::from(rng.random_range(0..=100_u8)) / 100.0;
        let val = Float::from(rng.random_range(0..=100_u8)) / 100.0;
        Self::from_hsv(hue, sat, val)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the red coordinate.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Access the green coordinate.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Access the blue coordinate.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Access the hue in degrees `0..=360`.
    #[inline]
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Access the saturation in `0..=1`.
    #[inline]
    pub const fn sat(&self) -> Float {
        self.sat
    }

    /// Access the value in `0..=1`.
    #[inline]
    pub const fn val(&self) -> Float {
        self.val
    }

    /// Access the 24-bit value with red in the most significant byte.
    #[inline]
    pub const fn hex(&self) -> u32 {
        self.hex
    }

    // ----------------------------------------------------------------------------------------------------------------
    // Every setter recomputes the other two encodings before returning.

    /// Update the red coordinate, wrapping it into a byte.
    pub fn set_red(&mut self, r: i32) {
        self.red = wrap_channel(r);
        self.on_rgb_change();
    }

    /// Update the green coordinate, wrapping it into a byte.
    pub fn set_green(&mut self, g: i32) {
        self.green = wrap_channel(g);
        self.on_rgb_change();
    }

    /// Update the blue coordinate, wrapping it into a byte.
    pub fn set_blue(&mut self, b: i32) {
        self.blue = wrap_channel(b);
        self.on_rgb_change();
    }

    /// Update all three RGB coordinates, wrapping each into a byte.
    pub fn set_rgb(&mut self, r: i32, g: i32, b: i32) {
        self.red = wrap_channel(r);
        self.green = wrap_channel(g);
        self.blue = wrap_channel(b);
        self.on_rgb_change();
    }

    /// Update the hue, clamping it to `0..=360`.
    pub fn set_hue(&mut self, h: Float) {
        self.set_hsv(h, self.sat, self.val);
    }

    /// Update the saturation, clamping it to `0..=1`.
    pub fn set_sat(&mut self, s: Float) {
        self.set_hsv(self.hue, s, self.val);
    }

    /// Update the value, clamping it to `0..=1`.
    pub fn set_val(&mut self, v: Float) {
        self.set_hsv(self.hue, self.sat, v);
    }

    /// Update all three HSV coordinates, clamping each.
    pub fn set_hsv(&mut self, h: Float, s: Float, v: Float) {
        [self.hue, self.sat, self.val] = normalize_hsv(h, s, v);
        self.on_hsv_change();
    }

    /// Update the 24-bit value. Higher bits are ignored.
    pub fn set_hex(&mut self, hex: u32) {
        self.hex = hex & MAX_HEX;
        self.on_hex_change();
    }

    /// Update the 24-bit value from a string in hexadecimal notation.
    ///
    /// This method resolves malformed strings just like
    /// [`Color::from_hex_str`].
    pub fn set_hex_str(&mut self, s: &str) {
        self.hex = resolve_hex(s);
        self.on_hex_change();
    }

    fn on_rgb_change(&mut self) {
        [self.hue, self.sat, self.val] = rgb_to_hsv([self.red, self.green, self.blue]);
        self.hex = pack_24bit(self.red, self.green, self.blue);
    }

    fn on_hsv_change(&mut self) {
        [self.red, self.green, self.blue] = hsv_to_rgb([self.hue, self.sat, self.val]);
        self.hex = pack_24bit(self.red, self.green, self.blue);
    }

    fn on_hex_change(&mut self) {
        [self.red, self.green, self.blue] = unpack_24bit(self.hex);
        [self.hue, self.sat, self.val] = rgb_to_hsv([self.red, self.green, self.blue]);
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Invert this color.
    ///
    /// This method complements the 24 bits of the hexadecimal value and then
    /// recomputes RGB and HSV. Inverting twice restores the original color.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// let mut color = Color::from_hex(0x123456);
    /// color.invert();
    /// assert_eq!(color.hex(), 0xedcba9);
    /// assert_eq!(color.red(), 255 - 0x12);
    /// ```
    pub fn invert(&mut self) {
        self.hex = !self.hex & MAX_HEX;
        self.on_hex_change();
    }

    /// Round this color to the nearest web-safe color.
    ///
    /// This method rounds each RGB coordinate to the nearest multiple of 51,
    /// i.e., one of the six levels 0, 51, 102, 153, 204, and 255, and then
    /// recomputes HSV and hexadecimal.
    pub fn to_web_safe(&mut self) {
        self.red = to_web_safe(self.red);
        self.green = to_web_safe(self.green);
        self.blue = to_web_safe(self.blue);
        self.on_rgb_change();
    }

    /// Determine whether this color is web-safe.
    pub fn is_web_safe(&self) -> bool {
        self.red % 51 == 0 && self.green % 51 == 0 && self.blue % 51 == 0
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the RGB coordinates.
    pub const fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    /// Get the HSV coordinates.
    pub const fn to_hsv(&self) -> Hsv {
        Hsv::new(self.hue, self.sat, self.val)
    }

    /// Format this color's RGB coordinates as `rgb(R,G,B)`.
    pub fn to_rgb_string(&self) -> String {
        self.to_rgb().to_string()
    }

    /// Format this color's HSV coordinates as `hsv(H,S,V)`.
    pub fn to_hsv_string(&self) -> String {
        self.to_hsv().to_string()
    }

    /// Format this color's 24-bit value as six lowercase hexadecimal digits,
    /// prefixed by a `#` if requested.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// let navy = Color::from_rgb(0, 0, 128);
    /// assert_eq!(navy.to_hex_string(true), "#000080");
    /// assert_eq!(navy.to_hex_string(false), "000080");
    /// ```
    pub fn to_hex_string(&self, with_hash: bool) -> String {
        format_hex(self.hex, with_hash)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Color {
    /// Instantiate a new color from a string in hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub fn py_new(s: &str) -> Self {
        Self::from_hex_str(s)
    }

    /// Instantiate a new color from RGB coordinates. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_rgb")]
    pub fn py_from_rgb(r: i32, g: i32, b: i32) -> Self {
        Self::from_rgb(r, g, b)
    }

    /// Instantiate a new color from HSV coordinates. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_hsv")]
    pub fn py_from_hsv(h: Float, s: Float, v: Float) -> Self {
        Self::from_hsv(h, s, v)
    }

    /// Instantiate a new color from a 24-bit integer. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_hex")]
    pub fn py_from_hex(hex: u32) -> Self {
        Self::from_hex(hex)
    }

    /// Strictly parse a color in hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(s)
    }

    /// Get the RGB coordinates. <i class=python-only>Python only!</i>
    #[getter]
    pub fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Get the HSV coordinates. <i class=python-only>Python only!</i>
    #[getter]
    pub fn hsv(&self) -> [Float; 3] {
        [self.hue, self.sat, self.val]
    }

    /// Get the 24-bit value. <i class=python-only>Python only!</i>
    #[getter(hex)]
    pub fn py_hex(&self) -> u32 {
        self.hex
    }

    /// Update the 24-bit value. <i class=python-only>Python only!</i>
    #[setter(hex)]
    pub fn py_set_hex(&mut self, hex: u32) {
        self.set_hex(hex);
    }

    /// Invert this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "invert")]
    pub fn py_invert(&mut self) {
        self.invert();
    }

    /// Round this color to the nearest web-safe color. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "to_web_safe")]
    pub fn py_to_web_safe(&mut self) {
        self.to_web_safe();
    }

    /// Format this color in hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }

    /// Get a debug representation for this color. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Color({})", self)
    }
}

impl Default for Color {
    /// Create black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Strictly parse a color in hexadecimal notation.
    ///
    /// Unlike [`Color::from_hex_str`], this method only accepts exactly three
    /// or six hexadecimal digits, optionally prefixed by a `#`.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// # use swatchbook::error::ColorFormatError;
    /// let orange: Color = "#ff8700".parse()?;
    /// assert_eq!(orange.hex(), 0xff8700);
    /// assert_eq!("#1234567".parse::<Color>(), Err(ColorFormatError::TooManyDigits));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self::from_hex)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.hex == other.hex
    }
}

impl Eq for Color {}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.hex.hash(state);
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::from_hex(value.to_hex())
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Self::from_hsv(value.hue(), value.sat(), value.val())
    }
}

impl From<&Color> for Rgb {
    fn from(value: &Color) -> Self {
        value.to_rgb()
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        value.to_rgb()
    }
}

impl From<&Color> for Hsv {
    fn from(value: &Color) -> Self {
        value.to_hsv()
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        [value.red, value.green, value.blue]
    }
}

impl std::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation, e.g., `#ff8700`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("#{:06x}", self.hex))
    }
}

// ====================================================================================================================
