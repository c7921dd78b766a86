//! Canonical color values
//!
//! Every converter consumes a [`CanonicalColor`]: either the hex text the user
//! typed (normalized to carry a leading `#`) or a decimal RGB triple. Exactly
//! one form is present; the enum makes the other states unrepresentable.

use serde::Serialize;
use std::fmt;

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create a new RGB triple
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` encoding
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Normalized channels (0.0 to 1.0)
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// Hex color text, `#` followed by 3 or 6 hex digits
///
/// The digits keep the case they were typed in. The short form is stored
/// as-is; [`HexColor::to_rgb`] expands it the CSS way (`#abc` is `#aabbcc`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Validate hex text, with or without the leading `#`
    pub fn new(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let valid_len = digits.len() == 6 || digits.len() == 3;
        if !valid_len || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{digits}")))
    }

    /// The text including the leading `#`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits without the leading `#`
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// Whether this is the 3-digit shorthand
    pub fn is_short(&self) -> bool {
        self.digits().len() == 3
    }

    /// Decode to RGB, expanding the 3-digit shorthand
    pub fn to_rgb(&self) -> Rgb8 {
        let d = self.digits().as_bytes();
        if self.is_short() {
            let expand = |b: u8| {
                let n = hex_value(b);
                n << 4 | n
            };
            Rgb8::new(expand(d[0]), expand(d[1]), expand(d[2]))
        } else {
            let pair = |i: usize| hex_value(d[i]) << 4 | hex_value(d[i + 1]);
            Rgb8::new(pair(0), pair(2), pair(4))
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Only called on bytes already checked by `is_ascii_hexdigit`.
#[inline]
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// The normalized color all converters consume
///
/// Created fresh for every input change and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalColor {
    /// Hex text, `#` prefixed
    Hex(HexColor),
    /// Decimal RGB triple
    Rgb(Rgb8),
}

impl CanonicalColor {
    /// The RGB triple every adapter re-derives from this color
    pub fn to_rgb(&self) -> Rgb8 {
        match self {
            CanonicalColor::Hex(hex) => hex.to_rgb(),
            CanonicalColor::Rgb(rgb) => *rgb,
        }
    }

    /// CSS syntax for this color: `#hex` or `rgb(r, g, b)`
    pub fn to_css(&self) -> String {
        match self {
            CanonicalColor::Hex(hex) => hex.as_str().to_owned(),
            CanonicalColor::Rgb(rgb) => format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        }
    }

    /// The hex form, if this color was entered as hex
    pub fn hex(&self) -> Option<&HexColor> {
        match self {
            CanonicalColor::Hex(hex) => Some(hex),
            CanonicalColor::Rgb(_) => None,
        }
    }

    /// The RGB form, if this color was entered as a triple
    pub fn rgb(&self) -> Option<Rgb8> {
        match self {
            CanonicalColor::Hex(_) => None,
            CanonicalColor::Rgb(rgb) => Some(*rgb),
        }
    }
}

impl From<Rgb8> for CanonicalColor {
    fn from(rgb: Rgb8) -> Self {
        CanonicalColor::Rgb(rgb)
    }
}

impl From<HexColor> for CanonicalColor {
    fn from(hex: HexColor) -> Self {
        CanonicalColor::Hex(hex)
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_adds_prefix() {
        let hex = HexColor::new("3498db").unwrap();
        assert_eq!(hex.as_str(), "#3498db");
        assert_eq!(HexColor::new("#3498DB").unwrap().as_str(), "#3498DB");
    }

    #[test]
    fn test_hex_rejects_bad_lengths() {
        assert!(HexColor::new("#12345").is_none());
        assert!(HexColor::new("#1234567").is_none());
        assert!(HexColor::new("").is_none());
        assert!(HexColor::new("#ggg").is_none());
        assert!(HexColor::new("##abc").is_none());
    }

    #[test]
    fn test_hex_decode() {
        let hex = HexColor::new("#3498DB").unwrap();
        assert_eq!(hex.to_rgb(), Rgb8::new(52, 152, 219));
    }

    #[test]
    fn test_short_hex_expands() {
        let hex = HexColor::new("#abc").unwrap();
        assert!(hex.is_short());
        assert_eq!(hex.to_rgb(), Rgb8::new(0xaa, 0xbb, 0xcc));
        // stored unexpanded
        assert_eq!(hex.as_str(), "#abc");
    }

    #[test]
    fn test_rgb_to_hex_lowercase() {
        assert_eq!(Rgb8::new(52, 152, 219).to_hex(), "#3498db");
        assert_eq!(Rgb8::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb8::new(255, 255, 255).to_hex(), "#ffffff");
    }

    #[test]
    fn test_css_forms() {
        let hex = CanonicalColor::Hex(HexColor::new("#3498db").unwrap());
        assert_eq!(hex.to_css(), "#3498db");
        let rgb = CanonicalColor::Rgb(Rgb8::new(52, 152, 219));
        assert_eq!(rgb.to_css(), "rgb(52, 152, 219)");
        assert_eq!(hex.to_rgb(), rgb.to_rgb());
    }

    #[test]
    fn test_serialize_exactly_one_form() {
        let hex = CanonicalColor::Hex(HexColor::new("#3498db").unwrap());
        assert_eq!(
            serde_json::to_string(&hex).unwrap(),
            r##"{"hex":"#3498db"}"##
        );
        let rgb = CanonicalColor::Rgb(Rgb8::new(1, 2, 3));
        assert_eq!(
            serde_json::to_string(&rgb).unwrap(),
            r#"{"rgb":{"r":1,"g":2,"b":3}}"#
        );
    }
}
