//! RGB to CMYK formulas
//!
//! Each formula is an independent, naive (device-independent) conversion with
//! its own numeric method and its own rounding. They agree on most inputs and
//! drift apart by a percent where a channel lands close to a rounding
//! boundary; that drift is what the comparison verdict surfaces.

use crate::color::{CanonicalColor, Rgb8};
use serde::Serialize;

/// CMYK channels as whole percentages (0 to 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    /// Pure key black, the result for `#000000`
    pub const BLACK: Cmyk = Cmyk {
        c: 0,
        m: 0,
        y: 0,
        k: 100,
    };

    /// Create from already-validated percentages
    #[inline]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }

    /// Build from four percentages, each rounded to the nearest integer
    ///
    /// Returns `None` if any value is non-finite or rounds outside 0..=100.
    pub fn from_percentages(values: [f64; 4]) -> Option<Self> {
        Some(Self {
            c: percent(values[0])?,
            m: percent(values[1])?,
            y: percent(values[2])?,
            k: percent(values[3])?,
        })
    }

    /// Rescale device bytes (0 to 255) to whole percentages
    pub fn from_device_bytes(bytes: [u8; 4]) -> Self {
        let scale = |b: u8| (b as f64 / 255.0 * 100.0).round() as u8;
        Self {
            c: scale(bytes[0]),
            m: scale(bytes[1]),
            y: scale(bytes[2]),
            k: scale(bytes[3]),
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

/// Round a percentage, rejecting anything that is not a valid channel
#[inline]
fn percent(value: f64) -> Option<u8> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if (0.0..=100.0).contains(&rounded) {
        Some(rounded as u8)
    } else {
        None
    }
}

/// Output of a CMYK-producing adapter
///
/// `hex` and `rgb` echo the input color, not a round trip through CMYK.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConversionResult {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
    /// Lowercase `#rrggbb`
    pub hex: String,
    pub rgb: Rgb8,
}

impl ConversionResult {
    /// Pair CMYK channels with the input color they were computed from
    pub fn new(cmyk: Cmyk, input: Rgb8) -> Self {
        Self {
            c: cmyk.c,
            m: cmyk.m,
            y: cmyk.y,
            k: cmyk.k,
            hex: input.to_hex(),
            rgb: input,
        }
    }

    /// The CMYK tuple
    pub fn cmyk(&self) -> Cmyk {
        Cmyk::new(self.c, self.m, self.y, self.k)
    }
}

/// A pure RGB to CMYK formula
pub type FormulaFn = fn(Rgb8) -> Option<Cmyk>;

/// Run a formula against a canonical color
pub fn convert_with(formula: FormulaFn, color: &CanonicalColor) -> Option<ConversionResult> {
    let rgb = color.to_rgb();
    formula(rgb).map(|cmyk| ConversionResult::new(cmyk, rgb))
}

// ============================================================================
// Formulas
// ============================================================================

/// Textbook complement: `k = 1 - max(r, g, b)`, `c = (1 - r - k) / (1 - k)`
///
/// f64 arithmetic, one rounding step.
pub fn complement(rgb: Rgb8) -> Option<Cmyk> {
    let [r, g, b] = rgb.to_unit();
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Some(Cmyk::BLACK);
    }
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    Cmyk::from_percentages([c * 100.0, m * 100.0, y * 100.0, k * 100.0])
}

/// Complement the CMY channels first, then pull out `k = min(c, m, y)`
pub fn min_complement(rgb: Rgb8) -> Option<Cmyk> {
    let [r, g, b] = rgb.to_unit();
    let (c0, m0, y0) = (1.0 - r, 1.0 - g, 1.0 - b);
    let k = c0.min(m0).min(y0);
    if k >= 1.0 {
        return Some(Cmyk::BLACK);
    }
    let under = |v: f64| {
        let x = (v - k) / (1.0 - k);
        if x.is_nan() { 0.0 } else { x }
    };
    Cmyk::from_percentages([
        under(c0) * 100.0,
        under(m0) * 100.0,
        under(y0) * 100.0,
        k * 100.0,
    ])
}

/// Same formula as [`complement`], rounded twice
///
/// Percentages are rounded to hundredths first, then to a whole percent, so
/// values just under `x.5` can round up.
pub fn two_stage(rgb: Rgb8) -> Option<Cmyk> {
    let [r, g, b] = rgb.to_unit();
    let k = 1.0 - r.max(g).max(b);
    let [c, m, y] = if k >= 1.0 {
        [0.0; 3]
    } else {
        [
            (1.0 - r - k) / (1.0 - k),
            (1.0 - g - k) / (1.0 - k),
            (1.0 - b - k) / (1.0 - k),
        ]
    };
    let hundredths = |v: f64| (v * 100.0 * 100.0).round() / 100.0;
    Cmyk::from_percentages([hundredths(c), hundredths(m), hundredths(y), hundredths(k)])
}

/// Single-precision complement, scaling by `1 / (1 - k)`
pub fn reciprocal_f32(rgb: Rgb8) -> Option<Cmyk> {
    let r = rgb.r as f32 / 255.0;
    let g = rgb.g as f32 / 255.0;
    let b = rgb.b as f32 / 255.0;
    let k = 1.0 - r.max(g).max(b);
    let f = if k < 1.0 { 1.0 / (1.0 - k) } else { 0.0 };
    let c = (1.0 - r - k) * f;
    let m = (1.0 - g - k) * f;
    let y = (1.0 - b - k) * f;
    Cmyk::from_percentages([
        (c * 100.0) as f64,
        (m * 100.0) as f64,
        (y * 100.0) as f64,
        (k * 100.0) as f64,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMULAS: [(&str, FormulaFn); 4] = [
        ("complement", complement),
        ("min_complement", min_complement),
        ("two_stage", two_stage),
        ("reciprocal_f32", reciprocal_f32),
    ];

    #[test]
    fn test_reference_blue() {
        let rgb = Rgb8::new(52, 152, 219);
        for (name, formula) in FORMULAS {
            assert_eq!(formula(rgb), Some(Cmyk::new(76, 31, 0, 14)), "{name}");
        }
    }

    #[test]
    fn test_black_and_white() {
        for (name, formula) in FORMULAS {
            assert_eq!(formula(Rgb8::new(0, 0, 0)), Some(Cmyk::BLACK), "{name}");
            assert_eq!(
                formula(Rgb8::new(255, 255, 255)),
                Some(Cmyk::new(0, 0, 0, 0)),
                "{name}"
            );
        }
    }

    #[test]
    fn test_primaries() {
        let cases = [
            (Rgb8::new(255, 0, 0), Cmyk::new(0, 100, 100, 0)),
            (Rgb8::new(0, 255, 0), Cmyk::new(100, 0, 100, 0)),
            (Rgb8::new(0, 0, 255), Cmyk::new(100, 100, 0, 0)),
            (Rgb8::new(0, 255, 255), Cmyk::new(100, 0, 0, 0)),
        ];
        for (rgb, expected) in cases {
            for (name, formula) in FORMULAS {
                assert_eq!(formula(rgb), Some(expected), "{name} {rgb:?}");
            }
        }
    }

    #[test]
    fn test_gray_has_no_chroma() {
        for (name, formula) in FORMULAS {
            let cmyk = formula(Rgb8::new(128, 128, 128)).unwrap();
            assert_eq!((cmyk.c, cmyk.m, cmyk.y), (0, 0, 0), "{name}");
            assert_eq!(cmyk.k, 50, "{name}");
        }
    }

    #[test]
    fn test_two_stage_rounds_half_up() {
        // magenta is (40 - 15) / 40 = 62.5% exactly on paper, a hair under in f64
        let rgb = Rgb8::new(0, 15, 40);
        assert_eq!(complement(rgb), Some(Cmyk::new(100, 62, 0, 84)));
        assert_eq!(two_stage(rgb), Some(Cmyk::new(100, 63, 0, 84)));
    }

    #[test]
    fn test_percent_rejects_out_of_range() {
        assert_eq!(percent(f64::NAN), None);
        assert_eq!(percent(f64::INFINITY), None);
        assert_eq!(percent(100.4), Some(100));
        assert_eq!(percent(100.6), None);
        assert_eq!(percent(-0.4), Some(0));
        assert_eq!(percent(-0.6), None);
    }

    #[test]
    fn test_device_bytes_rescale() {
        assert_eq!(Cmyk::from_device_bytes([0, 0, 0, 0]), Cmyk::new(0, 0, 0, 0));
        assert_eq!(
            Cmyk::from_device_bytes([255, 128, 64, 1]),
            Cmyk::new(100, 50, 25, 0)
        );
    }

    #[test]
    fn test_result_echoes_input() {
        let color = CanonicalColor::Hex(crate::color::HexColor::new("#3498DB").unwrap());
        let result = convert_with(complement, &color).unwrap();
        assert_eq!(result.hex, "#3498db");
        assert_eq!(result.rgb, Rgb8::new(52, 152, 219));
        assert_eq!(result.cmyk(), Cmyk::new(76, 31, 0, 14));
    }
}
