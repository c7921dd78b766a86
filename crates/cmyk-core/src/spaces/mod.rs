//! Extended color-space reports
//!
//! A fixed table of ten color spaces. Each entry converts the CSS form of a
//! canonical color and formats the three channels for display. Conversion
//! failures are local to one space and render as the `-` placeholder.

pub mod cie;
pub mod css;

use crate::color::CanonicalColor;
use palette::{FromColor, Hsl, Hsv, Hwb, LinSrgb, Oklab, Oklch, Srgb, Xyz};
use serde::Serialize;

/// Formatted channels and the CSS notation, if the space has one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSpaceResult {
    pub values: [String; 3],
    /// Empty when the space has no CSS form or the conversion failed
    pub css: String,
}

impl ColorSpaceResult {
    /// Shown when a color could not be converted
    pub fn placeholder() -> Self {
        Self {
            values: ["-".into(), "-".into(), "-".into()],
            css: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.values.iter().all(|v| v == "-") && self.css.is_empty()
    }
}

/// One space's entry in an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSpaceReport {
    pub id: &'static str,
    pub name: &'static str,
    pub labels: [&'static str; 3],
    #[serde(flatten)]
    pub result: ColorSpaceResult,
}

/// How channel values are rendered
#[derive(Debug, Clone, Copy)]
enum Notation {
    /// Hue degrees plus two fractions shown as percents (HSL family)
    HuePercent { css: Option<&'static str> },
    /// Lightness percent plus two axes
    Lab { decimals: usize, css: &'static str },
    /// Lightness, chroma, hue degrees
    Lch {
        decimals: usize,
        lightness_percent: bool,
        css: &'static str,
    },
    /// Three plain decimals; `css` is the text before the values
    Decimal { decimals: usize, css: &'static str },
}

/// A color space adapter
pub struct ColorSpace {
    pub id: &'static str,
    pub name: &'static str,
    pub labels: [&'static str; 3],
    compute: fn(Srgb<f64>) -> [f64; 3],
    notation: Notation,
}

impl ColorSpace {
    /// Convert a CSS color string; `None` if it does not parse or the
    /// result is not finite
    pub fn convert(&self, css: &str) -> Option<[f64; 3]> {
        let rgb: Srgb<f64> = css::parse(css)?.into_format();
        let values = (self.compute)(rgb);
        values.iter().all(|v| v.is_finite()).then_some(values)
    }

    /// Render converted channels, or the placeholder for `None`
    pub fn format(&self, values: Option<[f64; 3]>) -> ColorSpaceResult {
        let Some(v) = values.filter(|v| v.iter().all(|x| x.is_finite())) else {
            return ColorSpaceResult::placeholder();
        };
        match self.notation {
            Notation::HuePercent { css } => {
                let h = fixed(v[0], 1);
                let p1 = fixed(v[1] * 100.0, 1);
                let p2 = fixed(v[2] * 100.0, 1);
                ColorSpaceResult {
                    css: css
                        .map(|name| format!("{name}({h} {p1}% {p2}%)"))
                        .unwrap_or_default(),
                    values: [format!("{h}°"), format!("{p1}%"), format!("{p2}%")],
                }
            }
            Notation::Lab { decimals, css } => {
                let [l, a, b] = v.map(|x| fixed(x, decimals));
                ColorSpaceResult {
                    css: format!("{css}({l}% {a} {b})"),
                    values: [l, a, b],
                }
            }
            Notation::Lch {
                decimals,
                lightness_percent,
                css,
            } => {
                let l = fixed(v[0], decimals);
                let c = fixed(v[1], decimals);
                let h = fixed(v[2], 1);
                let unit = if lightness_percent { "%" } else { "" };
                ColorSpaceResult {
                    css: format!("{css}({l}{unit} {c} {h})"),
                    values: [l, c, format!("{h}°")],
                }
            }
            Notation::Decimal { decimals, css } => {
                let values = v.map(|x| fixed(x, decimals));
                ColorSpaceResult {
                    css: format!("{css}{})", values.join(" ")),
                    values,
                }
            }
        }
    }

    /// Convert and format in one step
    pub fn report(&self, css: &str) -> ColorSpaceReport {
        ColorSpaceReport {
            id: self.id,
            name: self.name,
            labels: self.labels,
            result: self.format(self.convert(css)),
        }
    }
}

impl std::fmt::Debug for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSpace")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Fixed decimals without a sign on zero
fn fixed(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

fn hsl(rgb: Srgb<f64>) -> [f64; 3] {
    let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::from_color(rgb);
    [hsl.hue.into_positive_degrees(), hsl.saturation, hsl.lightness]
}

fn hsv(rgb: Srgb<f64>) -> [f64; 3] {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::from_color(rgb);
    [hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value]
}

fn hwb(rgb: Srgb<f64>) -> [f64; 3] {
    let hwb: Hwb<palette::encoding::Srgb, f64> = Hwb::from_color(rgb);
    [hwb.hue.into_positive_degrees(), hwb.whiteness, hwb.blackness]
}

fn oklab(rgb: Srgb<f64>) -> [f64; 3] {
    let lab: Oklab<f64> = Oklab::from_color(rgb);
    [lab.l, lab.a, lab.b]
}

fn oklch(rgb: Srgb<f64>) -> [f64; 3] {
    let lch: Oklch<f64> = Oklch::from_color(rgb);
    let hue = if lch.chroma < cie::ACHROMATIC_CHROMA {
        0.0
    } else {
        lch.hue.into_positive_degrees()
    };
    [lch.l, lch.chroma, hue]
}

fn xyz_d65(rgb: Srgb<f64>) -> [f64; 3] {
    let xyz: Xyz<palette::white_point::D65, f64> = Xyz::from_color(rgb);
    [xyz.x, xyz.y, xyz.z]
}

fn linear_srgb(rgb: Srgb<f64>) -> [f64; 3] {
    let linear: LinSrgb<f64> = rgb.into_linear();
    [linear.red, linear.green, linear.blue]
}

/// The ten spaces, in display order
pub static COLOR_SPACES: [ColorSpace; 10] = [
    ColorSpace {
        id: "hsl",
        name: "HSL",
        labels: ["H", "S", "L"],
        compute: hsl,
        notation: Notation::HuePercent { css: Some("hsl") },
    },
    ColorSpace {
        id: "hsv",
        name: "HSV",
        labels: ["H", "S", "V"],
        compute: hsv,
        notation: Notation::HuePercent { css: None },
    },
    ColorSpace {
        id: "hwb",
        name: "HWB",
        labels: ["H", "W", "B"],
        compute: hwb,
        notation: Notation::HuePercent { css: Some("hwb") },
    },
    ColorSpace {
        id: "lab",
        name: "CIE Lab D50",
        labels: ["L*", "a*", "b*"],
        compute: cie::lab_d50,
        notation: Notation::Lab {
            decimals: 2,
            css: "lab",
        },
    },
    ColorSpace {
        id: "lch",
        name: "CIE LCH D50",
        labels: ["L*", "C*", "h"],
        compute: cie::lch_d50,
        notation: Notation::Lch {
            decimals: 2,
            lightness_percent: true,
            css: "lch",
        },
    },
    ColorSpace {
        id: "oklab",
        name: "OKLab",
        labels: ["L", "a", "b"],
        compute: oklab,
        notation: Notation::Decimal {
            decimals: 4,
            css: "oklab(",
        },
    },
    ColorSpace {
        id: "oklch",
        name: "OKLCH",
        labels: ["L", "C", "h"],
        compute: oklch,
        notation: Notation::Lch {
            decimals: 4,
            lightness_percent: false,
            css: "oklch",
        },
    },
    ColorSpace {
        id: "xyz65",
        name: "CIE XYZ D65",
        labels: ["X", "Y", "Z"],
        compute: xyz_d65,
        notation: Notation::Decimal {
            decimals: 5,
            css: "color(xyz-d65 ",
        },
    },
    ColorSpace {
        id: "lrgb",
        name: "Linear sRGB",
        labels: ["R", "G", "B"],
        compute: linear_srgb,
        notation: Notation::Decimal {
            decimals: 5,
            css: "color(srgb-linear ",
        },
    },
    ColorSpace {
        id: "p3",
        name: "Display P3",
        labels: ["R", "G", "B"],
        compute: cie::display_p3,
        notation: Notation::Decimal {
            decimals: 5,
            css: "color(display-p3 ",
        },
    },
];

/// Look a space up by id
pub fn find(id: &str) -> Option<&'static ColorSpace> {
    COLOR_SPACES.iter().find(|space| space.id == id)
}

/// Reports for every space, in table order
pub fn reports(color: &CanonicalColor) -> Vec<ColorSpaceReport> {
    let css = color.to_css();
    COLOR_SPACES.iter().map(|space| space.report(&css)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HexColor, Rgb8};

    fn report(id: &str, css: &str) -> ColorSpaceResult {
        find(id).unwrap().report(css).result
    }

    #[test]
    fn test_table_order() {
        let ids: Vec<_> = COLOR_SPACES.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["hsl", "hsv", "hwb", "lab", "lch", "oklab", "oklch", "xyz65", "lrgb", "p3"]
        );
    }

    #[test]
    fn test_hsl_reference_blue() {
        let r = report("hsl", "#3498db");
        assert_eq!(r.values, ["204.1°", "69.9%", "53.1%"]);
        assert_eq!(r.css, "hsl(204.1 69.9% 53.1%)");
    }

    #[test]
    fn test_hsv_has_no_css() {
        let r = report("hsv", "#3498db");
        assert_eq!(r.values[0], "204.1°");
        assert_eq!(r.css, "");
    }

    #[test]
    fn test_lab_and_lch_notation() {
        let lab = report("lab", "rgb(52, 152, 219)");
        assert_eq!(lab.values, ["59.50", "-12.10", "-43.14"]);
        assert_eq!(lab.css, "lab(59.50% -12.10 -43.14)");

        let lch = report("lch", "#3498db");
        assert_eq!(lch.values, ["59.50", "44.80", "254.3°"]);
        assert_eq!(lch.css, "lch(59.50% 44.80 254.3)");
    }

    #[test]
    fn test_decimal_notation() {
        let p3 = report("p3", "#3498db");
        assert_eq!(p3.values, ["0.32085", "0.58799", "0.83692"]);
        assert_eq!(p3.css, "color(display-p3 0.32085 0.58799 0.83692)");

        let lrgb = report("lrgb", "#ffffff");
        assert_eq!(lrgb.css, "color(srgb-linear 1.00000 1.00000 1.00000)");
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        for id in ["hsl", "hsv", "hwb", "lch", "oklch"] {
            for css in ["#ffffff", "#808080", "#000000"] {
                let r = report(id, css);
                let hue = if id == "lch" || id == "oklch" {
                    &r.values[2]
                } else {
                    &r.values[0]
                };
                assert_eq!(hue, "0.0°", "{id} {css}");
            }
        }
    }

    #[test]
    fn test_no_negative_zero() {
        let lab = report("lab", "#ffffff");
        assert_eq!(lab.values, ["100.00", "0.00", "0.00"]);
        assert_eq!(fixed(-0.00001, 2), "0.00");
        assert_eq!(fixed(-0.5, 1), "-0.5");
    }

    #[test]
    fn test_unparseable_is_placeholder() {
        for space in &COLOR_SPACES {
            let r = space.report("not a color");
            assert!(r.result.is_placeholder(), "{}", space.id);
        }
        assert_eq!(
            find("hsl").unwrap().format(Some([f64::NAN, 0.0, 0.0])),
            ColorSpaceResult::placeholder()
        );
    }

    #[test]
    fn test_reports_cover_both_color_forms() {
        let hex = CanonicalColor::Hex(HexColor::new("#3498db").unwrap());
        let rgb = CanonicalColor::Rgb(Rgb8::new(52, 152, 219));
        let a = reports(&hex);
        assert_eq!(a.len(), 10);
        assert_eq!(a, reports(&rgb));
        assert!(a.iter().all(|r| !r.result.is_placeholder()));
    }
}
