//! CSS color strings accepted by the color-space adapters
//!
//! Only the two forms a [`CanonicalColor`](crate::CanonicalColor) renders
//! to: `#rgb`/`#rrggbb` and `rgb(r, g, b)`.

use palette::Srgb;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)$")
        .expect("rgb() pattern is valid")
});

/// Parse a CSS color string into 8-bit sRGB
pub fn parse(css: &str) -> Option<Srgb<u8>> {
    let css = css.trim();
    if css.starts_with('#') {
        return Srgb::<u8>::from_str(css).ok();
    }
    let caps = RGB_FUNCTION.captures(css)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    Some(Srgb::new(channel(1)?, channel(2)?, channel(3)?))
}
