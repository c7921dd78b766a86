//! Color input parsing
//!
//! Validates raw user text against the active [`InputMode`] and produces a
//! [`CanonicalColor`], or nothing. Parsing never fails loudly: a rejected
//! input is just `None`, and the caller shows an "invalid input" hint.

use crate::color::{CanonicalColor, HexColor, Rgb8};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("hex pattern compiles")
});

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:rgb\s*\(\s*)?([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)?$",
    )
    .expect("rgb pattern compiles")
});

/// Which syntax the input text is expected in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`
    #[default]
    Hex,
    /// `R, G, B` or `rgb(R, G, B)`
    Rgb,
}

impl InputMode {
    /// Example text the input resets to when switching to this mode
    pub const fn default_text(self) -> &'static str {
        match self {
            InputMode::Hex => "#3498db",
            InputMode::Rgb => "52, 152, 219",
        }
    }

    /// Short description of the accepted syntax
    pub const fn expected_format(self) -> &'static str {
        match self {
            InputMode::Hex => "#RRGGBB or RRGGBB",
            InputMode::Rgb => "R, G, B (0-255)",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Hex => write!(f, "hex"),
            InputMode::Rgb => write!(f, "rgb"),
        }
    }
}

impl FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(InputMode::Hex),
            "rgb" => Ok(InputMode::Rgb),
            other => Err(format!("unknown input mode '{other}', expected hex or rgb")),
        }
    }
}

/// Parse raw text in the given mode
///
/// Hex input gains a leading `#` if it lacks one; the 3-digit shorthand is
/// passed through unexpanded. RGB input is rejected outright if any channel
/// exceeds 255.
pub fn parse(raw: &str, mode: InputMode) -> Option<CanonicalColor> {
    match mode {
        InputMode::Hex => parse_hex(raw),
        InputMode::Rgb => parse_rgb(raw),
    }
}

fn parse_hex(raw: &str) -> Option<CanonicalColor> {
    if !HEX_PATTERN.is_match(raw) {
        return None;
    }
    HexColor::new(raw).map(CanonicalColor::Hex)
}

fn parse_rgb(raw: &str) -> Option<CanonicalColor> {
    let captures = RGB_PATTERN.captures(raw)?;
    let channel = |i: usize| -> Option<u8> {
        let value: u16 = captures.get(i)?.as_str().parse().ok()?;
        u8::try_from(value).ok()
    };
    let rgb = Rgb8::new(channel(1)?, channel(2)?, channel(3)?);
    Some(CanonicalColor::Rgb(rgb))
}

/// Guess the mode for free-form text: hex if it looks like hex, else RGB
pub fn detect_mode(raw: &str) -> InputMode {
    if HEX_PATTERN.is_match(raw.trim()) {
        InputMode::Hex
    } else {
        InputMode::Rgb
    }
}

/// Input state: the current text and the mode it is read in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInput {
    text: String,
    mode: InputMode,
}

impl ColorInput {
    /// Start in `mode` with that mode's example text
    pub fn new(mode: InputMode) -> Self {
        Self {
            text: mode.default_text().to_owned(),
            mode,
        }
    }

    /// Start with explicit text
    pub fn with_text(text: impl Into<String>, mode: InputMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Replace the text, keeping the mode
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Switch mode; the text resets to the new mode's example
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.text = mode.default_text().to_owned();
    }

    /// Parse the current state
    pub fn color(&self) -> Option<CanonicalColor> {
        parse(&self.text, self.mode)
    }

    /// Non-empty text that does not parse
    pub fn is_invalid(&self) -> bool {
        !self.text.is_empty() && self.color().is_none()
    }
}

impl Default for ColorInput {
    fn default() -> Self {
        Self::new(InputMode::Hex)
    }
}
