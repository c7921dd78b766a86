//! Color management engine seam
//!
//! The ICC transform math lives in external engines. [`CmsEngine`] is the
//! narrow contract the profile registry needs from one: a built-in sRGB
//! reference, profile parsing, RGB to CMYK transform construction and
//! single-pixel execution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering intent for profile transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderingIntent {
    /// Perceptual rendering intent - compresses the gamut to fit
    #[default]
    Perceptual,
    /// Relative colorimetric - preserves in-gamut colors, clips out-of-gamut
    RelativeColorimetric,
    /// Saturation - maintains saturation, may shift hue
    Saturation,
    /// Absolute colorimetric - preserves white point
    AbsoluteColorimetric,
}

impl From<RenderingIntent> for lcms2::Intent {
    fn from(intent: RenderingIntent) -> Self {
        match intent {
            RenderingIntent::Perceptual => lcms2::Intent::Perceptual,
            RenderingIntent::RelativeColorimetric => lcms2::Intent::RelativeColorimetric,
            RenderingIntent::Saturation => lcms2::Intent::Saturation,
            RenderingIntent::AbsoluteColorimetric => lcms2::Intent::AbsoluteColorimetric,
        }
    }
}

impl From<RenderingIntent> for moxcms::RenderingIntent {
    fn from(intent: RenderingIntent) -> Self {
        match intent {
            RenderingIntent::Perceptual => moxcms::RenderingIntent::Perceptual,
            RenderingIntent::RelativeColorimetric => moxcms::RenderingIntent::RelativeColorimetric,
            RenderingIntent::Saturation => moxcms::RenderingIntent::Saturation,
            RenderingIntent::AbsoluteColorimetric => moxcms::RenderingIntent::AbsoluteColorimetric,
        }
    }
}

impl fmt::Display for RenderingIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderingIntent::Perceptual => "perceptual",
            RenderingIntent::RelativeColorimetric => "relative-colorimetric",
            RenderingIntent::Saturation => "saturation",
            RenderingIntent::AbsoluteColorimetric => "absolute-colorimetric",
        };
        f.write_str(name)
    }
}

impl FromStr for RenderingIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "perceptual" => Ok(RenderingIntent::Perceptual),
            "relative-colorimetric" | "relative" => Ok(RenderingIntent::RelativeColorimetric),
            "saturation" => Ok(RenderingIntent::Saturation),
            "absolute-colorimetric" | "absolute" => Ok(RenderingIntent::AbsoluteColorimetric),
            other => Err(format!(
                "unknown intent '{other}', expected perceptual, relative-colorimetric, saturation or absolute-colorimetric"
            )),
        }
    }
}

/// An external color management engine
///
/// Errors are plain reason strings; the registry attaches the profile key.
pub trait CmsEngine: Send + 'static {
    /// Parsed profile handle
    type Profile;
    /// RGB8 to CMYK8 transform handle, shared read-only once built
    type Transform: Send;

    /// Short engine name for logs and reports
    fn name(&self) -> &'static str;

    /// Built-in sRGB display profile used as the source of every transform
    fn reference_profile(&self) -> Result<Self::Profile, String>;

    /// Parse ICC bytes
    fn open_profile(&self, data: &[u8]) -> Result<Self::Profile, String>;

    /// Build a transform from 8-bit RGB to 8-bit CMYK device values
    fn create_rgb_to_cmyk(
        &self,
        source: &Self::Profile,
        target: &Self::Profile,
        intent: RenderingIntent,
    ) -> Result<Self::Transform, String>;

    /// Push one pixel through a transform
    fn transform_pixel(&self, transform: &Self::Transform, rgb: [u8; 3]) -> Result<[u8; 4], String>;
}

/// Which engine drives the profile transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Little CMS 2
    #[default]
    Lcms2,
    /// moxcms, pure Rust
    Moxcms,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Lcms2 => write!(f, "lcms2"),
            EngineKind::Moxcms => write!(f, "moxcms"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lcms2" | "lcms" => Ok(EngineKind::Lcms2),
            "moxcms" => Ok(EngineKind::Moxcms),
            other => Err(format!("unknown engine '{other}', expected lcms2 or moxcms")),
        }
    }
}
