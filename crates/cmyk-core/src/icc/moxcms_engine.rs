//! moxcms engine

use super::engine::{CmsEngine, RenderingIntent};
use moxcms::{ColorProfile, DataColorSpace, Layout, TransformOptions};

type PixelFn = dyn Fn(&[u8], &mut [u8]) -> Result<(), String> + Send + Sync;

/// An RGB8 to CMYK8 moxcms transform
///
/// moxcms stores CMYK data with the 4-channel `Rgba` layout.
pub struct MoxcmsTransform {
    execute: Box<PixelFn>,
}

impl std::fmt::Debug for MoxcmsTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoxcmsTransform").finish_non_exhaustive()
    }
}

/// [`CmsEngine`] backed by moxcms
#[derive(Debug, Clone, Copy, Default)]
pub struct MoxcmsEngine;

impl MoxcmsEngine {
    /// moxcms is pure Rust, so bringing it up cannot fail
    pub fn connect() -> crate::Result<Self> {
        Ok(Self)
    }
}

impl CmsEngine for MoxcmsEngine {
    type Profile = ColorProfile;
    type Transform = MoxcmsTransform;

    fn name(&self) -> &'static str {
        "moxcms"
    }

    fn reference_profile(&self) -> Result<ColorProfile, String> {
        Ok(ColorProfile::new_srgb())
    }

    fn open_profile(&self, data: &[u8]) -> Result<ColorProfile, String> {
        ColorProfile::new_from_slice(data).map_err(|e| format!("moxcms profile: {:?}", e))
    }

    fn create_rgb_to_cmyk(
        &self,
        source: &ColorProfile,
        target: &ColorProfile,
        intent: RenderingIntent,
    ) -> Result<MoxcmsTransform, String> {
        // an RGB target would happily accept the Rgba layout
        if target.color_space != DataColorSpace::Cmyk {
            return Err(format!(
                "moxcms transform: target is {:?}, not CMYK",
                target.color_space
            ));
        }
        let options = TransformOptions {
            rendering_intent: intent.into(),
            ..TransformOptions::default()
        };
        let executor = source
            .create_transform_8bit(Layout::Rgb, target, Layout::Rgba, options)
            .map_err(|e| format!("moxcms transform: {:?}", e))?;
        Ok(MoxcmsTransform {
            execute: Box::new(move |src: &[u8], dst: &mut [u8]| {
                executor
                    .transform(src, dst)
                    .map_err(|e| format!("moxcms execute: {:?}", e))
            }),
        })
    }

    fn transform_pixel(&self, transform: &MoxcmsTransform, rgb: [u8; 3]) -> Result<[u8; 4], String> {
        let mut out = [0u8; 4];
        (transform.execute)(&rgb, &mut out)?;
        Ok(out)
    }
}
