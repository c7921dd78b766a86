//! Little CMS 2 engine

use super::engine::{CmsEngine, RenderingIntent};
use lcms2::{ColorSpaceSignature, PixelFormat, Profile, Transform};

/// [`CmsEngine`] backed by lcms2
#[derive(Debug, Clone, Copy, Default)]
pub struct Lcms2Engine;

impl Lcms2Engine {
    /// lcms2 is linked in, so bringing it up cannot fail
    pub fn connect() -> crate::Result<Self> {
        Ok(Self)
    }
}

impl CmsEngine for Lcms2Engine {
    type Profile = Profile;
    type Transform = Transform<[u8; 3], [u8; 4]>;

    fn name(&self) -> &'static str {
        "lcms2"
    }

    fn reference_profile(&self) -> Result<Profile, String> {
        Ok(Profile::new_srgb())
    }

    fn open_profile(&self, data: &[u8]) -> Result<Profile, String> {
        Profile::new_icc(data).map_err(|e| format!("lcms2 profile: {}", e))
    }

    fn create_rgb_to_cmyk(
        &self,
        source: &Profile,
        target: &Profile,
        intent: RenderingIntent,
    ) -> Result<Self::Transform, String> {
        if target.color_space() != ColorSpaceSignature::CmykData {
            return Err(format!(
                "lcms2 transform: target is {:?}, not CMYK",
                target.color_space()
            ));
        }
        Transform::new(
            source,
            PixelFormat::RGB_8,
            target,
            PixelFormat::CMYK_8,
            intent.into(),
        )
        .map_err(|e| format!("lcms2 transform: {}", e))
    }

    fn transform_pixel(&self, transform: &Self::Transform, rgb: [u8; 3]) -> Result<[u8; 4], String> {
        let mut out = [[0u8; 4]];
        transform.transform_pixels(&[rgb], &mut out);
        Ok(out[0])
    }
}
