//! sRGB transfer function (IEC 61966-2-1)
//!
//! Display P3 shares this curve, so both directions are needed.

/// sRGB gamma decode (encoded → linear)
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Negative values mirror the positive branch, as CSS does for
/// out-of-gamut components.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    let magnitude = linear.abs();
    let encoded = if magnitude <= 0.0031308 {
        magnitude * 12.92
    } else {
        1.055 * magnitude.powf(1.0 / 2.4) - 0.055
    };
    encoded.copysign(linear)
}
