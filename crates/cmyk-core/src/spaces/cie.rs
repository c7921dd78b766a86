//! Matrix-path conversions: CIE Lab/LCH under D50 and Display P3
//!
//! Matrices are the CSS Color 4 ones, derived from the chromaticities.

use crate::math::{D50, D65, Matrix3x3, adapt_xyz, srgb_gamma_decode, srgb_gamma_encode};
use palette::Srgb;

/// Linear sRGB → XYZ (D65)
const LINEAR_SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
    [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
    [0.01933081871559182, 0.11919477979462598, 0.9505321522496607],
]);

/// XYZ (D65) → linear Display P3
const XYZ_TO_LINEAR_P3: Matrix3x3 = Matrix3x3::new([
    [2.493496911941425, -0.9313836179191239, -0.40271078445071684],
    [-0.8294889695615747, 1.7626640603183463, 0.023624685841943577],
    [0.03584583024378447, -0.07617238926804182, 0.9568845240076872],
]);

/// Below this chroma the hue angle is noise and reported as 0
pub(crate) const ACHROMATIC_CHROMA: f64 = 1e-4;

fn xyz_d65(rgb: Srgb<f64>) -> [f64; 3] {
    let linear = [
        srgb_gamma_decode(rgb.red),
        srgb_gamma_decode(rgb.green),
        srgb_gamma_decode(rgb.blue),
    ];
    LINEAR_SRGB_TO_XYZ.multiply_vec(linear)
}

/// CIE Lab f(t)
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// CIE Lab relative to D50, Bradford-adapted from the sRGB white
pub fn lab_d50(rgb: Srgb<f64>) -> [f64; 3] {
    let xyz = adapt_xyz(xyz_d65(rgb), &D65, &D50);
    let fx = lab_f(xyz[0] / D50.xyz[0]);
    let fy = lab_f(xyz[1] / D50.xyz[1]);
    let fz = lab_f(xyz[2] / D50.xyz[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Polar form of [`lab_d50`]: lightness, chroma, hue degrees
pub fn lch_d50(rgb: Srgb<f64>) -> [f64; 3] {
    let [l, a, b] = lab_d50(rgb);
    let chroma = a.hypot(b);
    let hue = if chroma < ACHROMATIC_CHROMA {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    };
    [l, chroma, hue]
}

/// Gamma-encoded Display P3, unclamped
pub fn display_p3(rgb: Srgb<f64>) -> [f64; 3] {
    XYZ_TO_LINEAR_P3
        .multiply_vec(xyz_d65(rgb))
        .map(srgb_gamma_encode)
}
