//! Bradford chromatic adaptation
//!
//! The Lab and LCH reports are relative to D50 while sRGB is defined
//! under D65, so XYZ values are adapted between the two.
//!
//! References:
//! - ICC.1:2022 Annex E
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::math::Matrix3x3;

/// A reference white as CIE XYZ with Y = 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub xyz: [f64; 3],
}

impl WhitePoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { xyz: [x, y, z] }
    }
}

/// D50 from chromaticity (0.3457, 0.3585), the ICC PCS white
pub const D50: WhitePoint = WhitePoint::new(0.964_295_676_429_567_6, 1.0, 0.825_104_602_510_460_2);

/// D65 from chromaticity (0.3127, 0.3290), the sRGB white
pub const D65: WhitePoint = WhitePoint::new(0.950_455_927_051_671_7, 1.0, 1.089_057_750_759_878_4);

/// Bradford matrix: XYZ → LMS (cone response)
const BRADFORD_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Bradford matrix: LMS → XYZ, the full-precision inverse of the above
const BRADFORD_LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.9869929054667121, -0.1470542564209901, 0.15996265166373125],
    [0.4323052697233945, 0.5183602715367776, 0.049291228212855615],
    [-0.008528664575177331, 0.04004282165408486, 0.96848669578755],
]);

/// Adaptation matrix M such that `XYZ_dst = M × XYZ_src`
pub fn bradford_matrix(src_white: &WhitePoint, dst_white: &WhitePoint) -> Matrix3x3 {
    let src_lms = BRADFORD_XYZ_TO_LMS.multiply_vec(src_white.xyz);
    let dst_lms = BRADFORD_XYZ_TO_LMS.multiply_vec(dst_white.xyz);

    let ratio = |i: usize| {
        if src_lms[i].abs() > 1e-10 {
            dst_lms[i] / src_lms[i]
        } else {
            1.0
        }
    };
    let scale = Matrix3x3::diagonal(ratio(0), ratio(1), ratio(2));

    // M = M_A^-1 × Scale × M_A
    BRADFORD_LMS_TO_XYZ.multiply(&scale.multiply(&BRADFORD_XYZ_TO_LMS))
}

/// Adapt an XYZ triple from one white point to another
#[inline]
pub fn adapt_xyz(xyz: [f64; 3], src_white: &WhitePoint, dst_white: &WhitePoint) -> [f64; 3] {
    bradford_matrix(src_white, dst_white).multiply_vec(xyz)
}
