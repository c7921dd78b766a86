//! Numeric helpers for the CIE color spaces
//!
//! - 3x3 matrices for RGB↔XYZ and primaries changes
//! - sRGB transfer function
//! - Bradford chromatic adaptation between D65 and D50

pub mod chromatic_adaptation;
pub mod gamma;
pub mod matrix;

pub use chromatic_adaptation::{D50, D65, WhitePoint, adapt_xyz, bradford_matrix};
pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::Matrix3x3;
