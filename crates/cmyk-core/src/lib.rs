//! # cmyk-core - one color, many CMYK answers
//!
//! Converts a single RGB color to CMYK through several independent back ends
//! and reports whether they agree:
//!
//! - four naive formulas with different numeric methods and rounding
//! - ICC print profiles (Generic CMYK, FOGRA39, GRACoL 2013, SWOP 2013)
//!   through lcms2 or moxcms
//! - ten informational color spaces (HSL, Lab, OKLCH, Display P3, ...)
//!
//! ## Quick Start
//!
//! ```
//! use cmyk_core::{Converter, InputMode};
//!
//! let converter = Converter::new();
//! let eval = converter.evaluate_input("#3498db", InputMode::Hex).unwrap();
//!
//! let primary = eval.primary().unwrap();
//! assert_eq!((primary.c, primary.m, primary.y, primary.k), (76, 31, 0, 14));
//! assert!(eval.verdict.all_identical);
//! ```
//!
//! ICC profiles load on a background thread; until they are ready their
//! slots read as [`Slot::Loading`]:
//!
//! ```no_run
//! use cmyk_core::icc::{IccProfiles, Lcms2Engine};
//! use cmyk_core::{Config, Converter};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let config = Config::default();
//! let registry = Arc::new(IccProfiles::<Lcms2Engine>::new(config.profiles.clone()));
//! registry.spawn_initialize(Lcms2Engine::connect, config.profile_source());
//! registry.wait(Duration::from_secs(5));
//!
//! let converter = Converter::with_profiles(&registry);
//! ```

pub mod adapter;
pub mod cmyk;
pub mod color;
pub mod compare;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod icc;
pub mod math;
pub mod parse;
pub mod spaces;

pub use adapter::{AdapterDescriptor, CmykAdapter, FormulaAdapter, Readiness, formula_adapters};
pub use cmyk::{Cmyk, ConversionResult};
pub use color::{CanonicalColor, HexColor, Rgb8};
pub use compare::{ComparisonVerdict, aggregate};
pub use config::Config;
pub use error::{Error, Result};
pub use evaluate::{AdapterReport, Converter, Evaluation, Preview, Slot};
pub use icc::{EngineKind, IccProfileDescriptor, IccProfiles, IccStatus};
pub use parse::{ColorInput, InputMode, detect_mode, parse};
pub use spaces::{COLOR_SPACES, ColorSpace, ColorSpaceReport, ColorSpaceResult};

/// Version of cmyk-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
