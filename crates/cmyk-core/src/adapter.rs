//! Conversion back ends as data
//!
//! Every CMYK back end, formula or ICC profile, is described by an
//! [`AdapterDescriptor`] and driven through the [`CmykAdapter`] trait, so the
//! fan-out is a single loop over an ordered list.

use crate::cmyk::{self, ConversionResult, FormulaFn};
use crate::color::CanonicalColor;
use serde::{Deserialize, Serialize};

/// Static identity of one conversion back end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterDescriptor {
    /// Stable identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Reference URL
    pub url: String,
    /// Short badge label
    pub badge: String,
    /// Optional one-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AdapterDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        badge: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            badge: badge.into(),
            description: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Whether an adapter can currently produce results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// Conversions run
    Ready,
    /// Backing resources are still being prepared
    Loading,
    /// Backing resources failed permanently
    Unavailable(String),
}

/// A CMYK conversion back end
pub trait CmykAdapter: Send + Sync {
    /// Identity and display metadata
    fn descriptor(&self) -> &AdapterDescriptor;

    /// Convert one color; `None` signals failure for this adapter only
    fn convert(&self, color: &CanonicalColor) -> Option<ConversionResult>;

    /// Pure adapters are always ready
    fn readiness(&self) -> Readiness {
        Readiness::Ready
    }
}

/// Adapter backed by a pure formula
pub struct FormulaAdapter {
    descriptor: AdapterDescriptor,
    formula: FormulaFn,
}

impl FormulaAdapter {
    pub fn new(descriptor: AdapterDescriptor, formula: FormulaFn) -> Self {
        Self {
            descriptor,
            formula,
        }
    }
}

impl CmykAdapter for FormulaAdapter {
    fn descriptor(&self) -> &AdapterDescriptor {
        &self.descriptor
    }

    fn convert(&self, color: &CanonicalColor) -> Option<ConversionResult> {
        cmyk::convert_with(self.formula, color)
    }
}

impl std::fmt::Debug for FormulaAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormulaAdapter")
            .field("id", &self.descriptor.id)
            .finish_non_exhaustive()
    }
}

const CMYK_REFERENCE_URL: &str = "https://en.wikipedia.org/wiki/CMYK_color_model";

/// The formula adapters in their fixed order; the first one is primary
pub fn formula_adapters() -> Vec<FormulaAdapter> {
    vec![
        FormulaAdapter::new(
            AdapterDescriptor::new("complement", "Complement", CMYK_REFERENCE_URL, "f64")
                .with_description("k = 1 - max(r, g, b), single rounding"),
            cmyk::complement,
        ),
        FormulaAdapter::new(
            AdapterDescriptor::new(
                "min-complement",
                "Min-Complement",
                CMYK_REFERENCE_URL,
                "f64",
            )
            .with_description("CMY first, then k = min(c, m, y)"),
            cmyk::min_complement,
        ),
        FormulaAdapter::new(
            AdapterDescriptor::new("two-stage", "Two-Stage Rounding", CMYK_REFERENCE_URL, "f64")
                .with_description("rounded to hundredths, then to whole percent"),
            cmyk::two_stage,
        ),
        FormulaAdapter::new(
            AdapterDescriptor::new("reciprocal-f32", "Reciprocal f32", CMYK_REFERENCE_URL, "f32")
                .with_description("single precision, scaled by 1 / (1 - k)"),
            cmyk::reciprocal_f32,
        ),
    ]
}
