//! One color through every back end
//!
//! [`Converter`] holds the ordered adapter list and turns a canonical color
//! into an [`Evaluation`]: the preview, one slot per CMYK adapter, the ten
//! color-space reports and the agreement verdict.

use crate::adapter::{AdapterDescriptor, CmykAdapter, Readiness, formula_adapters};
use crate::cmyk::ConversionResult;
use crate::color::{CanonicalColor, Rgb8};
use crate::compare::{self, ComparisonVerdict};
use crate::icc::{CmsEngine, IccProfiles, ProfileAdapter};
use crate::parse::{self, InputMode};
use crate::spaces::{self, ColorSpaceReport};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of one adapter for one color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Slot {
    Converted(ConversionResult),
    /// The adapter ran and produced nothing
    Failed,
    /// Profile transforms are still being built
    Loading,
    /// Profile transforms failed permanently
    Unavailable(String),
}

impl Slot {
    pub fn result(&self) -> Option<&ConversionResult> {
        match self {
            Slot::Converted(result) => Some(result),
            _ => None,
        }
    }
}

/// An adapter's identity paired with its slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterReport {
    pub adapter: AdapterDescriptor,
    pub slot: Slot,
}

/// Swatch color shown next to the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub hex: String,
    pub rgb: Rgb8,
}

/// Everything displayed for one color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub color: CanonicalColor,
    pub css: String,
    pub preview: Preview,
    pub cmyk: Vec<AdapterReport>,
    pub spaces: Vec<ColorSpaceReport>,
    pub verdict: ComparisonVerdict,
}

impl Evaluation {
    /// The primary adapter's result
    pub fn primary(&self) -> Option<&ConversionResult> {
        self.cmyk.first().and_then(|report| report.slot.result())
    }

    /// Results in adapter order, `None` where an adapter produced nothing
    pub fn results(&self) -> Vec<Option<ConversionResult>> {
        self.cmyk.iter().map(|r| r.slot.result().cloned()).collect()
    }
}

/// The ordered set of CMYK adapters
pub struct Converter {
    adapters: Vec<Box<dyn CmykAdapter>>,
}

impl Converter {
    /// Formula adapters only
    pub fn new() -> Self {
        Self {
            adapters: formula_adapters()
                .into_iter()
                .map(|a| Box::new(a) as Box<dyn CmykAdapter>)
                .collect(),
        }
    }

    /// Formula adapters followed by one adapter per registry profile
    pub fn with_profiles<E: CmsEngine>(registry: &Arc<IccProfiles<E>>) -> Self {
        let mut converter = Self::new();
        for adapter in ProfileAdapter::for_all(registry) {
            converter.push(adapter);
        }
        converter
    }

    /// Append an adapter after the existing ones
    pub fn push(&mut self, adapter: impl CmykAdapter + 'static) {
        self.adapters.push(Box::new(adapter));
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &AdapterDescriptor> {
        self.adapters.iter().map(|a| a.descriptor())
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Run every adapter and color space against one color
    pub fn evaluate(&self, color: &CanonicalColor) -> Evaluation {
        let cmyk: Vec<AdapterReport> = self
            .adapters
            .iter()
            .map(|adapter| AdapterReport {
                adapter: adapter.descriptor().clone(),
                slot: run(adapter.as_ref(), color),
            })
            .collect();

        let verdict = compare::verdict(
            cmyk.iter()
                .filter_map(|r| r.slot.result())
                .map(ConversionResult::cmyk),
        );

        let preview = match cmyk.first().and_then(|r| r.slot.result()) {
            Some(primary) => Preview {
                hex: primary.hex.clone(),
                rgb: primary.rgb,
            },
            None => {
                let rgb = color.to_rgb();
                Preview {
                    hex: rgb.to_hex(),
                    rgb,
                }
            }
        };

        tracing::debug!(
            color = %color,
            adapters = cmyk.len(),
            distinct = verdict.distinct_count,
            total = verdict.total_count,
            "evaluated"
        );

        Evaluation {
            color: color.clone(),
            css: color.to_css(),
            preview,
            cmyk,
            spaces: spaces::reports(color),
            verdict,
        }
    }

    /// Parse and evaluate raw input; `None` when the text is invalid
    pub fn evaluate_input(&self, text: &str, mode: InputMode) -> Option<Evaluation> {
        parse::parse(text, mode).map(|color| self.evaluate(&color))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.descriptors().map(|d| &d.id))
            .finish()
    }
}

fn run(adapter: &dyn CmykAdapter, color: &CanonicalColor) -> Slot {
    match adapter.readiness() {
        Readiness::Loading => Slot::Loading,
        Readiness::Unavailable(reason) => Slot::Unavailable(reason),
        Readiness::Ready => match adapter.convert(color) {
            Some(result) => Slot::Converted(result),
            None => Slot::Failed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmyk::Cmyk;
    use crate::icc::{Lcms2Engine, default_profiles};

    struct Broken(AdapterDescriptor);

    impl CmykAdapter for Broken {
        fn descriptor(&self) -> &AdapterDescriptor {
            &self.0
        }

        fn convert(&self, _: &CanonicalColor) -> Option<ConversionResult> {
            None
        }
    }

    #[test]
    fn test_reference_blue() {
        let eval = Converter::new()
            .evaluate_input("#3498db", InputMode::Hex)
            .unwrap();
        assert_eq!(eval.css, "#3498db");
        assert_eq!(eval.preview.hex, "#3498db");
        assert_eq!(eval.cmyk.len(), 4);
        assert_eq!(eval.primary().unwrap().cmyk(), Cmyk::new(76, 31, 0, 14));
        assert!(eval.verdict.all_identical);
        assert_eq!(eval.spaces.len(), 10);
    }

    #[test]
    fn test_invalid_input() {
        let converter = Converter::new();
        assert!(converter.evaluate_input("#GGGGGG", InputMode::Hex).is_none());
        assert!(converter.evaluate_input("300, 0, 0", InputMode::Rgb).is_none());
    }

    #[test]
    fn test_failed_adapter_excluded_from_verdict() {
        let mut converter = Converter::new();
        converter.push(Broken(AdapterDescriptor::new("broken", "Broken", "", "test")));
        let eval = converter.evaluate_input("0, 0, 0", InputMode::Rgb).unwrap();
        assert_eq!(eval.cmyk[4].slot, Slot::Failed);
        assert_eq!(eval.verdict.total_count, 4);
        assert!(eval.verdict.all_identical);
        assert_eq!(eval.results().iter().filter(|r| r.is_none()).count(), 1);
    }

    #[test]
    fn test_uninitialized_profiles_show_loading() {
        let registry = Arc::new(IccProfiles::<Lcms2Engine>::new(default_profiles()));
        let converter = Converter::with_profiles(&registry);
        assert_eq!(converter.len(), 8);
        let eval = converter.evaluate_input("#3498db", InputMode::Hex).unwrap();
        assert!(eval.cmyk[4..].iter().all(|r| r.slot == Slot::Loading));
        assert_eq!(eval.verdict.total_count, 4);
    }

    #[test]
    fn test_slot_json_shape() {
        let json = serde_json::to_value(Slot::Unavailable("boom".into())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "unavailable", "value": "boom"}));
        let json = serde_json::to_value(Slot::Loading).unwrap();
        assert_eq!(json, serde_json::json!({"status": "loading"}));
    }
}
