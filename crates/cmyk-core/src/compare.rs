//! Agreement across CMYK back ends

use crate::cmyk::{Cmyk, ConversionResult};
use serde::Serialize;
use std::collections::HashSet;

/// How many back ends agree on a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ComparisonVerdict {
    /// Every surviving result is the same tuple, with at least two of them
    pub all_identical: bool,
    /// Number of unique CMYK tuples
    pub distinct_count: usize,
    /// Number of results that were produced
    pub total_count: usize,
}

impl ComparisonVerdict {
    /// A single result, or none, has nothing to compare against
    pub fn is_meaningful(&self) -> bool {
        self.total_count > 1
    }
}

/// Summarize the results that were produced; failed entries are skipped
pub fn aggregate(results: &[Option<ConversionResult>]) -> ComparisonVerdict {
    verdict(results.iter().flatten().map(ConversionResult::cmyk))
}

/// Same as [`aggregate`] over bare tuples
pub fn verdict(tuples: impl IntoIterator<Item = Cmyk>) -> ComparisonVerdict {
    let tuples: Vec<Cmyk> = tuples.into_iter().collect();
    let total_count = tuples.len();
    let distinct_count = tuples.iter().collect::<HashSet<_>>().len();
    let all_identical = total_count > 1 && tuples.iter().all(|t| *t == tuples[0]);
    ComparisonVerdict {
        all_identical,
        distinct_count,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb8;

    fn result(c: u8, m: u8, y: u8, k: u8) -> Option<ConversionResult> {
        Some(ConversionResult::new(
            Cmyk::new(c, m, y, k),
            Rgb8::new(52, 152, 219),
        ))
    }

    #[test]
    fn test_all_identical() {
        let v = aggregate(&[result(76, 31, 0, 14), result(76, 31, 0, 14), result(76, 31, 0, 14)]);
        assert_eq!(
            v,
            ComparisonVerdict {
                all_identical: true,
                distinct_count: 1,
                total_count: 3
            }
        );
        assert!(v.is_meaningful());
    }

    #[test]
    fn test_divergent() {
        let v = aggregate(&[result(100, 62, 0, 84), result(100, 63, 0, 84), result(100, 62, 0, 84)]);
        assert!(!v.all_identical);
        assert_eq!(v.distinct_count, 2);
        assert_eq!(v.total_count, 3);
    }

    #[test]
    fn test_failures_are_ignored() {
        let v = aggregate(&[None, result(0, 0, 0, 100), None, result(0, 0, 0, 100)]);
        assert!(v.all_identical);
        assert_eq!(v.total_count, 2);
    }

    #[test]
    fn test_single_or_empty_is_never_identical() {
        let one = aggregate(&[result(0, 0, 0, 0), None]);
        assert!(!one.all_identical);
        assert_eq!((one.distinct_count, one.total_count), (1, 1));
        assert!(!one.is_meaningful());

        let none = aggregate(&[None, None]);
        assert_eq!(none, ComparisonVerdict::default());
    }
}
