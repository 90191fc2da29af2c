//! Summary statistics over an enumerated outcome list.

use serde::{Deserialize, Serialize};

/// (min, max, expected) over a finite, exhaustively enumerated set of
/// outcomes. `expected` is the arithmetic mean — every enumerated
/// outcome is equally likely by construction (one per unseen card).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    pub min: i32,
    pub max: i32,
    pub expected: f64,
    /// Number of outcomes enumerated.
    pub samples: u32,
}

impl OutcomeSummary {
    /// Summarize a non-empty outcome list. Returns `None` for an empty
    /// enumeration.
    #[must_use]
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = i32>) -> Option<Self> {
        let mut iter = outcomes.into_iter();
        let first = iter.next()?;
        let mut summary = Self {
            min: first,
            max: first,
            expected: 0.0,
            samples: 1,
        };
        let mut sum = i64::from(first);
        for outcome in iter {
            summary.min = summary.min.min(outcome);
            summary.max = summary.max.max(outcome);
            sum += i64::from(outcome);
            summary.samples += 1;
        }
        summary.expected = sum as f64 / f64::from(summary.samples);
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_constant() {
        let s = OutcomeSummary::from_outcomes([4, 4, 4]).unwrap();
        assert_eq!(s.min, 4);
        assert_eq!(s.max, 4);
        assert_eq!(s.expected, 4.0);
        assert_eq!(s.samples, 3);
    }

    #[test]
    fn test_summary_mixed() {
        let s = OutcomeSummary::from_outcomes([-2, 0, 8]).unwrap();
        assert_eq!(s.min, -2);
        assert_eq!(s.max, 8);
        assert!((s.expected - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_enumeration() {
        assert!(OutcomeSummary::from_outcomes(std::iter::empty()).is_none());
    }
}
