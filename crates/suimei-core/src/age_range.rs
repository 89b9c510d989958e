//! Age-range parsing and overlap geometry.
//!
//! Both scorers (compatibility and positioning) consume the same geometry so
//! their scores stay mathematically complementary.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Regex for localized range strings like "20-35歳" / "20〜35歳".
fn age_range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)[-〜~](\d+)").expect("valid age range pattern"))
}

/// An inclusive age range with `min <= max`.
///
/// Ages are signed because a performer window (`age ± 10`) can dip below
/// zero for very young ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Lower bound
    pub min: i32,
    /// Upper bound
    pub max: i32,
}

impl AgeRange {
    /// Fallback range used when a range string cannot be parsed.
    pub const DEFAULT: AgeRange = AgeRange { min: 20, max: 40 };

    /// Half-width of the performer window (the ±10 years heuristic).
    pub const PERFORMER_SPREAD: i32 = 10;

    /// Creates a range, swapping the bounds if given in reverse.
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// The natural audience window around a performer age (age ± 10).
    #[must_use]
    pub fn around(age: i32) -> Self {
        Self {
            min: age - Self::PERFORMER_SPREAD,
            max: age + Self::PERFORMER_SPREAD,
        }
    }

    /// Parses a localized range string such as "20-35歳" or "20〜35歳".
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let captures = age_range_pattern().captures(text)?;
        let min = captures.get(1)?.as_str().parse().ok()?;
        let max = captures.get(2)?.as_str().parse().ok()?;
        Some(Self::new(min, max))
    }

    /// Parses a range string, falling back to [`AgeRange::DEFAULT`] (20-40)
    /// when the string is unparseable.
    #[must_use]
    pub fn parse_or_default(text: &str) -> Self {
        Self::parse(text).unwrap_or(Self::DEFAULT)
    }

    /// Width of the range in years.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.max - self.min
    }

    /// Center of the range.
    #[must_use]
    pub fn center(&self) -> f64 {
        f64::from(self.min + self.max) / 2.0
    }

    /// Intersection with another range, if any.
    #[must_use]
    pub fn overlap(&self, other: &AgeRange) -> Option<AgeRange> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(AgeRange { min, max })
    }

    /// Renders the range as "X〜Y歳".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}〜{}歳", self.min, self.max)
    }
}

/// Overlap geometry between a performer window and a persona target range.
///
/// Shared by the compatibility and positioning scorers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapGeometry {
    /// Performer's natural audience window
    pub performer: AgeRange,
    /// Persona's target range
    pub persona: AgeRange,
    /// Intersection, if the two ranges touch
    pub overlap: Option<AgeRange>,
    /// Mean of the two overlap ratios (overlap width over each range's
    /// width); 0.0 without overlap
    pub average_overlap_ratio: f64,
    /// Absolute distance between the two range centers
    pub center_distance: f64,
}

impl OverlapGeometry {
    /// Computes the geometry for a performer window and persona range.
    #[must_use]
    pub fn compute(performer: AgeRange, persona: AgeRange) -> Self {
        let overlap = performer.overlap(&persona);
        let average_overlap_ratio = overlap.map_or(0.0, |o| {
            let performer_ratio = f64::from(o.width()) / f64::from(performer.width());
            let persona_ratio = f64::from(o.width()) / f64::from(persona.width());
            (performer_ratio + persona_ratio) / 2.0
        });

        Self {
            performer,
            persona,
            overlap,
            average_overlap_ratio,
            center_distance: (performer.center() - persona.center()).abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hyphen_and_wave_dash() {
        assert_eq!(AgeRange::parse("20-35歳"), Some(AgeRange { min: 20, max: 35 }));
        assert_eq!(AgeRange::parse("20〜35歳"), Some(AgeRange { min: 20, max: 35 }));
        assert_eq!(AgeRange::parse("15~30"), Some(AgeRange { min: 15, max: 30 }));
    }

    #[test]
    fn test_parse_failure_falls_back_to_default() {
        assert_eq!(AgeRange::parse("全年齢"), None);
        assert_eq!(AgeRange::parse_or_default("全年齢"), AgeRange::DEFAULT);
        assert_eq!(AgeRange::parse_or_default(""), AgeRange { min: 20, max: 40 });
    }

    #[test]
    fn test_new_orders_bounds() {
        let range = AgeRange::new(40, 20);
        assert!(range.min <= range.max);
    }

    #[test]
    fn test_around_keeps_twenty_year_window() {
        let range = AgeRange::around(30);
        assert_eq!(range, AgeRange { min: 20, max: 40 });
        assert_eq!(range.width(), 20);
        // Young performers produce negative lower bounds
        assert_eq!(AgeRange::around(5).min, -5);
    }

    #[test]
    fn test_overlap() {
        let a = AgeRange { min: 20, max: 40 };
        let b = AgeRange { min: 30, max: 50 };
        assert_eq!(a.overlap(&b), Some(AgeRange { min: 30, max: 40 }));

        let c = AgeRange { min: 50, max: 60 };
        assert_eq!(a.overlap(&c), None);

        // Touching at a single age still counts
        let d = AgeRange { min: 40, max: 45 };
        assert_eq!(a.overlap(&d), Some(AgeRange { min: 40, max: 40 }));
    }

    #[test]
    fn test_geometry_identical_ranges() {
        let geometry =
            OverlapGeometry::compute(AgeRange::around(30), AgeRange { min: 20, max: 40 });
        assert!((geometry.average_overlap_ratio - 1.0).abs() < 1e-9);
        assert_eq!(geometry.center_distance, 0.0);
    }

    #[test]
    fn test_geometry_disjoint_ranges() {
        let geometry =
            OverlapGeometry::compute(AgeRange::around(20), AgeRange { min: 50, max: 60 });
        assert!(geometry.overlap.is_none());
        assert_eq!(geometry.average_overlap_ratio, 0.0);
        assert_eq!(geometry.center_distance, 35.0);
    }

    #[test]
    fn test_label() {
        assert_eq!(AgeRange { min: 20, max: 40 }.label(), "20〜40歳");
    }
}
