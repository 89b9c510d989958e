//! Appraisal facade: birth date/hour in, full four-pillar appraisal out.

use crate::calendar::{compute_chart, FourPillars};
use crate::colors::{color_affinity, color_palette, ColorAffinity, ColorPalette};
use crate::constants::Element;
use crate::five_elements::{analyze_five_elements, FiveElementsBalance};
use crate::personality::{analyze_personality, element_traits};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Personality section of an appraisal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    /// Traits of the dominant element
    pub traits: Vec<String>,
    /// Strengths of the dominant element
    pub strengths: Vec<String>,
    /// Weaknesses of the weak element
    pub weaknesses: Vec<String>,
    /// Communication style of the dominant element
    pub communication_style: String,
}

/// Complete deterministic appraisal for one birth date/hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourPillarsAppraisal {
    /// The four pillars
    pub pillars: FourPillars,
    /// Five-element balance
    pub five_elements: FiveElementsBalance,
    /// Personality analysis
    pub personality: PersonalityProfile,
    /// Color affinity classification
    pub color_affinity: ColorAffinity,
    /// Recommended usage palette
    pub color_palette: ColorPalette,
}

impl FourPillarsAppraisal {
    /// Dominant element shortcut.
    #[must_use]
    pub fn dominant(&self) -> Element {
        self.five_elements.dominant
    }
}

/// Runs the full appraisal pipeline: chart → balance → personality/colors.
///
/// Pure and total; identical inputs always produce identical output.
#[must_use]
pub fn appraise(birth_date: NaiveDate, birth_hour: u32) -> FourPillarsAppraisal {
    let pillars = compute_chart(birth_date, birth_hour);
    let five_elements = analyze_five_elements(&pillars);
    let analysis = analyze_personality(five_elements.dominant, five_elements.weak);

    debug!(
        dominant = %five_elements.dominant,
        weak = %five_elements.weak,
        "four pillars appraised"
    );

    FourPillarsAppraisal {
        personality: PersonalityProfile {
            traits: element_traits(five_elements.dominant)
                .iter()
                .map(ToString::to_string)
                .collect(),
            strengths: analysis.strengths,
            weaknesses: analysis.weaknesses,
            communication_style: analysis.communication_style,
        },
        color_affinity: color_affinity(five_elements.dominant),
        color_palette: color_palette(five_elements.dominant),
        pillars,
        five_elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_appraisal_sections_are_consistent() {
        let appraisal = appraise(date(1990, 5, 15), 14);
        assert_eq!(
            appraisal.personality.traits,
            element_traits(appraisal.dominant())
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        );
        assert_eq!(
            appraisal.color_palette,
            color_palette(appraisal.five_elements.dominant)
        );
    }

    #[test]
    fn test_appraisal_is_idempotent() {
        let a = appraise(date(1985, 11, 2), 7);
        let b = appraise(date(1985, 11, 2), 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_appraisal_serializes_expected_shape() {
        let appraisal = appraise(date(2000, 1, 1), 12);
        let json = serde_json::to_value(&appraisal).unwrap();
        assert!(json.get("pillars").is_some());
        assert!(json.get("fiveElements").is_some());
        assert!(json["personality"].get("communicationStyle").is_some());
        assert!(json["colorAffinity"].get("favorable").is_some());
        // Pillars serialize with kanji labels
        let stem = json["pillars"]["year"]["stem"].as_str().unwrap();
        assert_eq!(stem.chars().count(), 1);
    }
}
