//! Personality traits derived from the dominant and weak elements.
//!
//! Pure lookups against the fixed per-element tables.

use crate::constants::Element;
use serde::{Deserialize, Serialize};

/// Strengths, weaknesses and communication style derived from a balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityAnalysis {
    /// Strengths of the dominant element
    pub strengths: Vec<String>,
    /// Weaknesses of the weak element
    pub weaknesses: Vec<String>,
    /// Communication style of the dominant element
    pub communication_style: String,
}

/// Character traits associated with an element.
#[must_use]
pub const fn element_traits(element: Element) -> &'static [&'static str] {
    match element {
        Element::Wood => &["成長志向", "柔軟性", "クリエイティブ", "楽観的", "社交的"],
        Element::Fire => &[
            "情熱的",
            "カリスマ性",
            "表現力豊か",
            "直感的",
            "エネルギッシュ",
        ],
        Element::Earth => &["安定志向", "誠実", "実直", "信頼できる", "穏やか"],
        Element::Metal => &["論理的", "正確", "規律正しい", "完璧主義", "冷静"],
        Element::Water => &["知的", "柔軟", "直感的", "適応力", "神秘的"],
    }
}

/// Strengths associated with an element.
const fn element_strengths(element: Element) -> &'static [&'static str] {
    match element {
        Element::Wood => &["創造力", "成長意欲", "社交性"],
        Element::Fire => &["情熱", "リーダーシップ", "カリスマ"],
        Element::Earth => &["安定性", "誠実さ", "信頼性"],
        Element::Metal => &["論理性", "正確性", "規律"],
        Element::Water => &["知性", "柔軟性", "直感力"],
    }
}

/// Weaknesses associated with an element.
const fn element_weaknesses(element: Element) -> &'static [&'static str] {
    match element {
        Element::Wood => &["頑固さ", "理想主義"],
        Element::Fire => &["短気", "衝動的"],
        Element::Earth => &["頑固", "変化への抵抗"],
        Element::Metal => &["冷淡", "融通が利かない"],
        Element::Water => &["優柔不断", "神経質"],
    }
}

/// Communication style associated with an element.
const fn communication_style(element: Element) -> &'static str {
    match element {
        Element::Wood => "親しみやすく、明るいコミュニケーション",
        Element::Fire => "情熱的で、エネルギッシュなコミュニケーション",
        Element::Earth => "誠実で、落ち着いたコミュニケーション",
        Element::Metal => "論理的で、正確なコミュニケーション",
        Element::Water => "知的で、柔軟なコミュニケーション",
    }
}

/// Builds the overall personality analysis from a dominant/weak element pair.
///
/// Strengths and communication style follow the dominant element; the
/// weaknesses come from the weak element.
#[must_use]
pub fn analyze_personality(dominant: Element, weak: Element) -> PersonalityAnalysis {
    PersonalityAnalysis {
        strengths: element_strengths(dominant)
            .iter()
            .map(ToString::to_string)
            .collect(),
        weaknesses: element_weaknesses(weak)
            .iter()
            .map(ToString::to_string)
            .collect(),
        communication_style: communication_style(dominant).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_has_traits() {
        for element in Element::ALL {
            assert_eq!(element_traits(element).len(), 5);
        }
    }

    #[test]
    fn test_analysis_splits_dominant_and_weak() {
        let analysis = analyze_personality(Element::Fire, Element::Water);
        assert_eq!(analysis.strengths[0], "情熱");
        assert_eq!(analysis.weaknesses[0], "優柔不断");
        assert!(analysis.communication_style.contains("情熱的"));
    }

    #[test]
    fn test_every_element_covered_in_all_tables() {
        for element in Element::ALL {
            assert!(!element_strengths(element).is_empty());
            assert!(!element_weaknesses(element).is_empty());
            assert!(!communication_style(element).is_empty());
        }
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis = analyze_personality(Element::Wood, Element::Metal);
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("communicationStyle").is_some());
    }
}
