//! Performer-age × persona compatibility scoring.
//!
//! Based on the ±10-years heuristic: a performer resonates most with viewers
//! within ten years of their own age. The score rewards overlap between that
//! window and the persona's target range.

use crate::age_range::{AgeRange, OverlapGeometry};
use crate::persona::PersonaProfile;
use serde::{Deserialize, Serialize};

/// Flat score when the performer window and persona range are disjoint.
const NO_OVERLAP_SCORE: u8 = 20;

/// Qualitative match tier for a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    /// 80 and above
    Excellent,
    /// 60-79
    Good,
    /// 40-59
    Fair,
    /// Below 40
    Challenging,
}

impl MatchLevel {
    /// Tier for a 0-100 score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Challenging,
        }
    }
}

/// Overlap summary echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapSummary {
    /// Whether the two ranges touch
    pub exists: bool,
    /// "X〜Y歳" or "重複なし"
    pub range: String,
}

/// Result of the compatibility analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityAnalysis {
    /// 0-100 compatibility score
    pub compatibility_score: u8,
    /// Qualitative tier
    pub match_level: MatchLevel,
    /// Performer's optimal viewer range (age ± 10)
    pub performer_optimal_range: String,
    /// Persona's target range as declared
    pub persona_target_range: String,
    /// Overlap between the two ranges
    pub overlap: OverlapSummary,
    /// Tier-specific recommendations
    pub recommendations: Vec<String>,
    /// Warnings, emitted only without overlap
    pub warnings: Vec<String>,
}

/// Scores how well a performer's age fits a persona's audience.
#[must_use]
pub fn score_compatibility(performer_age: i32, persona: &PersonaProfile) -> CompatibilityAnalysis {
    let performer_range = AgeRange::around(performer_age);
    let persona_range = AgeRange::parse_or_default(&persona.primary_audience.age_range);
    let geometry = OverlapGeometry::compute(performer_range, persona_range);

    let score = calculate_score(&geometry);
    let match_level = MatchLevel::from_score(score);

    CompatibilityAnalysis {
        compatibility_score: score,
        match_level,
        performer_optimal_range: performer_range.label(),
        persona_target_range: persona.primary_audience.age_range.clone(),
        overlap: OverlapSummary {
            exists: geometry.overlap.is_some(),
            range: geometry
                .overlap
                .map_or_else(|| "重複なし".to_string(), |o| o.label()),
        },
        recommendations: recommendations(performer_age, persona_range, score, persona),
        warnings: warnings(performer_age, persona_range, geometry.overlap.is_some()),
    }
}

/// Base score is the averaged overlap ratio; a bonus rewards performer ages
/// close to the persona's center age.
fn calculate_score(geometry: &OverlapGeometry) -> u8 {
    if geometry.overlap.is_none() {
        return NO_OVERLAP_SCORE;
    }

    let mut score = geometry.average_overlap_ratio * 100.0;

    if geometry.center_distance <= 5.0 {
        score += 10.0;
    } else if geometry.center_distance <= 10.0 {
        score += 5.0;
    }

    score.min(100.0).round() as u8
}

fn recommendations(
    performer_age: i32,
    persona_range: AgeRange,
    score: u8,
    persona: &PersonaProfile,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if score >= 80 {
        recommendations.push(
            "あなたの年齢はこのジャンルに最適です！自信を持ってコンテンツを作成してください。"
                .to_string(),
        );
        recommendations.push(format!(
            "{performer_age}歳の視点や経験を活かした、同世代に刺さるコンテンツを意識しましょう。"
        ));
    } else if score >= 60 {
        recommendations.push(
            "このジャンルとの相性は良好です。視聴者層との共通点を強調しましょう。".to_string(),
        );
        if performer_age < persona_range.min {
            recommendations.push(
                "年上の視聴者向けに、少し落ち着いたトーンやアプローチを心がけると良いでしょう。"
                    .to_string(),
            );
        } else if performer_age > persona_range.max {
            recommendations.push(
                "若い視聴者向けに、トレンドやエネルギッシュなコンテンツを意識すると良いでしょう。"
                    .to_string(),
            );
        }
    } else if score >= 40 {
        recommendations
            .push("視聴者層とのギャップを個性として活かすアプローチが効果的です。".to_string());
        recommendations.push(
            "年齢の違いを逆手に取り、「先輩」「後輩」的なポジショニングを明確にしましょう。"
                .to_string(),
        );
        recommendations.push(format!(
            "{}に対する独自の視点や経験を強調してください。",
            persona.keyword
        ));
    } else {
        recommendations.push(
            "視聴者層とのギャップが大きいですが、これを強みに変えることが可能です。".to_string(),
        );
        recommendations.push(
            "ニッチなポジショニングを確立し、「意外性」や「新鮮さ」を武器にしましょう。"
                .to_string(),
        );
        recommendations.push(
            "年齢を超えた普遍的なテーマや、専門知識を前面に出すアプローチが有効です。".to_string(),
        );
    }

    recommendations
}

fn warnings(performer_age: i32, persona_range: AgeRange, has_overlap: bool) -> Vec<String> {
    let mut warnings = Vec::new();

    if !has_overlap {
        warnings.push(
            "⚠️ 演者の最適視聴者層（±10歳）とペルソナの想定層が重複していません。".to_string(),
        );
        if performer_age + 10 < persona_range.min {
            let gap = persona_range.min - (performer_age + 10);
            warnings.push(format!(
                "あなたの年齢（{performer_age}歳）は、想定視聴者層より{gap}歳以上若いです。視聴者からの共感を得にくい可能性があります。"
            ));
        } else if performer_age - 10 > persona_range.max {
            let gap = (performer_age - 10) - persona_range.max;
            warnings.push(format!(
                "あなたの年齢（{performer_age}歳）は、想定視聴者層より{gap}歳以上年上です。視聴者からの共感を得にくい可能性があります。"
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::match_persona;

    fn persona_with_range(range: &str) -> PersonaProfile {
        let mut persona = match_persona("xyz");
        persona.primary_audience.age_range = range.to_string();
        persona
    }

    #[test]
    fn test_perfect_overlap_scores_hundred() {
        // Performer 30 → window 20-40, persona 20-40: ratios both 1.0,
        // centers equal → +10 bonus, clamped to 100.
        let result = score_compatibility(30, &persona_with_range("20-40歳"));
        assert_eq!(result.compatibility_score, 100);
        assert_eq!(result.match_level, MatchLevel::Excellent);
        assert!(result.overlap.exists);
        assert_eq!(result.overlap.range, "20〜40歳");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_overlap_scores_flat_twenty() {
        let result = score_compatibility(20, &persona_with_range("50-60歳"));
        assert_eq!(result.compatibility_score, 20);
        assert_eq!(result.match_level, MatchLevel::Challenging);
        assert!(!result.overlap.exists);
        assert_eq!(result.overlap.range, "重複なし");
        // Gap is 50 - (20 + 10) = 20 years
        assert!(result.warnings.iter().any(|w| w.contains("20歳以上若い")));
    }

    #[test]
    fn test_unparseable_range_uses_default() {
        // Default range is 20-40, same as the perfect-overlap case
        let result = score_compatibility(30, &persona_with_range("ティーン向け"));
        assert_eq!(result.compatibility_score, 100);
    }

    #[test]
    fn test_partial_overlap_is_mid_tier() {
        // Performer 40 → window 30-50, persona 20-35: overlap 30-35 (width 5),
        // ratios 5/20 and 5/15 → base ≈ 29.2, center distance 12.5 → no bonus.
        let result = score_compatibility(40, &persona_with_range("20-35歳"));
        assert_eq!(result.compatibility_score, 29);
        assert_eq!(result.match_level, MatchLevel::Challenging);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_center_bonus_lifts_close_centers() {
        // Performer 40 → window 30-50, persona 25-45: overlap 30-45,
        // ratios 15/20, 15/20 → base 75, centers 40 vs 35 → +10 → 85.
        let result = score_compatibility(40, &persona_with_range("25-45歳"));
        assert_eq!(result.compatibility_score, 85);
        assert_eq!(result.match_level, MatchLevel::Excellent);
    }

    #[test]
    fn test_good_tier_recommendation() {
        // Performer 38 → window 28-48, persona 20-40: overlap 28-40,
        // ratios 12/20, 12/20 → base 60, centers 38 vs 30 → +5 → 65.
        let result = score_compatibility(38, &persona_with_range("20-40歳"));
        assert_eq!(result.compatibility_score, 65);
        assert_eq!(result.match_level, MatchLevel::Good);
        assert!(result.recommendations[0].contains("相性は良好"));
    }

    #[test]
    fn test_match_level_boundaries() {
        assert_eq!(MatchLevel::from_score(80), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(79), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(60), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(59), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(40), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(39), MatchLevel::Challenging);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = score_compatibility(30, &match_persona("ゲーム実況"));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("compatibilityScore").is_some());
        assert!(json.get("matchLevel").is_some());
        assert!(json.get("performerOptimalRange").is_some());
    }

    #[test]
    fn test_idempotent() {
        let persona = match_persona("美容");
        assert_eq!(
            score_compatibility(28, &persona),
            score_compatibility(28, &persona)
        );
    }
}
