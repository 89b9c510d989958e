//! Performer × genre positioning analysis.
//!
//! Mirrors the compatibility geometry with an inverted objective: strong
//! overlap means a mainstream position (low uniqueness), a disjoint audience
//! means maximal differentiation. Any performer/genre combination gets a
//! strategy that frames the age gap as a strength.

use crate::age_range::{AgeRange, OverlapGeometry};
use crate::persona::{CompetitionLevel, PersonaProfile};
use serde::{Deserialize, Serialize};

/// Flat uniqueness score for disjoint ranges.
const NO_OVERLAP_SCORE: f64 = 85.0;

/// Positioning category derived from the uniqueness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositioningType {
    /// 王道 (strong audience overlap)
    Mainstream,
    /// 差別化 (moderate divergence)
    Differentiated,
    /// ニッチ (high divergence with some overlap)
    Niche,
    /// 革命的 (no audience overlap at all)
    Revolutionary,
}

/// Strategy block for the chosen position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningStrategy {
    /// Main approach line
    pub approach: String,
    /// Strengths of this performer/genre combination
    pub strength_points: Vec<String>,
    /// Differentiation points
    pub differentiators: Vec<String>,
}

/// Result of the positioning analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningAnalysis {
    /// 0-100 uniqueness score (high = differentiated, low = mainstream)
    pub uniqueness_score: u8,
    /// Positioning category
    pub positioning_type: PositioningType,
    /// Performer's natural viewer range (age ± 10)
    pub performer_optimal_range: String,
    /// Genre's typical viewer range as declared
    pub persona_target_range: String,
    /// Strategy for this position
    pub positioning_strategy: PositioningStrategy,
    /// Chances and possibilities
    pub opportunities: Vec<String>,
    /// Concrete world-view recommendations
    pub recommendations: Vec<String>,
}

/// Scores how unique a performer's position is within a genre's audience.
#[must_use]
pub fn score_positioning(performer_age: i32, persona: &PersonaProfile) -> PositioningAnalysis {
    let performer_range = AgeRange::around(performer_age);
    let persona_range = AgeRange::parse_or_default(&persona.primary_audience.age_range);
    let geometry = OverlapGeometry::compute(performer_range, persona_range);
    let has_overlap = geometry.overlap.is_some();

    let score = calculate_score(&geometry);
    let positioning_type = determine_type(score, has_overlap);

    PositioningAnalysis {
        uniqueness_score: score,
        positioning_type,
        performer_optimal_range: performer_range.label(),
        persona_target_range: persona.primary_audience.age_range.clone(),
        positioning_strategy: strategy(performer_age, persona_range, positioning_type, persona),
        opportunities: opportunities(performer_age, persona_range, has_overlap, score, persona),
        recommendations: recommendations(performer_age, persona_range, positioning_type, persona),
    }
}

/// Uniqueness is the complement of the compatibility base; the bonus rewards
/// large center gaps instead of small ones.
fn calculate_score(geometry: &OverlapGeometry) -> u8 {
    if geometry.overlap.is_none() {
        return NO_OVERLAP_SCORE as u8;
    }

    let mut score = 100.0 - geometry.average_overlap_ratio * 100.0;

    if geometry.center_distance >= 15.0 {
        score += 15.0;
    } else if geometry.center_distance >= 10.0 {
        score += 10.0;
    } else if geometry.center_distance >= 5.0 {
        score += 5.0;
    }

    score.clamp(0.0, 100.0).round() as u8
}

const fn determine_type(score: u8, has_overlap: bool) -> PositioningType {
    if !has_overlap {
        return PositioningType::Revolutionary;
    }
    match score {
        60.. => PositioningType::Niche,
        30..=59 => PositioningType::Differentiated,
        _ => PositioningType::Mainstream,
    }
}

fn strategy(
    performer_age: i32,
    persona_range: AgeRange,
    positioning_type: PositioningType,
    persona: &PersonaProfile,
) -> PositioningStrategy {
    let mut strength_points = Vec::new();
    let mut differentiators = Vec::new();

    let approach = match positioning_type {
        PositioningType::Mainstream => {
            strength_points
                .push("視聴者との年齢が近く、自然体で共感を得やすい".to_string());
            strength_points.push("同世代の悩みや関心事をリアルに理解できる".to_string());
            strength_points.push("トレンドや文化的背景を共有しやすい".to_string());
            differentiators.push("個性的なキャラクター性やトーク力で差別化".to_string());
            differentiators.push("独自の経験や視点を盛り込む".to_string());
            differentiators.push("コンテンツの質と一貫性で信頼を獲得".to_string());
            "王道スタイル - 共感と親近感で勝負"
        }
        PositioningType::Differentiated => {
            strength_points.push("視聴者とは異なる年齢ならではの視点を提供".to_string());
            strength_points.push("幅広い年齢層にアピールできるポテンシャル".to_string());

            if performer_age < persona_range.min {
                strength_points.push(format!(
                    "{performer_age}歳の若々しさとフレッシュな感性が強み"
                ));
                differentiators.push("若者らしいエネルギーと新鮮な視点".to_string());
                differentiators
                    .push("年上の視聴者に「若い世代の感覚」を届ける架け橋".to_string());
            } else {
                strength_points.push(format!(
                    "{performer_age}歳の豊富な経験と落ち着いた視点が強み"
                ));
                differentiators.push("人生経験に基づく深い洞察と説得力".to_string());
                differentiators
                    .push("若い視聴者に「大人の視点」を届けるメンター的存在".to_string());
            }

            differentiators.push("年齢の違いを個性として明確に打ち出す".to_string());
            "差別化スタイル - 独自の視点と経験で勝負"
        }
        PositioningType::Niche => {
            strength_points.push("このジャンルでは珍しい年齢層＝希少価値が高い".to_string());
            strength_points.push("競合が少ないポジションを確立できる".to_string());
            strength_points.push("意外性と新鮮さで注目を集めやすい".to_string());

            if performer_age < persona_range.min {
                differentiators.push(format!(
                    "「{performer_age}歳が{}をやる意外性」を全面に",
                    persona.keyword
                ));
                differentiators.push("若者ならではの斬新なアプローチや解釈".to_string());
                differentiators.push("世代を超えた普遍性や新しい切り口を提示".to_string());
            } else {
                differentiators.push(format!(
                    "「{performer_age}歳が{}をやる渋さ・深み」を強調",
                    persona.keyword
                ));
                differentiators.push("ベテランならではの視点や専門知識".to_string());
                differentiators.push("落ち着いた雰囲気と信頼感のある語り".to_string());
            }

            differentiators.push("ターゲット層以外の視聴者も取り込める可能性".to_string());
            "ニッチスタイル - 希少性と専門性で勝負"
        }
        PositioningType::Revolutionary => {
            strength_points.push("誰もやっていない全く新しいポジション".to_string());
            strength_points.push("既存の枠組みにとらわれない自由な表現".to_string());
            strength_points.push("パイオニアとして先行者利益を獲得できる".to_string());

            if performer_age < persona_range.min - 10 {
                differentiators.push(format!(
                    "「まさかの{performer_age}歳」というサプライズ要素を最大限に活用"
                ));
                differentiators
                    .push("世代間ギャップを笑いや学びに変換するコンテンツ".to_string());
            } else if performer_age > persona_range.max + 10 {
                differentiators.push(format!(
                    "「{performer_age}歳だからこそ」の説得力と重厚感"
                ));
                differentiators
                    .push("年齢を超えた情熱と挑戦を見せることで感動を生む".to_string());
            }

            differentiators.push("新しいジャンルやサブカルチャーを開拓".to_string());
            differentiators.push("「年齢は関係ない」というメッセージ性".to_string());
            "革命的スタイル - 常識を覆す新カテゴリー創出"
        }
    };

    PositioningStrategy {
        approach: approach.to_string(),
        strength_points,
        differentiators,
    }
}

fn opportunities(
    performer_age: i32,
    persona_range: AgeRange,
    has_overlap: bool,
    uniqueness_score: u8,
    persona: &PersonaProfile,
) -> Vec<String> {
    let mut opportunities = Vec::new();

    if !has_overlap {
        if performer_age + 10 < persona_range.min {
            let gap = persona_range.min - (performer_age + 10);
            opportunities.push(format!(
                "💡 想定視聴者より{gap}歳以上若い = 「若手の挑戦」として応援されやすい"
            ));
            opportunities.push(
                "✨ 年齢を超えた普遍的なテーマを扱うことで、幅広い層にアピール可能".to_string(),
            );
            opportunities.push(
                "🎯 若者ならではの新しい解釈や切り口で、ジャンルに革新をもたらせる".to_string(),
            );
        } else if performer_age - 10 > persona_range.max {
            let gap = (performer_age - 10) - persona_range.max;
            opportunities.push(format!(
                "💡 想定視聴者より{gap}歳以上年上 = 「ベテランの知見」として信頼を獲得しやすい"
            ));
            opportunities
                .push("✨ 人生経験に裏打ちされた深い洞察で、差別化できる".to_string());
            opportunities.push("🎯 「大人が本気でやる」ギャップが、エンタメ性を生む".to_string());
        }
    } else if uniqueness_score >= 50 {
        opportunities
            .push("💡 適度なギャップが「個性」として際立つ絶妙なポジション".to_string());
        opportunities.push("✨ ニッチな立ち位置で、熱狂的なファンを獲得しやすい".to_string());
    }

    match persona.competition_level {
        CompetitionLevel::High => {
            opportunities.push(format!(
                "🎯 {}は競合が多いが、あなたの年齢と個性で差別化しやすい",
                persona.keyword
            ));
            opportunities
                .push("🌟 レッドオーシャンだからこそ、独自のポジショニングが光る".to_string());
        }
        CompetitionLevel::Medium => {
            opportunities
                .push("🎯 適度な競合環境で、質の高いコンテンツで頭角を現しやすい".to_string());
        }
        CompetitionLevel::Low => {
            opportunities
                .push("🎯 競合が少ないブルーオーシャンで、先行者利益を獲得できる".to_string());
        }
    }

    if performer_age < 25 {
        opportunities.push("✨ Z世代・若者としての感性とトレンド感度が武器になる".to_string());
    } else if performer_age < 35 {
        opportunities.push("✨ 若さと経験のバランスが取れた、信頼される年齢層".to_string());
    } else if performer_age < 50 {
        opportunities.push(
            "✨ 豊富な人生経験と専門知識で、説得力のあるコンテンツを作れる".to_string(),
        );
    } else {
        opportunities
            .push("✨ 年齢を重ねたからこその深み・品格・ユーモアが強力な武器".to_string());
    }

    opportunities
}

fn recommendations(
    performer_age: i32,
    persona_range: AgeRange,
    positioning_type: PositioningType,
    persona: &PersonaProfile,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match positioning_type {
        PositioningType::Mainstream => {
            recommendations
                .push("📌 同世代の共感を最大化: あなたの日常や経験をリアルに描く".to_string());
            recommendations.push(format!(
                "📌 {performer_age}歳ならではの「今」を切り取ったコンテンツ"
            ));
            recommendations
                .push("📌 親しみやすさと一貫性を重視したキャラクター設計".to_string());
            recommendations
                .push("📌 トレンドを取り入れつつ、あなたらしさを忘れない".to_string());
        }
        PositioningType::Differentiated => {
            recommendations.push("📌 年齢の違いを「個性」として明確に打ち出す".to_string());

            if performer_age < persona_range.min {
                recommendations.push(format!(
                    "📌 「{performer_age}歳の視点」を前面に: フレッシュさ・新鮮さを強調"
                ));
                recommendations.push(
                    "📌 年上の視聴者に対しては「後輩」「新世代」的なポジショニング".to_string(),
                );
            } else if performer_age > persona_range.max {
                recommendations.push(format!(
                    "📌 「{performer_age}歳だからこそ」の深み: 経験・知識・洞察を強調"
                ));
                recommendations.push(
                    "📌 若い視聴者に対しては「先輩」「メンター」的なポジショニング".to_string(),
                );
            }

            recommendations.push(format!(
                "📌 {}に対する独自の切り口や解釈を明確に",
                persona.keyword
            ));
            recommendations.push("📌 年齢を超えた普遍的な価値や魅力を提示".to_string());
        }
        PositioningType::Niche => {
            recommendations.push(
                "📌 「意外性」を最大の武器に: あなたの年齢 × ジャンルのギャップを楽しむ"
                    .to_string(),
            );
            recommendations.push(format!(
                "📌 「{performer_age}歳が{}をやってみた」という驚きを演出",
                persona.keyword
            ));
            recommendations
                .push("📌 ニッチなポジションを確立し、熱狂的なコアファンを獲得".to_string());
            recommendations.push("📌 年齢の枠を超えた挑戦や情熱を全面に出す".to_string());
            recommendations.push("📌 専門性や独自の経験・視点を強調".to_string());
        }
        PositioningType::Revolutionary => {
            recommendations.push("📌 常識を覆す新しいカテゴリーを創造する".to_string());
            recommendations.push(format!(
                "📌 「{performer_age}歳 × {}」という新ジャンルのパイオニアに",
                persona.keyword
            ));
            recommendations
                .push("📌 年齢や既存の枠組みにとらわれない自由な表現".to_string());
            recommendations
                .push("📌 サプライズと感動を両立させるストーリーテリング".to_string());
            recommendations.push(
                "📌 「年齢は関係ない」「好きなことを貫く」というメッセージ性を前面に"
                    .to_string(),
            );
        }
    }

    recommendations.push(format!(
        "📌 推奨動画スタイル: {}をベースに、あなたらしさをミックス",
        persona.content_preferences.video_style
    ));

    recommendations
}
