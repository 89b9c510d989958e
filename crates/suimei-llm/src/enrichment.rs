//! Appraisal enrichment: prompt assembly and response parsing.
//!
//! The deterministic analysis is serialized into a Japanese appraisal prompt;
//! the model answers with a fenced JSON document that is cleaned up and
//! parsed into [`EnrichmentResponse`].

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use suimei_core::{
    CompetitionLevel, FourPillarsAppraisal, PersonaProfile, PositioningAnalysis,
};

/// Everything the enrichment call needs: creator data plus the structured
/// deterministic analysis.
#[derive(Debug, Clone)]
pub struct EnrichmentRequest<'a> {
    /// Creator name
    pub name: &'a str,
    /// Birth date as given ("YYYY-MM-DD")
    pub birth_date: &'a str,
    /// Gender label
    pub gender: &'a str,
    /// Topic keyword
    pub keyword: &'a str,
    /// Performer age in whole years
    pub performer_age: i32,
    /// Deterministic four-pillar appraisal
    pub appraisal: &'a FourPillarsAppraisal,
    /// Matched audience persona
    pub persona: &'a PersonaProfile,
    /// Positioning analysis
    pub positioning: &'a PositioningAnalysis,
}

/// World-view section of the enrichment answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedWorldView {
    /// Theme keywords
    pub keywords: Vec<String>,
    /// Visual direction text
    pub visual_direction: String,
    /// Color usage rationale (with hex codes)
    pub color_philosophy: String,
    /// Content strategy proposals
    pub content_strategy: String,
}

/// Free-text appraisal returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResponse {
    /// Essence description
    pub your_essence: String,
    /// Personality description
    pub personality: String,
    /// Talent description
    pub talents: String,
    /// Creator type label
    pub performer_type: String,
    /// World-view concept
    pub worldview_concept: EnrichedWorldView,
    /// Long-form overall advice
    pub detailed_analysis: String,
}

const fn competition_label(level: CompetitionLevel) -> &'static str {
    match level {
        CompetitionLevel::High => "激戦区",
        CompetitionLevel::Medium => "中程度",
        CompetitionLevel::Low => "比較的穴場",
    }
}

/// Builds the appraisal prompt from the structured analysis.
#[must_use]
pub fn build_prompt(request: &EnrichmentRequest<'_>) -> String {
    let persona = request.persona;
    let positioning = request.positioning;
    let elements = &request.appraisal.five_elements;

    format!(
        r#"
あなたは優しい占い師として、YouTubeクリエイターの個性や才能を分かりやすく説明してください。

**重要**:
- 専門用語は一切使わず、中学生でも理解できる言葉で説明してください
- 親しみやすく、前向きな表現を心がけてください
- 例え話を使って分かりやすく伝えてください

# {name}さんについて
- お名前: {name}
- 生年月日: {birth_date}
- 年齢: {age}歳
- 性別: {gender}
- SEOキーワード（狙っているジャンル）: {keyword}
- 最適な視聴者層: {age_min}〜{age_max}歳（演者の年齢±10歳が最も共感を得やすい層です）

# 「{keyword}」に関心のある視聴者層の特徴
- 想定年齢層: {persona_age_range}
- 性別比率: {persona_gender}
- 興味関心: {interests}
- 悩み・課題: {pain_points}
- 視聴目的: {goals}
- 好む動画スタイル: {video_style}
- 競合レベル: {competition}

# あなたの独自ポジショニング戦略
- 独自性スコア: {uniqueness}/100点（高いほど差別化された独自のポジション）
- ポジショニングタイプ: {approach}
- あなたの自然体な視聴者層: {performer_range}
- ジャンルの典型的視聴者層: {persona_range}

## あなたの強みとチャンス
{opportunities}

## 戦略的アプローチ
- {approach}
- 強みポイント: {strength_points}
- 差別化ポイント: {differentiators}

# 生まれ持った5つの性質（エネルギー）
- 木のエネルギー（成長する力・新しいアイデア）: {wood:.1}点
- 火のエネルギー（情熱・明るさ）: {fire:.1}点
- 土のエネルギー（安定感・温かさ）: {earth:.1}点
- 金のエネルギー（しっかりした考え・正確さ）: {metal:.1}点
- 水のエネルギー（頭の良さ・柔軟性）: {water:.1}点

**あなたの特徴**: {dominant}のエネルギーが一番強い人です

---

# 回答形式

{name}さんの分析を、以下のJSON形式で回答してください：

```json
{{
  "yourEssence": "あなたの本質を例え話を使って分かりやすく説明（200文字以上）",
  "personality": "性格や才能について、長所と短所を分かりやすく説明（200文字以上）",
  "talents": "YouTubeで活かせる才能や強みを具体的に説明（200文字以上）",
  "performerType": "クリエイタータイプ（例：「教えるのが得意な先生タイプ」「盛り上げ上手なエンターテイナータイプ」など）",
  "worldviewConcept": {{
    "keywords": ["分かりやすいキーワード1", "分かりやすいキーワード2", "分かりやすいキーワード3"],
    "visualDirection": "どんな映像の雰囲気が合うか、具体的に分かりやすく説明（200文字以上）",
    "colorPhilosophy": "おすすめの色使いを、なぜその色が合うのか理由と一緒に説明。HEXコード3色以上を含める（200文字以上）",
    "contentStrategy": "おすすめの動画企画を3つ以上、具体的に提案（200文字以上）"
  }},
  "detailedAnalysis": "総合的なアドバイスを、前向きで分かりやすい言葉で説明（500文字以上）。専門用語は使わない"
}}
```
"#,
        name = request.name,
        birth_date = request.birth_date,
        age = request.performer_age,
        gender = request.gender,
        keyword = request.keyword,
        age_min = request.performer_age - 10,
        age_max = request.performer_age + 10,
        persona_age_range = persona.primary_audience.age_range,
        persona_gender = persona.primary_audience.gender,
        interests = persona.primary_audience.interests.join("、"),
        pain_points = persona.primary_audience.pain_points.join("、"),
        goals = persona.primary_audience.goals.join("、"),
        video_style = persona.content_preferences.video_style,
        competition = competition_label(persona.competition_level),
        uniqueness = positioning.uniqueness_score,
        approach = positioning.positioning_strategy.approach,
        performer_range = positioning.performer_optimal_range,
        persona_range = positioning.persona_target_range,
        opportunities = positioning.opportunities.join("\n"),
        strength_points = positioning.positioning_strategy.strength_points.join("、"),
        differentiators = positioning.positioning_strategy.differentiators.join("、"),
        wood = elements.wood,
        fire = elements.fire,
        earth = elements.earth,
        metal = elements.metal,
        water = elements.water,
        dominant = elements.dominant,
    )
}

fn fenced_json_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("valid fenced json pattern")
    })
}

/// Removes control characters the model sometimes emits inside JSON strings,
/// keeping newlines and tabs.
fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect()
}

/// Parses the model's answer into an [`EnrichmentResponse`].
///
/// Accepts either a fenced ```json block or a bare JSON document.
pub fn parse_response(text: &str) -> Result<EnrichmentResponse> {
    let json_text = fenced_json_pattern()
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map_or(text, |m| m.as_str());

    let cleaned = strip_control_chars(json_text);

    serde_json::from_str(&cleaned).map_err(|e| Error::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use suimei_core::{appraise, match_persona, score_positioning};

    fn sample_response_json() -> &'static str {
        r##"{
            "yourEssence": "essence",
            "personality": "personality",
            "talents": "talents",
            "performerType": "先生タイプ",
            "worldviewConcept": {
                "keywords": ["a", "b", "c"],
                "visualDirection": "visual",
                "colorPhilosophy": "#66BB6A",
                "contentStrategy": "strategy"
            },
            "detailedAnalysis": "analysis"
        }"##
    }

    #[test]
    fn test_prompt_contains_analysis_sections() {
        let appraisal = appraise(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(), 14);
        let persona = match_persona("ゲーム実況");
        let positioning = score_positioning(33, &persona);
        let request = EnrichmentRequest {
            name: "山田太郎",
            birth_date: "1990-05-15",
            gender: "男性",
            keyword: "ゲーム実況",
            performer_age: 33,
            appraisal: &appraisal,
            persona: &persona,
            positioning: &positioning,
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("山田太郎さんについて"));
        assert!(prompt.contains("最適な視聴者層: 23〜43歳"));
        assert!(prompt.contains("想定年齢層: 15-30歳"));
        assert!(prompt.contains("競合レベル: 激戦区"));
        assert!(prompt.contains("独自性スコア:"));
        assert!(prompt.contains("木のエネルギー"));
        assert!(prompt.contains("yourEssence"));
    }

    #[test]
    fn test_parse_fenced_response() {
        let text = format!("前置きの説明\n```json\n{}\n```\n後書き", sample_response_json());
        let parsed = parse_response(&text).unwrap();
        assert_eq!(parsed.performer_type, "先生タイプ");
        assert_eq!(parsed.worldview_concept.keywords.len(), 3);
    }

    #[test]
    fn test_parse_bare_json_response() {
        let parsed = parse_response(sample_response_json()).unwrap();
        assert_eq!(parsed.your_essence, "essence");
    }

    #[test]
    fn test_parse_strips_stray_control_chars() {
        let dirty = sample_response_json().replace("essence", "ess\u{0008}ence");
        let parsed = parse_response(&dirty).unwrap();
        assert_eq!(parsed.your_essence, "essence");
    }

    #[test]
    fn test_parse_failure_is_invalid_response() {
        let error = parse_response("これはJSONではありません").unwrap_err();
        assert!(!error.is_retryable());
        assert!(matches!(error, Error::InvalidResponse(_)));
    }
}
