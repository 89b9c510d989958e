//! Audience persona inference from a topic keyword.
//!
//! Keyword pattern groups are evaluated in declared order and the first group
//! containing any matching substring wins; the order is load-bearing because
//! a keyword may match several groups.

use serde::{Deserialize, Serialize};

/// Competition level of a content genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    /// 比較的穴場
    Low,
    /// 中程度
    Medium,
    /// 激戦区
    High,
}

/// Primary audience demographics for a genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryAudience {
    /// Expected viewer age range, e.g. "20-35歳"
    pub age_range: String,
    /// Gender split label
    pub gender: String,
    /// Interests
    pub interests: Vec<String>,
    /// Pain points
    pub pain_points: Vec<String>,
    /// Viewing goals
    pub goals: Vec<String>,
}

/// Content style preferred by the audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPreferences {
    /// Preferred video style
    pub video_style: String,
    /// Preferred video length
    pub video_length: String,
    /// Preferred tone of voice
    pub tone_of_voice: String,
    /// Popular topics
    pub topics: Vec<String>,
}

/// Audience persona matched from a topic keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    /// The keyword as given
    pub keyword: String,
    /// Who watches this genre
    pub primary_audience: PrimaryAudience,
    /// What they like to watch
    pub content_preferences: ContentPreferences,
    /// How crowded the genre is
    pub competition_level: CompetitionLevel,
    /// Recommended overall approach
    pub recommended_approach: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn vlog_persona() -> PersonaProfile {
    PersonaProfile {
        keyword: String::new(),
        primary_audience: PrimaryAudience {
            age_range: "20-35歳".to_string(),
            gender: "女性中心（70%）".to_string(),
            interests: strings(&["ライフスタイル", "インテリア", "ファッション", "美容"]),
            pain_points: strings(&[
                "日々の生活がマンネリ化",
                "自分らしさを見つけたい",
                "おしゃれな生活への憧れ",
            ]),
            goals: strings(&[
                "素敵な暮らしを送りたい",
                "自分磨きをしたい",
                "リラックスしたい",
            ]),
        },
        content_preferences: ContentPreferences {
            video_style: "ゆったり・癒し系".to_string(),
            video_length: "10-15分".to_string(),
            tone_of_voice: "穏やか・共感的・親しみやすい".to_string(),
            topics: strings(&[
                "モーニングルーティン",
                "購入品紹介",
                "部屋づくり",
                "カフェ巡り",
            ]),
        },
        competition_level: CompetitionLevel::High,
        recommended_approach: "個性的なライフスタイルを前面に。視聴者との距離感を近く保ち、日常の小さな幸せを共有する。".to_string(),
    }
}

fn gaming_persona() -> PersonaProfile {
    PersonaProfile {
        keyword: String::new(),
        primary_audience: PrimaryAudience {
            age_range: "15-30歳".to_string(),
            gender: "男性中心（65%）".to_string(),
            interests: strings(&["ゲーム", "eスポーツ", "アニメ", "テクノロジー"]),
            pain_points: strings(&[
                "暇つぶしコンテンツが欲しい",
                "上達したい",
                "仲間が欲しい",
            ]),
            goals: strings(&[
                "楽しく時間を過ごしたい",
                "ゲームスキルを向上させたい",
                "コミュニティに参加したい",
            ]),
        },
        content_preferences: ContentPreferences {
            video_style: "エンターテイメント・テンポ良く".to_string(),
            video_length: "15-30分".to_string(),
            tone_of_voice: "ハイテンション・リアクション豊か・ユーモア".to_string(),
            topics: strings(&["新作ゲーム実況", "神プレイ", "やり込み企画", "コラボ配信"]),
        },
        competition_level: CompetitionLevel::High,
        recommended_approach: "トークスキルと個性が重要。視聴者参加型企画やコミュニティ作りで差別化。".to_string(),
    }
}

fn beauty_persona() -> PersonaProfile {
    PersonaProfile {
        keyword: String::new(),
        primary_audience: PrimaryAudience {
            age_range: "18-35歳".to_string(),
            gender: "女性中心（90%）".to_string(),
            interests: strings(&["美容", "ファッション", "セルフケア", "ライフスタイル"]),
            pain_points: strings(&[
                "肌トラブル",
                "メイクが上手くいかない",
                "どの商品を選べばいいか分からない",
            ]),
            goals: strings(&[
                "きれいになりたい",
                "自分に合うコスメを見つけたい",
                "メイク技術を上達させたい",
            ]),
        },
        content_preferences: ContentPreferences {
            video_style: "明るく・丁寧・ビフォーアフター重視".to_string(),
            video_length: "8-15分".to_string(),
            tone_of_voice: "親しみやすい・説明が丁寧・共感的".to_string(),
            topics: strings(&[
                "購入品レビュー",
                "メイクチュートリアル",
                "スキンケアルーティン",
                "プチプラ vs デパコス",
            ]),
        },
        competition_level: CompetitionLevel::High,
        recommended_approach: "正直なレビューと実用的なテクニック。視聴者の肌タイプや予算に合わせた提案が鍵。".to_string(),
    }
}

fn cooking_persona() -> PersonaProfile {
    PersonaProfile {
        keyword: String::new(),
        primary_audience: PrimaryAudience {
            age_range: "25-45歳".to_string(),
            gender: "女性やや多め（60%）".to_string(),
            interests: strings(&["料理", "グルメ", "健康", "ライフスタイル"]),
            pain_points: strings(&[
                "料理のレパートリーが少ない",
                "時間がない",
                "美味しいお店を見つけたい",
            ]),
            goals: strings(&[
                "料理上手になりたい",
                "家族を喜ばせたい",
                "美味しいものを食べたい",
            ]),
        },
        content_preferences: ContentPreferences {
            video_style: "美味しそう・分かりやすい・実用的".to_string(),
            video_length: "5-12分".to_string(),
            tone_of_voice: "優しい・親切・食欲をそそる表現".to_string(),
            topics: strings(&["簡単レシピ", "時短料理", "お店紹介", "大食い・デカ盛り"]),
        },
        competition_level: CompetitionLevel::Medium,
        recommended_approach: "見た目の美しさと実用性のバランス。初心者でも真似できるレシピと丁寧な説明。".to_string(),
    }
}

fn education_persona() -> PersonaProfile {
    PersonaProfile {
        keyword: String::new(),
        primary_audience: PrimaryAudience {
            age_range: "15-35歳".to_string(),
            gender: "バランス型（男女半々）".to_string(),
            interests: strings(&["自己啓発", "キャリア", "資格取得", "スキルアップ"]),
            pain_points: strings(&[
                "勉強が続かない",
                "効率的な学習法が分からない",
                "時間がない",
            ]),
            goals: strings(&[
                "試験に合格したい",
                "スキルを身につけたい",
                "キャリアアップしたい",
            ]),
        },
        content_preferences: ContentPreferences {
            video_style: "分かりやすい・論理的・実践的".to_string(),
            video_length: "10-20分".to_string(),
            tone_of_voice: "説明が明確・励まし的・専門的すぎない".to_string(),
            topics: strings(&[
                "効率的勉強法",
                "試験対策",
                "モチベーション維持",
                "実践テクニック",
            ]),
        },
        competition_level: CompetitionLevel::Medium,
        recommended_approach: "実績と信頼性の提示。段階的で分かりやすい説明。視聴者の成功体験を促す。".to_string(),
    }
}

fn entertainment_persona() -> PersonaProfile {
    PersonaProfile {
        keyword: String::new(),
        primary_audience: PrimaryAudience {
            age_range: "15-30歳".to_string(),
            gender: "やや男性多め（55%）".to_string(),
            interests: strings(&["エンターテイメント", "お笑い", "トレンド", "SNS"]),
            pain_points: strings(&[
                "暇つぶしが欲しい",
                "笑いたい",
                "ストレス発散したい",
            ]),
            goals: strings(&[
                "楽しく時間を過ごしたい",
                "笑いたい",
                "話のネタが欲しい",
            ]),
        },
        content_preferences: ContentPreferences {
            video_style: "ハイテンション・テンポ良い・サムネ重視".to_string(),
            video_length: "8-15分".to_string(),
            tone_of_voice: "明るい・ユーモラス・リアクション豊か".to_string(),
            topics: strings(&["ドッキリ", "チャレンジ企画", "コラボ", "トレンド参加"]),
        },
        competition_level: CompetitionLevel::High,
        recommended_approach: "アイデアの独自性と企画力。仲間との掛け合いやキャラクター性で差別化。".to_string(),
    }
}

fn fallback_persona(keyword: &str) -> PersonaProfile {
    PersonaProfile {
        keyword: String::new(),
        primary_audience: PrimaryAudience {
            age_range: "20-40歳".to_string(),
            gender: "バランス型".to_string(),
            interests: vec![
                keyword.to_string(),
                "情報収集".to_string(),
                "ライフスタイル".to_string(),
            ],
            pain_points: strings(&["情報が欲しい", "解決策を探している", "時間がない"]),
            goals: strings(&["問題を解決したい", "知識を得たい", "楽しみたい"]),
        },
        content_preferences: ContentPreferences {
            video_style: "分かりやすい・実用的".to_string(),
            video_length: "10-15分".to_string(),
            tone_of_voice: "親しみやすい・丁寧".to_string(),
            topics: vec![
                format!("{keyword}の基礎"),
                format!("{keyword}のコツ"),
                format!("{keyword}の最新情報"),
            ],
        },
        competition_level: CompetitionLevel::Medium,
        recommended_approach: "キーワードの専門性を活かし、独自の視点や経験を提供する。".to_string(),
    }
}

/// Ordered category table: first group with a substring hit wins.
const CATEGORIES: &[(&[&str], fn() -> PersonaProfile)] = &[
    (
        &["vlog", "日常", "ルーティン", "暮らし", "ライフスタイル"],
        vlog_persona,
    ),
    (
        &["ゲーム", "実況", "ゲーム実況", "プレイ", "gaming"],
        gaming_persona,
    ),
    (
        &["美容", "コスメ", "メイク", "スキンケア", "beauty"],
        beauty_persona,
    ),
    (
        &["料理", "グルメ", "レシピ", "食べ歩き", "cooking", "飯テロ"],
        cooking_persona,
    ),
    (
        &["教育", "学習", "勉強", "資格", "英語", "education", "study"],
        education_persona,
    ),
    (
        &["エンタメ", "バラエティ", "ドッキリ", "チャレンジ", "entertainment"],
        entertainment_persona,
    ),
];

/// Matches a topic keyword to an audience persona.
///
/// Matching is case-insensitive substring containment against the ordered
/// category table; unmatched keywords get a generic profile whose text fields
/// interpolate the keyword itself.
#[must_use]
pub fn match_persona(keyword: &str) -> PersonaProfile {
    let trimmed = keyword.trim();
    let normalized = trimmed.to_lowercase();

    let mut profile = CATEGORIES
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| normalized.contains(p)))
        .map(|(_, build)| build())
        .unwrap_or_else(|| fallback_persona(trimmed));

    profile.keyword = keyword.to_string();
    profile
}
