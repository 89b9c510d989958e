//! World-view (branding concept) generation.
//!
//! Deterministic templating over the dominant element: theme, description,
//! a named color palette, tone-and-manner and production recommendations.
//! Every element has a complete entry in every table, so generation is total.

use crate::colors::color_palette;
use crate::constants::Element;
use crate::personality::element_traits;
use serde::{Deserialize, Serialize};

/// Input for world-view generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldViewRequest {
    /// Dominant element from the five-element analysis
    pub element: Element,
    /// Genre / topic keyword
    pub genre: String,
    /// Target viewer age descriptor, e.g. "15-30歳"
    pub target_age: String,
    /// Target viewer gender label
    pub target_gender: String,
}

/// A named color with a usage note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Color name label
    pub name: String,
    /// Hex value
    pub hex: String,
    /// Where to use it
    pub usage: String,
}

/// Three-tier named palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedColorPalette {
    /// Main color
    pub main: PaletteColor,
    /// Accent colors
    pub accent: Vec<PaletteColor>,
    /// Base colors
    pub base: Vec<PaletteColor>,
}

/// Visual tone and manner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneAndManner {
    /// Visual style label
    pub visual_style: String,
    /// Mood keywords
    pub mood: String,
    /// Typography recommendation
    pub typography: String,
}

/// Production recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecommendations {
    /// Thumbnail style
    pub thumbnail_style: String,
    /// Shooting style
    pub shooting_style: String,
    /// Editing style
    pub editing: String,
}

/// Generated branding concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldViewConcept {
    /// Theme label
    pub theme: String,
    /// Concept description
    pub description: String,
    /// Named color palette
    pub color_palette: DetailedColorPalette,
    /// Tone and manner
    pub tone_and_manner: ToneAndManner,
    /// Production recommendations
    pub recommendations: ProductionRecommendations,
}

/// Theme candidates per element; the first entry is the one used.
const fn element_themes(element: Element) -> &'static [&'static str] {
    match element {
        Element::Wood => &[
            "ナチュラル・グロース",
            "フレッシュ・クリエイティブ",
            "グリーン・イノベーション",
        ],
        Element::Fire => &[
            "パッション・エナジー",
            "ダイナミック・パワー",
            "ファイアー・スピリット",
        ],
        Element::Earth => &[
            "ナチュラル・エレガンス",
            "アーシー・コンフォート",
            "ウォーム・ハーモニー",
        ],
        Element::Metal => &[
            "クリスタル・クリア",
            "シャープ・プレシジョン",
            "エレガント・ミニマル",
        ],
        Element::Water => &[
            "フロー・インテリジェンス",
            "ディープ・ブルー",
            "アクア・フレキシビリティ",
        ],
    }
}

/// Palette name labels per element, paired positionally with the hex values
/// from [`color_palette`].
const fn palette_names(element: Element) -> (&'static str, &'static [&'static str], &'static [&'static str]) {
    match element {
        Element::Wood => (
            "フレッシュグリーン",
            &["ライムグリーン", "イエロー"],
            &["ホワイト", "ライトグリーン", "アイボリー"],
        ),
        Element::Fire => (
            "パッションオレンジ",
            &["ファイアレッド", "イエロー"],
            &["ホワイト", "ライトオレンジ", "ライトピンク"],
        ),
        Element::Earth => (
            "ウォームベージュ",
            &["ダスティローズ", "セージグリーン"],
            &["アイボリー", "ライトグレー"],
        ),
        Element::Metal => (
            "ブルーグレー",
            &["シルバーグレー", "チャコール"],
            &["ホワイト", "ライトグレー", "ペールブルー"],
        ),
        Element::Water => (
            "ディープブルー",
            &["スカイブルー", "シアン"],
            &["ホワイト", "ライトブルー", "ペールシアン"],
        ),
    }
}

fn description(element: Element, target_age: &str) -> String {
    let lead = match element {
        Element::Wood => {
            "あなたの本質的な「成長志向」「創造性」を活かし、視聴者に新鮮なインスピレーションを届ける世界観です。".to_string()
        }
        Element::Fire => {
            "あなたの本質的な「情熱」「エネルギー」を活かし、視聴者を惹きつける力強い世界観です。".to_string()
        }
        Element::Earth => {
            let traits = element_traits(element)[..3].join("」「");
            format!("あなたの本質的な「{traits}」を活かし、視聴者に安心感と温かみを届ける世界観です。")
        }
        Element::Metal => {
            "あなたの本質的な「論理性」「正確性」を活かし、視聴者に信頼感を与える洗練された世界観です。".to_string()
        }
        Element::Water => {
            "あなたの本質的な「知性」「柔軟性」を活かし、視聴者に深い共感を呼ぶ世界観です。".to_string()
        }
    };

    format!("{lead} {target_age}の視聴者の共感を呼び、長期的なファンを獲得できるコンセプトです。")
}

fn detailed_palette(element: Element) -> DetailedColorPalette {
    let palette = color_palette(element);
    let (main_name, accent_names, base_names) = palette_names(element);

    DetailedColorPalette {
        main: PaletteColor {
            name: main_name.to_string(),
            hex: palette.main,
            usage: "サムネイル背景、全体のトーン".to_string(),
        },
        accent: palette
            .accent
            .into_iter()
            .zip(accent_names)
            .enumerate()
            .map(|(index, (hex, name))| PaletteColor {
                name: (*name).to_string(),
                hex,
                usage: if index == 0 {
                    "テキスト強調、CTA".to_string()
                } else {
                    "装飾、アイコン".to_string()
                },
            })
            .collect(),
        base: palette
            .base
            .into_iter()
            .zip(base_names)
            .enumerate()
            .map(|(index, (hex, name))| PaletteColor {
                name: (*name).to_string(),
                hex,
                usage: if index == 0 {
                    "背景メイン".to_string()
                } else {
                    "背景サブ、余白".to_string()
                },
            })
            .collect(),
    }
}

fn tone_and_manner(element: Element) -> ToneAndManner {
    let (visual_style, mood, typography) = match element {
        Element::Wood => (
            "ナチュラル × モダン",
            "爽やか、フレッシュ、成長志向",
            "Noto Sans JP (Regular)",
        ),
        Element::Fire => (
            "ダイナミック × ボールド",
            "情熱的、エネルギッシュ、刺激的",
            "Noto Sans JP (Bold)",
        ),
        Element::Earth => (
            "ミニマル × ナチュラル",
            "落ち着いた、温かみのある、洗練された",
            "Noto Sans JP (Medium)",
        ),
        Element::Metal => (
            "エレガント × ミニマル",
            "洗練された、クリア、上質",
            "Noto Sans JP (Light)",
        ),
        Element::Water => (
            "フロー × インテリジェント",
            "知的、柔軟、深い",
            "Noto Serif JP (Regular)",
        ),
    };

    ToneAndManner {
        visual_style: visual_style.to_string(),
        mood: mood.to_string(),
        typography: typography.to_string(),
    }
}

fn production_recommendations(element: Element) -> ProductionRecommendations {
    let (shooting_style, editing, thumbnail_style) = match element {
        Element::Wood => (
            "自然光を活用した明るい撮影。観葉植物など自然要素を背景に配置。",
            "ソフトなトランジション、明るく爽やかなBGM、テロップは控えめに。",
            "明るい背景、笑顔の表情、グリーン系のアクセント。",
        ),
        Element::Fire => (
            "強い照明で力強さを演出。動的なカメラワーク。",
            "クイックカット、アップテンポなBGM、大胆なテロップ。",
            "高コントラスト、力強い表情、赤・オレンジ系のアクセント。",
        ),
        Element::Earth => (
            "自然光を活用した明るい撮影。シンプルで清潔感のあるセット。",
            "ソフトなトランジション、落ち着いたBGM、テロップは控えめに。",
            "顔のアップ + 明るい笑顔、ベージュ系背景、テキストは大きく読みやすく。",
        ),
        Element::Metal => (
            "クリアな照明、整理されたミニマルなセット。",
            "シャープなカット、洗練されたBGM、テロップは最小限。",
            "シンプルな背景、知的な表情、グレー・白系のトーン。",
        ),
        Element::Water => (
            "柔らかい照明、流動的なカメラワーク。",
            "スムーズなトランジション、知的なBGM、説明的なテロップ。",
            "落ち着いた背景、考え込む表情、青系のアクセント。",
        ),
    };

    ProductionRecommendations {
        thumbnail_style: thumbnail_style.to_string(),
        shooting_style: shooting_style.to_string(),
        editing: editing.to_string(),
    }
}

/// Generates a branding concept from the dominant element and target
/// demographic.
#[must_use]
pub fn generate_world_view(request: &WorldViewRequest) -> WorldViewConcept {
    WorldViewConcept {
        theme: element_themes(request.element)[0].to_string(),
        description: description(request.element, &request.target_age),
        color_palette: detailed_palette(request.element),
        tone_and_manner: tone_and_manner(request.element),
        recommendations: production_recommendations(request.element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(element: Element) -> WorldViewRequest {
        WorldViewRequest {
            element,
            genre: "ゲーム実況".to_string(),
            target_age: "15-30歳".to_string(),
            target_gender: "男性中心（65%）".to_string(),
        }
    }

    #[test]
    fn test_theme_is_first_candidate() {
        let concept = generate_world_view(&request(Element::Wood));
        assert_eq!(concept.theme, "ナチュラル・グロース");
        let concept = generate_world_view(&request(Element::Water));
        assert_eq!(concept.theme, "フロー・インテリジェンス");
    }

    #[test]
    fn test_description_mentions_target_age() {
        let concept = generate_world_view(&request(Element::Fire));
        assert!(concept.description.contains("15-30歳"));
        assert!(concept.description.contains("情熱"));
    }

    #[test]
    fn test_earth_description_interpolates_traits() {
        let concept = generate_world_view(&request(Element::Earth));
        assert!(concept
            .description
            .contains("「安定志向」「誠実」「実直」"));
    }

    #[test]
    fn test_palette_names_pair_with_hex_values() {
        let concept = generate_world_view(&request(Element::Wood));
        assert_eq!(concept.color_palette.main.name, "フレッシュグリーン");
        assert_eq!(concept.color_palette.main.hex, "#66BB6A");
        assert_eq!(concept.color_palette.accent.len(), 2);
        assert_eq!(concept.color_palette.accent[0].usage, "テキスト強調、CTA");
        assert_eq!(concept.color_palette.accent[1].usage, "装飾、アイコン");
        assert_eq!(concept.color_palette.base[0].usage, "背景メイン");
    }

    #[test]
    fn test_every_element_has_complete_tables() {
        for element in Element::ALL {
            let concept = generate_world_view(&request(element));
            assert!(!concept.theme.is_empty());
            assert!(!concept.tone_and_manner.visual_style.is_empty());
            assert!(!concept.recommendations.thumbnail_style.is_empty());
            assert_eq!(
                concept.color_palette.accent.len(),
                2,
                "accent names must pair positionally for {element:?}"
            );
            assert!(concept.color_palette.base.len() >= 2);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            generate_world_view(&request(Element::Metal)),
            generate_world_view(&request(Element::Metal))
        );
    }
}
