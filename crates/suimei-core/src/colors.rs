//! Color affinity and palettes derived from the dominant element.
//!
//! Favorability follows the element cycles: colors of the dominant element
//! and of the element it generates are favorable, colors of the element that
//! controls the dominant one are unfavorable, the remaining two are neutral.

use crate::constants::Element;
use serde::{Deserialize, Serialize};

/// Favorable / neutral / unfavorable hex color lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAffinity {
    /// 吉色
    pub favorable: Vec<String>,
    /// 中性色
    pub neutral: Vec<String>,
    /// 凶色
    pub unfavorable: Vec<String>,
}

/// Recommended usage palette for a dominant element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Main color hex
    pub main: String,
    /// Accent color hexes
    pub accent: Vec<String>,
    /// Base color hexes
    pub base: Vec<String>,
}

/// Representative hex colors for an element.
#[must_use]
pub const fn element_colors(element: Element) -> &'static [&'static str] {
    match element {
        // 緑系
        Element::Wood => &["#4CAF50", "#8BC34A", "#66BB6A", "#81C784", "#A5D6A7"],
        // 赤系
        Element::Fire => &["#F44336", "#FF5722", "#E91E63", "#FF6F00", "#FF8A65"],
        // 黄系
        Element::Earth => &["#FFC107", "#FF9800", "#FFEB3B", "#FDD835", "#FFE082"],
        // 白・グレー系
        Element::Metal => &["#9E9E9E", "#BDBDBD", "#FFFFFF", "#E0E0E0", "#CFD8DC"],
        // 青系
        Element::Water => &["#2196F3", "#03A9F4", "#00BCD4", "#0288D1", "#4FC3F7"],
    }
}

/// Classifies element colors into favorable/neutral/unfavorable for a
/// dominant element.
#[must_use]
pub fn color_affinity(dominant: Element) -> ColorAffinity {
    let generated = dominant.generates();
    let controller = dominant.controlled_by();

    let favorable = [dominant, generated]
        .iter()
        .flat_map(|&e| element_colors(e))
        .map(ToString::to_string)
        .collect();

    let unfavorable = element_colors(controller)
        .iter()
        .map(ToString::to_string)
        .collect();

    let neutral = Element::ALL
        .iter()
        .filter(|&&e| e != dominant && e != generated && e != controller)
        .flat_map(|&e| element_colors(e))
        .map(ToString::to_string)
        .collect();

    ColorAffinity {
        favorable,
        neutral,
        unfavorable,
    }
}

/// Recommended usage palette for a dominant element.
#[must_use]
pub fn color_palette(dominant: Element) -> ColorPalette {
    let (main, accent, base): (&str, &[&str], &[&str]) = match dominant {
        // メイン: 若草色 / アクセント: ライムグリーン、黄色 / ベース: 白、ライトグリーン
        Element::Wood => (
            "#66BB6A",
            &["#8BC34A", "#FDD835"],
            &["#FFFFFF", "#F5F5F5", "#E8F5E9"],
        ),
        // メイン: オレンジ / アクセント: 赤、黄色 / ベース: 白、淡いオレンジ
        Element::Fire => (
            "#FF6F00",
            &["#F44336", "#FFEB3B"],
            &["#FFFFFF", "#FFF3E0", "#FFEBEE"],
        ),
        // メイン: ウォームベージュ / アクセント: ダスティローズ、セージグリーン
        Element::Earth => ("#E8D5C4", &["#D4A5A5", "#9CAF88"], &["#FAF7F2", "#E5E5E5"]),
        // メイン: ブルーグレー / アクセント: グレー / ベース: 白
        Element::Metal => (
            "#CFD8DC",
            &["#9E9E9E", "#BDBDBD"],
            &["#FFFFFF", "#FAFAFA", "#ECEFF1"],
        ),
        // メイン: 深い青 / アクセント: 水色、シアン / ベース: 白、淡い青
        Element::Water => (
            "#0288D1",
            &["#4FC3F7", "#00BCD4"],
            &["#FFFFFF", "#E1F5FE", "#B3E5FC"],
        ),
    };

    ColorPalette {
        main: main.to_string(),
        accent: accent.iter().map(ToString::to_string).collect(),
        base: base.iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affinity_partitions_all_colors() {
        for element in Element::ALL {
            let affinity = color_affinity(element);
            // 2 favorable elements + 2 neutral + 1 unfavorable, 5 colors each
            assert_eq!(affinity.favorable.len(), 10);
            assert_eq!(affinity.neutral.len(), 10);
            assert_eq!(affinity.unfavorable.len(), 5);
        }
    }

    #[test]
    fn test_wood_affinity_cycles() {
        let affinity = color_affinity(Element::Wood);
        // Wood generates fire: red tones are favorable
        assert!(affinity.favorable.contains(&"#F44336".to_string()));
        // Metal controls wood: grey tones are unfavorable
        assert!(affinity.unfavorable.contains(&"#9E9E9E".to_string()));
        // Earth and water end up neutral
        assert!(affinity.neutral.contains(&"#FFC107".to_string()));
        assert!(affinity.neutral.contains(&"#2196F3".to_string()));
    }

    #[test]
    fn test_every_element_has_a_palette() {
        for element in Element::ALL {
            let palette = color_palette(element);
            assert!(palette.main.starts_with('#'));
            assert_eq!(palette.accent.len(), 2);
            assert!(palette.base.len() >= 2);
        }
    }

    #[test]
    fn test_palette_is_idempotent() {
        assert_eq!(color_palette(Element::Fire), color_palette(Element::Fire));
    }
}
