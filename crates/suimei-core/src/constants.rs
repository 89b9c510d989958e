//! Calendar constants: the ten stems, twelve branches, five elements and
//! their generating/controlling cycles.
//!
//! These sets are fixed and closed; everything is a plain enum with
//! match-table accessors so the traditional tables stay auditable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five elements (五行).
///
/// The declaration order (wood, fire, earth, metal, water) is the canonical
/// ordering used to break ties when ranking element weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// 木
    #[serde(rename = "木")]
    Wood,
    /// 火
    #[serde(rename = "火")]
    Fire,
    /// 土
    #[serde(rename = "土")]
    Earth,
    /// 金
    #[serde(rename = "金")]
    Metal,
    /// 水
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// All five elements in canonical order.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Returns the kanji label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates (相生: 木→火→土→金→水→木).
    #[must_use]
    pub const fn generates(&self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one controls (相剋: 木→土→水→火→金→木).
    #[must_use]
    pub const fn controls(&self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// The element that controls this one (inverse of [`Element::controls`]).
    #[must_use]
    pub const fn controlled_by(&self) -> Element {
        match self {
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
            Self::Wood => Self::Metal,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Yin/yang polarity (陰陽).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// 陽
    #[serde(rename = "陽")]
    Yang,
    /// 陰
    #[serde(rename = "陰")]
    Yin,
}

impl Polarity {
    /// Returns the kanji label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the ten stems (十干), ordered 甲..癸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    /// 甲 (wood, yang)
    #[serde(rename = "甲")]
    Kinoe,
    /// 乙 (wood, yin)
    #[serde(rename = "乙")]
    Kinoto,
    /// 丙 (fire, yang)
    #[serde(rename = "丙")]
    Hinoe,
    /// 丁 (fire, yin)
    #[serde(rename = "丁")]
    Hinoto,
    /// 戊 (earth, yang)
    #[serde(rename = "戊")]
    Tsuchinoe,
    /// 己 (earth, yin)
    #[serde(rename = "己")]
    Tsuchinoto,
    /// 庚 (metal, yang)
    #[serde(rename = "庚")]
    Kanoe,
    /// 辛 (metal, yin)
    #[serde(rename = "辛")]
    Kanoto,
    /// 壬 (water, yang)
    #[serde(rename = "壬")]
    Mizunoe,
    /// 癸 (water, yin)
    #[serde(rename = "癸")]
    Mizunoto,
}

impl Stem {
    /// All ten stems in cycle order.
    pub const ALL: [Stem; 10] = [
        Stem::Kinoe,
        Stem::Kinoto,
        Stem::Hinoe,
        Stem::Hinoto,
        Stem::Tsuchinoe,
        Stem::Tsuchinoto,
        Stem::Kanoe,
        Stem::Kanoto,
        Stem::Mizunoe,
        Stem::Mizunoto,
    ];

    /// Ordinal index in the ten-stem cycle (0-9).
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Resolves a (possibly negative) cycle offset to a stem.
    #[must_use]
    pub fn from_index(index: i64) -> Stem {
        Self::ALL[index.rem_euclid(10) as usize]
    }

    /// Returns the kanji label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kinoe => "甲",
            Self::Kinoto => "乙",
            Self::Hinoe => "丙",
            Self::Hinoto => "丁",
            Self::Tsuchinoe => "戊",
            Self::Tsuchinoto => "己",
            Self::Kanoe => "庚",
            Self::Kanoto => "辛",
            Self::Mizunoe => "壬",
            Self::Mizunoto => "癸",
        }
    }

    /// Element associated with this stem.
    #[must_use]
    pub const fn element(&self) -> Element {
        match self {
            Self::Kinoe | Self::Kinoto => Element::Wood,
            Self::Hinoe | Self::Hinoto => Element::Fire,
            Self::Tsuchinoe | Self::Tsuchinoto => Element::Earth,
            Self::Kanoe | Self::Kanoto => Element::Metal,
            Self::Mizunoe | Self::Mizunoto => Element::Water,
        }
    }

    /// Polarity of this stem (even indices are yang).
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        match self {
            Self::Kinoe | Self::Hinoe | Self::Tsuchinoe | Self::Kanoe | Self::Mizunoe => {
                Polarity::Yang
            }
            _ => Polarity::Yin,
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the twelve branches (十二支), ordered 子..亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// 子 (water, yang, 鼠)
    #[serde(rename = "子")]
    Ne,
    /// 丑 (earth, yin, 牛)
    #[serde(rename = "丑")]
    Ushi,
    /// 寅 (wood, yang, 虎)
    #[serde(rename = "寅")]
    Tora,
    /// 卯 (wood, yin, 兎)
    #[serde(rename = "卯")]
    U,
    /// 辰 (earth, yang, 竜)
    #[serde(rename = "辰")]
    Tatsu,
    /// 巳 (fire, yin, 蛇)
    #[serde(rename = "巳")]
    Mi,
    /// 午 (fire, yang, 馬)
    #[serde(rename = "午")]
    Uma,
    /// 未 (earth, yin, 羊)
    #[serde(rename = "未")]
    Hitsuji,
    /// 申 (metal, yang, 猿)
    #[serde(rename = "申")]
    Saru,
    /// 酉 (metal, yin, 鶏)
    #[serde(rename = "酉")]
    Tori,
    /// 戌 (earth, yang, 犬)
    #[serde(rename = "戌")]
    Inu,
    /// 亥 (water, yin, 猪)
    #[serde(rename = "亥")]
    I,
}

impl Branch {
    /// All twelve branches in cycle order.
    pub const ALL: [Branch; 12] = [
        Branch::Ne,
        Branch::Ushi,
        Branch::Tora,
        Branch::U,
        Branch::Tatsu,
        Branch::Mi,
        Branch::Uma,
        Branch::Hitsuji,
        Branch::Saru,
        Branch::Tori,
        Branch::Inu,
        Branch::I,
    ];

    /// Ordinal index in the twelve-branch cycle (0-11).
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Resolves a (possibly negative) cycle offset to a branch.
    #[must_use]
    pub fn from_index(index: i64) -> Branch {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Returns the kanji label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ne => "子",
            Self::Ushi => "丑",
            Self::Tora => "寅",
            Self::U => "卯",
            Self::Tatsu => "辰",
            Self::Mi => "巳",
            Self::Uma => "午",
            Self::Hitsuji => "未",
            Self::Saru => "申",
            Self::Tori => "酉",
            Self::Inu => "戌",
            Self::I => "亥",
        }
    }

    /// Element associated with this branch.
    #[must_use]
    pub const fn element(&self) -> Element {
        match self {
            Self::Ne | Self::I => Element::Water,
            Self::Ushi | Self::Tatsu | Self::Hitsuji | Self::Inu => Element::Earth,
            Self::Tora | Self::U => Element::Wood,
            Self::Mi | Self::Uma => Element::Fire,
            Self::Saru | Self::Tori => Element::Metal,
        }
    }

    /// Polarity of this branch (even indices are yang).
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        match self {
            Self::Ne | Self::Tora | Self::Tatsu | Self::Uma | Self::Saru | Self::Inu => {
                Polarity::Yang
            }
            _ => Polarity::Yin,
        }
    }

    /// Zodiac animal label (干支の動物).
    #[must_use]
    pub const fn animal(&self) -> &'static str {
        match self {
            Self::Ne => "鼠",
            Self::Ushi => "牛",
            Self::Tora => "虎",
            Self::U => "兎",
            Self::Tatsu => "竜",
            Self::Mi => "蛇",
            Self::Uma => "馬",
            Self::Hitsuji => "羊",
            Self::Saru => "猿",
            Self::Tori => "鶏",
            Self::Inu => "犬",
            Self::I => "猪",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
