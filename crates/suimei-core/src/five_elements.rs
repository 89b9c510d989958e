//! Five-element balance analysis over a four-pillar chart.

use crate::calendar::FourPillars;
use crate::constants::Element;
use serde::{Deserialize, Serialize};

/// Weight contributed by each pillar's stem.
pub const STEM_WEIGHT: f64 = 1.0;

/// Weight contributed by each pillar's branch (地支はやや軽め).
pub const BRANCH_WEIGHT: f64 = 0.7;

/// Accumulated element weights for a chart, with the strongest and weakest
/// element singled out.
///
/// The five weights always sum to exactly 8.0 (4 pillars × (1.0 + 0.7)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiveElementsBalance {
    /// 木 weight
    pub wood: f64,
    /// 火 weight
    pub fire: f64,
    /// 土 weight
    pub earth: f64,
    /// 金 weight
    pub metal: f64,
    /// 水 weight
    pub water: f64,
    /// Strongest element
    pub dominant: Element,
    /// Weakest element
    pub weak: Element,
}

impl FiveElementsBalance {
    /// Weight of a single element.
    #[must_use]
    pub fn weight(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }
}

/// Sums weighted element occurrences across the four pillars and ranks them.
///
/// Ties are resolved by the canonical element order (木火土金水): the ranking
/// is seeded in that order and sorted with a stable descending sort, so the
/// dominant element is the canonically first of the top weight group and the
/// weak element is the canonically last of the bottom group.
#[must_use]
pub fn analyze_five_elements(pillars: &FourPillars) -> FiveElementsBalance {
    let mut totals = [0.0f64; 5];
    for pillar in [&pillars.year, &pillars.month, &pillars.day, &pillars.hour] {
        totals[pillar.stem.element() as usize] += STEM_WEIGHT;
        totals[pillar.branch.element() as usize] += BRANCH_WEIGHT;
    }

    let mut ranked: Vec<(Element, f64)> = Element::ALL
        .iter()
        .map(|&element| (element, totals[element as usize]))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    FiveElementsBalance {
        wood: totals[Element::Wood as usize],
        fire: totals[Element::Fire as usize],
        earth: totals[Element::Earth as usize],
        metal: totals[Element::Metal as usize],
        water: totals[Element::Water as usize],
        dominant: ranked[0].0,
        weak: ranked[ranked.len() - 1].0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{compute_chart, FourPillars, Pillar};
    use crate::constants::{Branch, Stem};
    use chrono::NaiveDate;

    fn chart(y: i32, m: u32, d: u32, hour: u32) -> FourPillars {
        compute_chart(NaiveDate::from_ymd_opt(y, m, d).unwrap(), hour)
    }

    #[test]
    fn test_weights_sum_to_eight() {
        for (y, m, d, h) in [
            (1924, 1, 1, 0),
            (1990, 5, 15, 14),
            (2000, 2, 29, 23),
            (1899, 12, 31, 12),
        ] {
            let balance = analyze_five_elements(&chart(y, m, d, h));
            let sum =
                balance.wood + balance.fire + balance.earth + balance.metal + balance.water;
            assert!((sum - 8.0).abs() < 1e-9, "sum was {sum}");
        }
    }

    #[test]
    fn test_weights_are_non_negative() {
        let balance = analyze_five_elements(&chart(1990, 5, 15, 14));
        for element in Element::ALL {
            assert!(balance.weight(element) >= 0.0);
        }
    }

    #[test]
    fn test_dominant_and_weak_are_extremes() {
        let balance = analyze_five_elements(&chart(1987, 3, 21, 9));
        for element in Element::ALL {
            assert!(balance.weight(balance.dominant) >= balance.weight(element));
            assert!(balance.weight(balance.weak) <= balance.weight(element));
        }
    }

    #[test]
    fn test_single_element_chart() {
        // 甲寅 on every pillar: wood stems and wood branches only
        let pillar = Pillar {
            stem: Stem::Kinoe,
            branch: Branch::Tora,
        };
        let pillars = FourPillars {
            year: pillar,
            month: pillar,
            day: pillar,
            hour: pillar,
        };
        let balance = analyze_five_elements(&pillars);
        assert_eq!(balance.wood, 8.0);
        assert_eq!(balance.fire, 0.0);
        assert_eq!(balance.dominant, Element::Wood);
        // The remaining four are tied at zero; canonical order puts 水 last
        assert_eq!(balance.weak, Element::Water);
    }

    #[test]
    fn test_tie_break_follows_canonical_order() {
        // 甲子: wood stem, water branch; 丙申: fire stem, metal branch;
        // 戊寅: earth stem, wood branch; 庚午: metal stem, fire branch.
        // Totals: wood/fire/metal tie at 1.7, earth 1.0, water 0.7.
        let pillars = FourPillars {
            year: Pillar {
                stem: Stem::Kinoe,
                branch: Branch::Ne,
            },
            month: Pillar {
                stem: Stem::Hinoe,
                branch: Branch::Saru,
            },
            day: Pillar {
                stem: Stem::Tsuchinoe,
                branch: Branch::Tora,
            },
            hour: Pillar {
                stem: Stem::Kanoe,
                branch: Branch::Uma,
            },
        };
        let balance = analyze_five_elements(&pillars);
        // 木 wins the three-way tie at the top by canonical order
        assert_eq!(balance.dominant, Element::Wood);
        assert_eq!(balance.weak, Element::Water);
    }

    #[test]
    fn test_idempotent() {
        let pillars = chart(1995, 8, 3, 6);
        assert_eq!(
            analyze_five_elements(&pillars),
            analyze_five_elements(&pillars)
        );
    }
}
