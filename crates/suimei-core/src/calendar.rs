//! Pillar calculation from a Gregorian birth date.
//!
//! A simplified fixed-epoch model: year/month boundaries follow the civil
//! calendar rather than solar terms. Reference anchors are 1924 (甲子 year)
//! and 1900-01-01 (庚子 day).

use crate::constants::{Branch, Stem};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    /// Stem (天干)
    pub stem: Stem,
    /// Branch (地支)
    pub branch: Branch,
}

/// The four pillars of a birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    /// Year pillar (年柱)
    pub year: Pillar,
    /// Month pillar (月柱)
    pub month: Pillar,
    /// Day pillar (日柱)
    pub day: Pillar,
    /// Hour pillar (時柱)
    pub hour: Pillar,
}

/// Reference year whose pillar is 甲子 (stem 0, branch 0).
const BASE_YEAR: i64 = 1924;

/// Month-stem starting index by `year stem index % 5` (五虎遁).
/// 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
const MONTH_STEM_BASE: [i64; 5] = [2, 4, 6, 8, 0];

/// Hour-stem starting index by `day stem index % 5` (五鼠遁).
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
const HOUR_STEM_BASE: [i64; 5] = [0, 2, 4, 6, 8];

/// Day-pillar reference date: 1900-01-01 is a 庚子 day (stem 6, branch 0).
fn day_reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid reference date")
}

/// Computes the year pillar for a calendar year.
#[must_use]
pub fn year_pillar(year: i32) -> Pillar {
    let offset = i64::from(year) - BASE_YEAR;
    Pillar {
        stem: Stem::from_index(offset),
        branch: Branch::from_index(offset),
    }
}

/// Computes the month pillar for a calendar year and month (1-12).
///
/// The first month is anchored on the 寅 branch (index 2); the starting stem
/// cycles with the year stem.
#[must_use]
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let year_stem = year_pillar(year).stem;
    let base = MONTH_STEM_BASE[year_stem.index() % 5];
    Pillar {
        stem: Stem::from_index(base + i64::from(month) - 1),
        branch: Branch::from_index(i64::from(month) + 1),
    }
}

/// Computes the day pillar for a calendar date.
///
/// Both indices advance by exactly one per calendar day, so the computation
/// stays correct (via euclidean remainder) for dates before the reference.
#[must_use]
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let days = date.signed_duration_since(day_reference()).num_days();
    Pillar {
        stem: Stem::from_index(6 + days),
        branch: Branch::from_index(days),
    }
}

/// Computes the hour pillar from the day pillar and an hour of day (0-23).
///
/// Hours map to two-hour branch blocks starting at 23:00 (子の刻), so both
/// 23 and 0 land on branch 子.
#[must_use]
pub fn hour_pillar(day: Pillar, hour: u32) -> Pillar {
    let base = HOUR_STEM_BASE[day.stem.index() % 5];
    let branch_index = i64::from((hour + 1) / 2) % 12;
    Pillar {
        stem: Stem::from_index(base + branch_index),
        branch: Branch::from_index(branch_index),
    }
}

/// Computes the full four-pillar chart for a birth date and hour (0-23).
#[must_use]
pub fn compute_chart(birth_date: NaiveDate, birth_hour: u32) -> FourPillars {
    use chrono::Datelike;

    let year = year_pillar(birth_date.year());
    let month = month_pillar(birth_date.year(), birth_date.month());
    let day = day_pillar(birth_date);
    let hour = hour_pillar(day, birth_hour);

    FourPillars {
        year,
        month,
        day,
        hour,
    }
}
