//! Viral breakdown: the lust/logic/toxic percentage triad.
//!
//! Three independently-clamped percentages built from additive membership
//! rules, plus one insight sentence chosen by a first-match decision tree.
//! The bonus constants are tuned flavor numbers; preserve them exactly.

use serde::{Deserialize, Serialize};

use crate::content::KARMIC_DAYS;
use crate::profile::NumericProfile;
use crate::reduction::reduce;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViralBreakdown {
    pub lust: u8,
    pub logic: u8,
    pub toxic: u8,
    pub insight: String,
}

/// Reduced days that read as magnetic in the lust rules.
const LUST_DAYS: [u32; 5] = [5, 6, 8, 9, 11];
/// Reduced days that read as deliberate in the logic rules.
const LOGIC_DAYS: [u32; 3] = [1, 4, 7];
/// Life paths that read as structural in the logic rules.
const LOGIC_PATHS: [u32; 4] = [4, 7, 8, 22];

pub fn viral_breakdown(a: &NumericProfile, b: &NumericProfile) -> ViralBreakdown {
    let lp_pair = (reduce(a.life_path, false), reduce(b.life_path, false));
    let either_day = |set: &[u32]| set.contains(&a.reduced_day) || set.contains(&b.reduced_day);
    let both_days = |set: &[u32]| set.contains(&a.reduced_day) && set.contains(&b.reduced_day);
    let either_path = |set: &[u32]| set.contains(&a.life_path) || set.contains(&b.life_path);

    let mut lust: i32 = 40;
    if either_day(&LUST_DAYS) {
        lust += 20;
    }
    if matches!(lp_pair, (6, 9) | (9, 6)) {
        lust += 40;
    }
    if either_path(&[5, 8]) {
        lust += 15;
    }
    if both_days(&LUST_DAYS) {
        lust += 10;
    }
    let lust = lust.clamp(10, 99) as u8;

    let mut logic: i32 = 35;
    if either_path(&LOGIC_PATHS) {
        logic += 25;
    }
    if a.attitude_number == b.attitude_number {
        logic += 20;
    }
    if either_day(&LOGIC_DAYS) {
        logic += 10;
    }
    let logic = logic.clamp(5, 99) as u8;

    let mut toxic: i32 = 20;
    if matches!(lp_pair, (1, 1) | (8, 8) | (1, 8) | (8, 1)) {
        toxic += 25;
    }
    if KARMIC_DAYS.contains(&a.date.day) && KARMIC_DAYS.contains(&b.date.day) {
        toxic += 20;
    }
    if matches!(lp_pair, (4, 5) | (5, 4)) {
        toxic += 15;
    }
    if either_path(&[5]) {
        toxic += 10;
    }
    let toxic = toxic.clamp(5, 99) as u8;

    ViralBreakdown {
        lust,
        logic,
        toxic,
        insight: insight_for(lust, logic, toxic).to_string(),
    }
}

/// First matching branch wins; branches are mutually exclusive by the
/// construction of the thresholds in source order.
fn insight_for(lust: u8, logic: u8, toxic: u8) -> &'static str {
    if toxic >= 70 {
        "The chemistry is real and so is the wreckage — this is a notifications-off situation."
    } else if lust >= 80 && logic < 40 {
        "All spark, no blueprint: incredible weekends, undocumented weekdays."
    } else if logic >= 80 && lust < 40 {
        "A spreadsheet romance — flawless on paper, waiting on a pulse."
    } else if lust >= 70 && logic >= 70 {
        "Dangerously well-rounded: the heart and the head voted the same way for once."
    } else {
        "A balanced blend — fewer fireworks, more slow-release compatibility."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::compute_profile;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn breakdown(a: &str, b: &str) -> ViralBreakdown {
        let pa = compute_profile(a, today()).unwrap();
        let pb = compute_profile(b, today()).unwrap();
        viral_breakdown(&pa, &pb)
    }

    #[test]
    fn test_bands_always_respected() {
        for (a, b) in [
            ("1990-01-01", "1990-01-01"),
            ("1975-06-09", "1984-09-06"),
            ("1913-04-14", "1916-09-19"),
            ("1999-12-31", "2001-02-28"),
        ] {
            let v = breakdown(a, b);
            assert!((10..=99).contains(&v.lust), "lust {} out of band", v.lust);
            assert!((5..=99).contains(&v.logic), "logic {} out of band", v.logic);
            assert!((5..=99).contains(&v.toxic), "toxic {} out of band", v.toxic);
            assert!(!v.insight.is_empty());
        }
    }

    #[test]
    fn test_six_nine_pair_spikes_lust() {
        // 1971-01-05 digit-sums to 24 -> 6; 1980-05-04 digit-sums to 27 -> 9.
        let six = compute_profile("1971-01-05", today()).unwrap();
        assert_eq!(six.life_path, 6);
        let nine = compute_profile("1980-05-04", today()).unwrap();
        assert_eq!(nine.life_path, 9);
        let v = viral_breakdown(&six, &nine);
        // base 40 + 40 (6/9 pair) at minimum.
        assert!(v.lust >= 80, "6/9 pairing should spike lust, got {}", v.lust);
    }

    #[test]
    fn test_insight_tree_first_match() {
        assert!(insight_for(90, 90, 75).contains("notifications-off"));
        assert!(insight_for(85, 30, 10).contains("All spark"));
        assert!(insight_for(20, 85, 10).contains("spreadsheet"));
        assert!(insight_for(75, 75, 10).contains("well-rounded"));
        assert!(insight_for(50, 50, 10).contains("balanced blend"));
    }

    #[test]
    fn test_symmetric() {
        let v1 = breakdown("1971-01-05", "1980-05-04");
        let v2 = breakdown("1980-05-04", "1971-01-05");
        assert_eq!(v1.lust, v2.lust);
        assert_eq!(v1.logic, v2.logic);
        assert_eq!(v1.toxic, v2.toxic);
    }
}
