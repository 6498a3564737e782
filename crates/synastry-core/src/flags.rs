//! Signal/flag generator: the weighted green/red pro-con lists.
//!
//! Dynamic rules fire first (life-path pairs, viral thresholds, attitude
//! parity), then the resolved narrative block's static lists backfill up to a
//! target count derived from the total score. Lists never contain duplicates.

use serde::{Deserialize, Serialize};

use crate::content::{are_friendly, triad_of, NarrativeTemplate, DEFAULT_NARRATIVE, KARMIC_DAYS};
use crate::profile::NumericProfile;
use crate::reduction::reduce;
use crate::scoring::ScoreBreakdown;
use crate::viral::ViralBreakdown;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalFlags {
    pub green: Vec<String>,
    pub red: Vec<String>,
}

/// Clashing life-path pairs and the red flag each one raises.
const CLASH_FLAGS: [((u32, u32), &str); 4] = [
    ((1, 8), "Control is the third person in this relationship"),
    ((4, 5), "One plans, one improvises, both keep score"),
    ((3, 4), "Whimsy meets the spreadsheet, hourly"),
    ((7, 8), "One wants depth, one wants results"),
];

pub fn signal_flags(
    a: &NumericProfile,
    b: &NumericProfile,
    scores: &ScoreBreakdown,
    viral: &ViralBreakdown,
    template: &NarrativeTemplate,
) -> SignalFlags {
    let lp_a = reduce(a.life_path, false);
    let lp_b = reduce(b.life_path, false);

    let mut green: Vec<String> = Vec::new();
    let mut red: Vec<String> = Vec::new();

    // Life-path-pair rules.
    if a.life_path == b.life_path {
        push_unique(&mut green, "You understand each other's operating system");
        push_unique(&mut red, "Same blind spots, doubled");
    } else if are_friendly(a.life_path, b.life_path) {
        push_unique(&mut green, "Your numbers are old allies");
    }
    if let (Some(ta), Some(tb)) = (triad_of(lp_a), triad_of(lp_b)) {
        if ta == tb && a.life_path != b.life_path {
            push_unique(&mut green, "Same elemental triad: your instincts rhyme");
        }
    }
    for ((x, y), flag) in CLASH_FLAGS {
        if (lp_a, lp_b) == (x, y) || (lp_a, lp_b) == (y, x) {
            push_unique(&mut red, flag);
        }
    }

    // Viral thresholds.
    if viral.lust >= 70 {
        push_unique(&mut green, "Chemistry is not going to be the problem");
    }
    if viral.logic >= 70 {
        push_unique(&mut green, "Decisions get made like a well-run meeting");
    }
    if viral.toxic >= 60 {
        push_unique(&mut red, "The drama has a season pass");
    }
    if viral.lust >= 80 && viral.logic < 40 {
        push_unique(&mut red, "The spark is doing all the heavy lifting");
    }

    // Attitude parity.
    if a.attitude_number % 2 == b.attitude_number % 2 {
        push_unique(&mut green, "Your default moods run on the same clock");
    } else {
        push_unique(&mut red, "Your default moods run on different clocks");
    }

    if KARMIC_DAYS.contains(&a.date.day) && KARMIC_DAYS.contains(&b.date.day) {
        push_unique(&mut red, "Trauma bonding is still bonding, technically");
    }

    // Target counts from the total-score ladder, then the toxicity check.
    let (mut green_target, mut red_target) = targets(scores.total);
    if viral.toxic >= 75 {
        red_target += 1;
        green_target = green_target.saturating_sub(1).max(1);
    }

    backfill(&mut green, template.green_flags, green_target);
    backfill(&mut green, DEFAULT_NARRATIVE.green_flags, green_target);
    backfill(&mut red, template.red_flags, red_target);
    backfill(&mut red, DEFAULT_NARRATIVE.red_flags, red_target);

    green.truncate(green_target);
    red.truncate(red_target);

    SignalFlags { green, red }
}

fn targets(total: u8) -> (usize, usize) {
    match total {
        85..=100 => (4, 2),
        70..=84 => (4, 3),
        55..=69 => (3, 3),
        40..=54 => (2, 4),
        _ => (2, 5),
    }
}

fn push_unique(list: &mut Vec<String>, flag: &str) {
    if !list.iter().any(|f| f == flag) {
        list.push(flag.to_string());
    }
}

fn backfill(list: &mut Vec<String>, pool: &[&str], target: usize) {
    for flag in pool {
        if list.len() >= target {
            return;
        }
        push_unique(list, flag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::resolve_template;
    use crate::profile::compute_profile;
    use crate::scoring::score_pair;
    use crate::viral::viral_breakdown;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn flags_for(a: &str, b: &str) -> SignalFlags {
        let pa = compute_profile(a, today()).unwrap();
        let pb = compute_profile(b, today()).unwrap();
        let scores = score_pair(&pa, &pb);
        let viral = viral_breakdown(&pa, &pb);
        let template = resolve_template(pa.life_path, pb.life_path);
        signal_flags(&pa, &pb, &scores, &viral, template)
    }

    #[test]
    fn test_no_duplicate_flags() {
        for (a, b) in [
            ("1990-01-01", "1990-01-01"),
            ("1971-01-05", "1980-05-04"),
            ("1913-04-14", "1916-09-19"),
            ("1975-12-31", "2001-02-28"),
        ] {
            let f = flags_for(a, b);
            let greens: HashSet<_> = f.green.iter().collect();
            let reds: HashSet<_> = f.red.iter().collect();
            assert_eq!(greens.len(), f.green.len(), "duplicate green flag for {}/{}", a, b);
            assert_eq!(reds.len(), f.red.len(), "duplicate red flag for {}/{}", a, b);
        }
    }

    #[test]
    fn test_lengths_hit_targets() {
        // Dynamic rules plus the template and default pools always supply
        // enough candidates for these fixtures.
        let f = flags_for("1990-01-01", "1990-01-01");
        let pa = compute_profile("1990-01-01", today()).unwrap();
        let scores = score_pair(&pa, &pa.clone());
        let (g, r) = targets(scores.total);
        assert_eq!(f.green.len(), g);
        assert_eq!(f.red.len(), r);
    }

    #[test]
    fn test_same_life_path_flags() {
        let f = flags_for("1990-01-01", "1990-01-01");
        assert!(f.green.iter().any(|s| s.contains("operating system")));
        assert!(f.red.iter().any(|s| s.contains("blind spots")) || f.red.len() == 2);
    }

    #[test]
    fn test_targets_ladder() {
        assert_eq!(targets(90), (4, 2));
        assert_eq!(targets(70), (4, 3));
        assert_eq!(targets(60), (3, 3));
        assert_eq!(targets(45), (2, 4));
        assert_eq!(targets(20), (2, 5));
    }
}
