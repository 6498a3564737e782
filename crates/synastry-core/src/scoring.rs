//! Pairwise compatibility scorer.
//!
//! Four weighted sub-scores, a deterministic chaos offset, a karmic-debt
//! bonus, and a threshold ladder with two specific-pair overrides. The chaos
//! formula exists so two different pairings landing in the same category still
//! score differently; its constants are load-bearing and must not be "tidied".

use serde::{Deserialize, Serialize};

use crate::content::{are_friendly, triad_of, KARMIC_DAYS};
use crate::profile::NumericProfile;
use crate::reduction::reduce;

/// Display scores for the report. Every field is independently clamped to
/// [0,100] before it lands here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scores {
    pub total: u8,
    pub mental: u8,
    pub emotional: u8,
    pub physical: u8,
    pub soul: u8,
    pub label: String,
    pub vibe: String,
}

/// Full scorer output, including the intermediate sub-scores the derived-metric
/// generators consume. Immutable once built.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub life_path_score: u32,
    pub day_score: u32,
    pub month_score: u32,
    pub soul_score: u32,
    pub chaos_variance: i32,
    pub karmic_bonus: u32,
    pub total: u8,
    pub mental: u8,
    pub emotional: u8,
    pub physical: u8,
    pub soul_display: u8,
    pub label: &'static str,
    pub vibe: &'static str,
}

impl ScoreBreakdown {
    pub fn to_scores(&self) -> Scores {
        Scores {
            total: self.total,
            mental: self.mental,
            emotional: self.emotional,
            physical: self.physical,
            soul: self.soul_display,
            label: self.label.to_string(),
            vibe: self.vibe.to_string(),
        }
    }
}

/// Score two profiles against each other.
pub fn score_pair(a: &NumericProfile, b: &NumericProfile) -> ScoreBreakdown {
    let lp_a = a.life_path;
    let lp_b = b.life_path;

    let life_path_score = tiered(lp_a, lp_b, 90, 80, 30);
    let day_score = tiered(a.reduced_day, b.reduced_day, 95, 85, 40);
    let month_score = month_synergy(a.reduced_month, b.reduced_month);
    let soul_score = matrix_soul(a.center_anchor, b.center_anchor);

    let raw_total = life_path_score as f64 * 0.4
        + day_score as f64 * 0.3
        + month_score as f64 * 0.1
        + soul_score as f64 * 0.2;

    let chaos_variance = chaos(a, b);

    let both_karmic =
        KARMIC_DAYS.contains(&a.date.day) && KARMIC_DAYS.contains(&b.date.day);
    let karmic_bonus = if both_karmic { 5 } else { 0 };

    let total = (raw_total + chaos_variance as f64 + karmic_bonus as f64)
        .round()
        .clamp(0.0, 100.0) as u8;

    let either = |set: &[u32]| set.contains(&lp_a) || set.contains(&lp_b);

    let mental = display(
        0.5 * life_path_score as f64 + 0.5 * month_score as f64,
        if either(&[3, 7, 11]) { 15 } else { 0 },
    );
    let emotional = display(
        0.5 * day_score as f64 + 0.5 * soul_score as f64,
        if either(&[2, 6, 9, 33]) { 15 } else { 0 },
    );
    let physical_bonus =
        (if either(&[8]) { 20 } else { 0 }) + (if either(&[5]) { 10 } else { 0 });
    let physical = display(
        0.6 * day_score as f64 + 0.4 * life_path_score as f64,
        physical_bonus,
    );
    let soul_display = display(
        0.7 * soul_score as f64 + 0.3 * life_path_score as f64,
        if lp_a == lp_b { 15 } else { 0 },
    );

    let (label, vibe) = classify(total, lp_a, lp_b);

    ScoreBreakdown {
        life_path_score,
        day_score,
        month_score,
        soul_score,
        chaos_variance,
        karmic_bonus,
        total,
        mental,
        emotional,
        physical,
        soul_display,
        label,
        vibe,
    }
}

/// Adjacency-table tiering shared by the life-path and day scores:
/// friendly beats identical beats everything else.
fn tiered(a: u32, b: u32, friendly: u32, identical: u32, base: u32) -> u32 {
    if are_friendly(a, b) {
        friendly
    } else if a == b {
        identical
    } else {
        base
    }
}

fn month_synergy(a: u32, b: u32) -> u32 {
    match (triad_of(a), triad_of(b)) {
        (Some(ta), Some(tb)) if ta == tb => 90,
        // Polarity attracts: numerically opposite by 6.
        _ if a.abs_diff(b) == 6 => 80,
        _ => 60,
    }
}

fn matrix_soul(center_a: u32, center_b: u32) -> u32 {
    if center_a == center_b {
        100
    } else if center_a + center_b == 22 {
        95
    } else if matches!(center_a + center_b, 9 | 18) {
        85
    } else {
        60
    }
}

/// Deterministic pseudo-random offset in [-6, +6]. Exact formula is part of
/// the category-boundary contract; see the regression tests.
fn chaos(a: &NumericProfile, b: &NumericProfile) -> i32 {
    let mixed = (a.date.day * 13 + a.date.month * 7) + (b.date.day * 11 + b.date.month * 3);
    (mixed % 13) as i32 - 6
}

fn display(base: f64, bonus: u32) -> u8 {
    (base.round() + bonus as f64).clamp(0.0, 100.0) as u8
}

/// Threshold ladder with the two specific-pair overrides. Overrides are
/// checked first whenever the total sits below 70; the generic thresholds are
/// evaluated in source order after that.
pub fn classify(total: u8, lp_a: u32, lp_b: u32) -> (&'static str, &'static str) {
    if total < 70 {
        let pair = (reduce(lp_a, false), reduce(lp_b, false));
        if matches!(pair, (4, 5) | (5, 4)) {
            return ("Chaos & Order", "Volatile");
        }
        if matches!(pair, (1, 1) | (8, 8)) {
            return ("Ego Collision", "Combustible");
        }
    }
    match total {
        95..=100 => ("Twin Flames", "Ethereal"),
        85..=94 => ("Soulmate Energy", "Magnetic"),
        70..=84 => ("Power Couple", "Electric"),
        55..=69 => ("Slow Burn", "Warm"),
        45..=54 => ("Cosmic Classmates", "Neutral"),
        31..=44 => ("Karmic Lesson", "Turbulent"),
        _ => ("Toxic Magnetism", "Dangerous"),
    }
}
