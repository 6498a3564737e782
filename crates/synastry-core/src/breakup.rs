//! Breakup predictor: chance percentage, risk band, and reason strings.
//!
//! Consumes the scorer's total, the viral triad, and the already-computed red
//! flags — all immutable inputs, so it can run after them in any order
//! relative to the other generators.

use serde::{Deserialize, Serialize};

use crate::flags::SignalFlags;
use crate::viral::ViralBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Strict, non-overlapping banding over the chance percentage.
    pub fn from_chance(chance: u8) -> Self {
        match chance {
            80..=u8::MAX => Self::Critical,
            60..=79 => Self::High,
            40..=59 => Self::Moderate,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakupPrediction {
    pub chance: u8,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
}

/// Keyword fragments matched against the top red flags, with the reason each
/// one contributes.
const KEYWORD_REASONS: [(&str, &str); 7] = [
    ("blind spots", "Neither of you can see the pothole you are both steering into."),
    ("ontrol", "Power struggles rarely retire; they just change venues."),
    ("keep score", "Scorekeeping compounds quietly until someone cashes out."),
    ("different clocks", "Mismatched emotional timing erodes goodwill in small, daily increments."),
    ("heavy lifting", "Chemistry without infrastructure tends to burn through its fuel."),
    ("season pass", "Volatility is entertaining right up until it is exhausting."),
    ("Trauma", "Shared wounds bond fast and heal slow."),
];

const FALLBACK_REASON: &str =
    "No single fault line stands out; if this ends, it will be by drift, not detonation.";

pub fn breakup_prediction(
    total: u8,
    viral: &ViralBreakdown,
    flags: &SignalFlags,
) -> BreakupPrediction {
    let toxicity_bonus: i32 = if viral.toxic >= 70 {
        15
    } else if viral.toxic >= 50 {
        8
    } else {
        0
    };

    let imbalance = viral.lust.abs_diff(viral.logic);
    let imbalance_bonus: i32 = if imbalance >= 40 {
        10
    } else if imbalance >= 25 {
        5
    } else {
        0
    };

    let chance = (100 - total as i32 + toxicity_bonus + imbalance_bonus).clamp(1, 99) as u8;

    let mut reasons: Vec<String> = Vec::new();
    for flag in flags.red.iter().take(3) {
        for (keyword, reason) in KEYWORD_REASONS {
            if flag.contains(keyword) && !reasons.iter().any(|r| r == reason) {
                reasons.push(reason.to_string());
            }
        }
        if reasons.len() >= 2 {
            break;
        }
    }
    reasons.truncate(2);
    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }
    reasons.push(viral_reason(viral));

    BreakupPrediction {
        chance,
        risk_level: RiskLevel::from_chance(chance),
        reasons,
    }
}

/// One sentence driven by the viral stats; always present.
fn viral_reason(viral: &ViralBreakdown) -> String {
    if viral.lust > viral.logic.saturating_add(20) {
        format!(
            "Lust is outvoting logic {}% to {}% — exits here tend to be sudden.",
            viral.lust, viral.logic
        )
    } else if viral.logic > viral.lust.saturating_add(20) {
        format!(
            "Logic is outvoting lust {}% to {}% — exits here tend to be quiet.",
            viral.logic, viral.lust
        )
    } else {
        format!(
            "Heart and head are evenly matched ({}% vs {}%), which keeps exits honest.",
            viral.lust, viral.logic
        )
    }
}
