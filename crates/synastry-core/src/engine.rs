//! Engine entry points: two dates in, one immutable compatibility report out.
//!
//! The pipeline runs one direction: raw dates -> profiles -> scores ->
//! narrative and derived metrics -> a single result object. The ambient clock
//! is captured exactly once per request (`*_now` wrappers) and threaded as an
//! explicit `today` so no request can straddle a midnight boundary.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::breakup::{breakup_prediction, BreakupPrediction};
use crate::config::EngineConfig;
use crate::conflict::{conflict_matrix, ConflictMatrix};
use crate::error::EngineError;
use crate::flags::{signal_flags, SignalFlags};
use crate::narrative::{display_name, resolve, ResolvedNarrative, FALLBACK_NAME_A, FALLBACK_NAME_B};
use crate::profile::{compute_profile, BirthDate, NumericProfile};
use crate::reduction::reduce;
use crate::scoring::{score_pair, Scores};
use crate::variant::select;
use crate::viral::{viral_breakdown, ViralBreakdown};
use crate::content;

/// Denormalized per-person summary carried on the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub date: BirthDate,
    pub life_path: u32,
    pub personal_year: u32,
    pub day_anchor: u32,
}

impl PersonSummary {
    fn from_profile(name: &str, profile: &NumericProfile) -> Self {
        Self {
            name: name.to_string(),
            date: profile.date,
            life_path: profile.life_path,
            personal_year: profile.forecast.personal_year,
            day_anchor: profile.day_anchor,
        }
    }
}

/// One secondary text+score pair (synergy / timing / attitude).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectReading {
    pub score: u8,
    pub text: String,
}

/// The full report. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub person_a: PersonSummary,
    pub person_b: PersonSummary,
    pub scores: Scores,
    pub narrative: ResolvedNarrative,
    pub flags: SignalFlags,
    pub synergy: AspectReading,
    pub timing: AspectReading,
    pub attitude: AspectReading,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viral_breakdown: Option<ViralBreakdown>,
    pub breakup_prediction: BreakupPrediction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_matrix: Option<ConflictMatrix>,
}

/// Compute the full compatibility report for two `YYYY-MM-DD` dates.
pub fn compute_compatibility(
    date_a: &str,
    date_b: &str,
    name_a: Option<&str>,
    name_b: Option<&str>,
    today: NaiveDate,
    config: &EngineConfig,
) -> Result<CompatibilityResult, EngineError> {
    let profile_a = compute_profile(date_a, today)?;
    let profile_b = compute_profile(date_b, today)?;
    let name_a = display_name(name_a, FALLBACK_NAME_A);
    let name_b = display_name(name_b, FALLBACK_NAME_B);

    let breakdown = score_pair(&profile_a, &profile_b);
    tracing::debug!(
        target: "synastry::engine",
        total = breakdown.total,
        label = breakdown.label,
        "pair scored"
    );

    let (narrative, template) =
        resolve(profile_a.life_path, profile_b.life_path, &name_a, &name_b);

    // The viral triad feeds the flag generator and the breakup predictor, so
    // it is always computed; the config toggle only controls whether it is
    // surfaced on the result.
    let viral = viral_breakdown(&profile_a, &profile_b);
    let flags = signal_flags(&profile_a, &profile_b, &breakdown, &viral, template);
    let breakup = breakup_prediction(breakdown.total, &viral, &flags);

    let conflict = if config.conflict_matrix_enabled {
        match conflict_matrix(&profile_a, &profile_b, &name_a, &name_b) {
            Ok(matrix) => Some(matrix),
            Err(err) => {
                tracing::warn!(target: "synastry::engine", %err, "conflict matrix omitted");
                None
            }
        }
    } else {
        None
    };

    let today_iso = today.format("%Y-%m-%d").to_string();

    Ok(CompatibilityResult {
        person_a: PersonSummary::from_profile(&name_a, &profile_a),
        person_b: PersonSummary::from_profile(&name_b, &profile_b),
        scores: breakdown.to_scores(),
        narrative,
        flags,
        synergy: synergy_reading(&profile_a, &profile_b, &today_iso),
        timing: timing_reading(&profile_a, &profile_b, &today_iso),
        attitude: attitude_reading(&profile_a, &profile_b, &today_iso),
        viral_breakdown: config.viral_enabled.then_some(viral),
        breakup_prediction: breakup,
        conflict_matrix: conflict,
    })
}

/// Convenience wrapper: capture today's date once and compute with defaults.
pub fn compute_compatibility_now(
    date_a: &str,
    date_b: &str,
    name_a: Option<&str>,
    name_b: Option<&str>,
) -> Result<CompatibilityResult, EngineError> {
    let today = Utc::now().date_naive();
    compute_compatibility(date_a, date_b, name_a, name_b, today, &EngineConfig::default())
}

/// Convenience wrapper for the standalone profile entry point.
pub fn compute_profile_now(date: &str) -> Result<NumericProfile, EngineError> {
    compute_profile(date, Utc::now().date_naive())
}

// -----------------------------------------------------------------------------
// Secondary aspect readings
// -----------------------------------------------------------------------------

fn pick(variants: &[&str], seed: u32, today_iso: &str) -> String {
    variants[select(seed, today_iso, variants.len())].to_string()
}

fn synergy_reading(a: &NumericProfile, b: &NumericProfile, today_iso: &str) -> AspectReading {
    let seed = reduce(a.life_path + b.life_path, true);
    let spread = a.reduced_day.abs_diff(b.reduced_day) as i32;
    let score = (60 + 4 * (9 - spread)).clamp(0, 100) as u8;
    let variants = if score >= 85 {
        content::SYNERGY_HIGH
    } else if score >= 60 {
        content::SYNERGY_MID
    } else {
        content::SYNERGY_LOW
    };
    AspectReading {
        score,
        text: pick(variants, seed, today_iso),
    }
}

fn timing_reading(a: &NumericProfile, b: &NumericProfile, today_iso: &str) -> AspectReading {
    let py_a = a.forecast.personal_year;
    let py_b = b.forecast.personal_year;
    let score = (95 - 9 * py_a.abs_diff(py_b) as i32).clamp(20, 95) as u8;
    let variants = if score >= 85 {
        content::TIMING_ALIGNED
    } else if score >= 60 {
        content::TIMING_OFFSET
    } else {
        content::TIMING_CLASHING
    };
    AspectReading {
        score,
        text: pick(variants, py_a * 10 + py_b, today_iso),
    }
}

fn attitude_reading(a: &NumericProfile, b: &NumericProfile, today_iso: &str) -> AspectReading {
    let att_a = a.attitude_number;
    let att_b = b.attitude_number;
    let (score, variants) = if att_a == att_b {
        (90, content::ATTITUDE_MATCHED)
    } else if att_a % 2 == att_b % 2 {
        (75, content::ATTITUDE_COMPATIBLE)
    } else {
        (55, content::ATTITUDE_CLASHING)
    };
    AspectReading {
        score,
        text: pick(variants, att_a * 10 + att_b, today_iso),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn compute(a: &str, b: &str) -> CompatibilityResult {
        compute_compatibility(a, b, Some("Ada"), Some("Lin"), today(), &EngineConfig::default())
            .unwrap()
    }

    #[test]
    fn test_full_report_fixture() {
        let r = compute("1990-01-01", "1990-01-01");
        assert_eq!(r.scores.total, 89);
        assert_eq!(r.scores.label, "Soulmate Energy");
        assert_eq!(r.person_a.life_path, 3);
        assert_eq!(r.person_b.life_path, 3);
        assert!(r.narrative.description.contains("Double Strength"));
        assert!(r.viral_breakdown.is_some());
        assert!(r.conflict_matrix.is_some());
        assert!((1..=99).contains(&r.breakup_prediction.chance));
    }

    #[test]
    fn test_invalid_input_surfaces_immediately() {
        let err = compute_compatibility(
            "1990/01/01",
            "1990-01-01",
            None,
            None,
            today(),
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidDateFormat(_)));
    }

    #[test]
    fn test_config_gates_optional_sections() {
        let cfg = EngineConfig {
            viral_enabled: false,
            conflict_matrix_enabled: false,
        };
        let r = compute_compatibility("1990-01-01", "1985-06-21", None, None, today(), &cfg)
            .unwrap();
        assert!(r.viral_breakdown.is_none());
        assert!(r.conflict_matrix.is_none());
        // The gated sections still feed the predictor internally.
        assert!(!r.breakup_prediction.reasons.is_empty());
    }

    #[test]
    fn test_same_day_same_report() {
        let r1 = compute("1990-01-01", "1985-06-21");
        let r2 = compute("1990-01-01", "1985-06-21");
        assert_eq!(
            serde_json::to_string(&r1).unwrap(),
            serde_json::to_string(&r2).unwrap()
        );
    }

    #[test]
    fn test_aspect_scores_in_range() {
        for (a, b) in [
            ("1990-01-01", "1985-06-21"),
            ("1992-02-06", "1984-11-22"),
            ("1913-04-14", "1916-09-19"),
        ] {
            let r = compute(a, b);
            assert!(r.synergy.score <= 100);
            assert!((20..=95).contains(&r.timing.score));
            assert!(matches!(r.attitude.score, 55 | 75 | 90));
            assert!(!r.synergy.text.is_empty());
        }
    }

    #[test]
    fn test_default_names_applied() {
        let r = compute_compatibility(
            "1990-01-01",
            "1985-06-21",
            None,
            Some("  "),
            today(),
            &EngineConfig::default(),
        )
        .unwrap();
        assert_eq!(r.person_a.name, "Person A");
        assert_eq!(r.person_b.name, "Person B");
    }
}
