//! Conflict matrix: how the pair fights, who starts it, and who apologizes.
//!
//! Built from the fixed per-life-path fight-profile table. Master life paths
//! fall back through single-digit reduction before lookup; a miss after that
//! is a soft `MissingContentEntry` and the whole section is omitted upstream.

use serde::{Deserialize, Serialize};

use crate::content::{fight_profile, FightProfile, ORDER_VS_CHAOS_TITLE};
use crate::error::EngineError;
use crate::profile::NumericProfile;
use crate::reduction::reduce;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictIntensity {
    Simmering,
    Heated,
    Explosive,
    Nuclear,
}

impl ConflictIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simmering => "simmering",
            Self::Heated => "heated",
            Self::Explosive => "explosive",
            Self::Nuclear => "nuclear",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictMatrix {
    /// Display name of whoever starts it, or "Both".
    pub instigator: String,
    pub intensity: ConflictIntensity,
    pub style_title: String,
    pub weapon_a: String,
    pub weapon_b: String,
    pub resolution: String,
    pub recovery_time: String,
}

pub fn conflict_matrix(
    a: &NumericProfile,
    b: &NumericProfile,
    name_a: &str,
    name_b: &str,
) -> Result<ConflictMatrix, EngineError> {
    let lp_a = reduce(a.life_path, false);
    let lp_b = reduce(b.life_path, false);
    let profile_a = lookup(a.life_path)?;
    let profile_b = lookup(b.life_path)?;

    let gap = profile_a.aggression.abs_diff(profile_b.aggression);
    let instigator = if gap > 20 {
        if profile_a.aggression > profile_b.aggression {
            name_a.to_string()
        } else {
            name_b.to_string()
        }
    } else {
        "Both".to_string()
    };

    let intensity = intensity_for(profile_a, profile_b, name_a, name_b);

    let style_title = if matches!((lp_a, lp_b), (4, 5) | (5, 4)) {
        ORDER_VS_CHAOS_TITLE.to_string()
    } else {
        format!("{} vs {}", profile_a.style, profile_b.style)
    };

    Ok(ConflictMatrix {
        instigator,
        intensity,
        style_title,
        weapon_a: profile_a.weapon.to_string(),
        weapon_b: profile_b.weapon.to_string(),
        resolution: resolution_for(profile_a, profile_b, name_a, name_b),
        recovery_time: recovery_time(profile_a, profile_b),
    })
}

/// Fight-profile lookup with single-digit reduction fallback.
fn lookup(life_path: u32) -> Result<&'static FightProfile, EngineError> {
    fight_profile(life_path)
        .or_else(|| fight_profile(reduce(life_path, false)))
        .ok_or(EngineError::MissingContentEntry("fight profile"))
}

fn intensity_for(
    a: &FightProfile,
    b: &FightProfile,
    name_a: &str,
    name_b: &str,
) -> ConflictIntensity {
    // Two people with the same name fighting is its own category of event.
    if !name_a.is_empty() && name_a.eq_ignore_ascii_case(name_b) {
        return ConflictIntensity::Nuclear;
    }
    if a.aggression >= 80 && b.aggression >= 80 {
        return ConflictIntensity::Explosive;
    }
    if a.volatility.max(b.volatility) >= 80 || a.aggression + b.aggression >= 140 {
        return ConflictIntensity::Heated;
    }
    ConflictIntensity::Simmering
}

fn resolution_for(a: &FightProfile, b: &FightProfile, name_a: &str, name_b: &str) -> String {
    if a.recovery < 30 && b.recovery < 30 {
        return "Nobody apologizes. The fight is archived, not resolved, and both parties \
                pretend the archive doesn't exist."
            .to_string();
    }
    if a.recovery == b.recovery {
        return "Apologies arrive simultaneously and collide mid-air.".to_string();
    }
    // Whoever recovers faster apologizes first.
    let (first, other) = if a.recovery > b.recovery {
        (name_a, name_b)
    } else {
        (name_b, name_a)
    };
    format!(
        "{} apologizes first — not from weakness, but because {} is still composing a rebuttal.",
        first, other
    )
}

/// Recovery window is paced by the slower side.
fn recovery_time(a: &FightProfile, b: &FightProfile) -> String {
    match a.recovery.min(b.recovery) {
        80..=u32::MAX => "Hours. Grudges can't find purchase here.".to_string(),
        60..=79 => "A day or two of static, then normal programming resumes.".to_string(),
        40..=59 => "About a week, with intermittent aftershocks.".to_string(),
        _ => "Geological timescales. Bring provisions.".to_string(),
    }
}
