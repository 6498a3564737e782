//! Symmetric narrative resolver.
//!
//! The pair table is populated in one direction only; resolution tries the
//! forward key, then the reverse, then the default block — an explicit,
//! testable order rather than incidental map behavior. The selected template
//! is read-only: the resolver builds a fresh `ResolvedNarrative` field by
//! field, so the canonical table can never be corrupted by a caller.

use serde::{Deserialize, Serialize};

use crate::content::{
    GossipTemplate, NarrativeTemplate, DEFAULT_NARRATIVE, GOSSIP_ARGUMENT_STYLES,
    GOSSIP_NARRATIVES, GOSSIP_WHO_APOLOGIZES, PAIR_INDEX,
};

/// Gossip block, synthesized when the template lacks one so every pairing has
/// gossip content even though the static table covers only part of the space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gossip {
    pub argument_style: String,
    pub who_apologizes: String,
    pub narrative: String,
}

/// Narrative content with names substituted. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedNarrative {
    pub title: String,
    pub description: String,
    pub gift: String,
    pub challenge: String,
    pub growth: String,
    pub interaction: String,
    pub truth: String,
    pub soul_teaching: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viral: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep: Option<String>,
    pub gossip: Gossip,
}

/// Fallback display names when a caller passes nothing (or blanks).
pub const FALLBACK_NAME_A: &str = "Person A";
pub const FALLBACK_NAME_B: &str = "Person B";

/// Normalize an optional display name.
pub fn display_name(name: Option<&str>, fallback: &'static str) -> String {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => fallback.to_string(),
    }
}

/// Ordered template lookup: forward key, reverse key, default.
pub fn resolve_template(lp_a: u32, lp_b: u32) -> &'static NarrativeTemplate {
    PAIR_INDEX
        .get(&(lp_a, lp_b))
        .or_else(|| PAIR_INDEX.get(&(lp_b, lp_a)))
        .copied()
        .unwrap_or(&DEFAULT_NARRATIVE)
}

/// Resolve the narrative for a life-path pair and substitute display names.
///
/// Returns the built narrative plus the template it came from; the template
/// reference feeds the flag generator's static backfill lists.
pub fn resolve(
    lp_a: u32,
    lp_b: u32,
    name_a: &str,
    name_b: &str,
) -> (ResolvedNarrative, &'static NarrativeTemplate) {
    let template = resolve_template(lp_a, lp_b);

    let sub = |text: &str| substitute_names(text, name_a, name_b);

    let mut description = sub(template.description);
    if lp_a == lp_b && !description.contains("Double Strength") {
        description.push_str(&format!(
            " Double Strength: two {}s amplify everything — the light and the glare.",
            lp_a
        ));
    }

    let gossip = match template.gossip {
        Some(g) => gossip_from_template(&g, name_a, name_b),
        None => synthesize_gossip(lp_a, lp_b),
    };

    let resolved = ResolvedNarrative {
        title: sub(template.title),
        description,
        gift: sub(template.gift),
        challenge: sub(template.challenge),
        growth: sub(template.growth),
        interaction: sub(template.interaction),
        truth: sub(template.truth),
        soul_teaching: sub(template.soul_teaching),
        viral: template.viral.map(sub),
        deep: template.deep.map(sub),
        gossip,
    };

    (resolved, template)
}

/// Replace the bracketed name tokens and the literal fallback phrases.
fn substitute_names(text: &str, name_a: &str, name_b: &str) -> String {
    text.replace("[NAME_A]", name_a)
        .replace("[NAME_B]", name_b)
        .replace(FALLBACK_NAME_A, name_a)
        .replace(FALLBACK_NAME_B, name_b)
}

fn gossip_from_template(g: &GossipTemplate, name_a: &str, name_b: &str) -> Gossip {
    Gossip {
        argument_style: substitute_names(g.argument_style, name_a, name_b),
        who_apologizes: substitute_names(g.who_apologizes, name_a, name_b),
        narrative: substitute_names(g.narrative, name_a, name_b),
    }
}

/// Deterministic gossip from the life-path pair: modulo indexing into the
/// three fixed arrays, so the same pair always fights the same way.
fn synthesize_gossip(lp_a: u32, lp_b: u32) -> Gossip {
    let style_idx = ((lp_a * 3 + lp_b) as usize) % GOSSIP_ARGUMENT_STYLES.len();
    let who_idx = ((lp_a + lp_b) as usize) % GOSSIP_WHO_APOLOGIZES.len();
    let narrative_idx = ((lp_a * lp_b) as usize) % GOSSIP_NARRATIVES.len();
    Gossip {
        argument_style: GOSSIP_ARGUMENT_STYLES[style_idx].to_string(),
        who_apologizes: GOSSIP_WHO_APOLOGIZES[who_idx].to_string(),
        narrative: GOSSIP_NARRATIVES[narrative_idx].to_string(),
    }
}
