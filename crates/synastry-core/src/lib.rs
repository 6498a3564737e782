//! synastry-core: numerology profiles, pairwise compatibility scoring, and
//! deterministic narrative resolution.
//!
//! The whole engine is synchronous and side-effect-free: every function is a
//! pure transformation of its inputs plus one explicitly-threaded `today`
//! date. Rendering, unlock gating, and export are downstream consumers of the
//! immutable `CompatibilityResult`; nothing here performs I/O.

mod breakup;
mod config;
mod conflict;
mod engine;
mod error;
mod flags;
mod narrative;
mod profile;
mod reduction;
mod scoring;
mod variant;
mod viral;

pub mod content;

// Reduction kernel: the two reduction semantics everything traces back to.
pub use reduction::{reduce, reduce_to_matrix_range, sum_digits};

// Profiles
pub use profile::{
    compute_profile, profile_from_date, BirthDate, Forecast, MatrixExtras, NumericProfile,
};

// Deterministic variant selection (stable per day, rotates across days)
pub use variant::select;

// Scoring
pub use scoring::{classify, score_pair, ScoreBreakdown, Scores};

// Narrative resolution
pub use narrative::{
    display_name, resolve, resolve_template, Gossip, ResolvedNarrative, FALLBACK_NAME_A,
    FALLBACK_NAME_B,
};

// Derived-metric generators
pub use breakup::{breakup_prediction, BreakupPrediction, RiskLevel};
pub use conflict::{conflict_matrix, ConflictIntensity, ConflictMatrix};
pub use flags::{signal_flags, SignalFlags};
pub use viral::{viral_breakdown, ViralBreakdown};

// Engine surface
pub use config::EngineConfig;
pub use engine::{
    compute_compatibility, compute_compatibility_now, compute_profile_now, AspectReading,
    CompatibilityResult, PersonSummary,
};
pub use error::EngineError;
