//! Engine error taxonomy.
//!
//! Two hard input-validation errors and one soft degradation marker. There is
//! no retry logic anywhere in the engine: a hard error means the caller must
//! fix the input, and `MissingContentEntry` means an optional report section
//! is omitted rather than failing the whole computation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The input string could not be parsed into year/month/day components.
    #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// Parsed components are outside calendar bounds (day 1-31, month 1-12,
    /// year 1900-2099). Leap years are deliberately not validated; the engine
    /// treats dates as digit sources.
    #[error("date component out of range: {field} = {value}")]
    DateOutOfRange { field: &'static str, value: u32 },

    /// A generator expected a content-table entry that does not exist even
    /// after reduction fallback. Soft: callers omit the affected section.
    #[error("missing content entry: {0}")]
    MissingContentEntry(&'static str),
}
