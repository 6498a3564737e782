//! Profile calculator: one birth date in, a full numeric profile out.
//!
//! The profile is immutable once computed. Forecast fields are the only part
//! that depends on anything besides the birth date: they are computed against
//! an explicit `today` parameter so a request never straddles a midnight
//! boundary and tests can pin the clock.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::reduction::{reduce, reduce_to_matrix_range, sum_digits};

/// A birth date as raw calendar components.
///
/// Deliberately not a `chrono::NaiveDate`: the engine validates day 1-31 and
/// month 1-12 but accepts impossible calendar dates like Feb 31, because the
/// date is a digit source, not a real calendar instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Parse a `YYYY-MM-DD` string and range-check the components.
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let trimmed = input.trim();
        let mut parts = trimmed.splitn(3, '-');
        let year = parse_component(parts.next(), trimmed)?;
        let month = parse_component(parts.next(), trimmed)?;
        let day = parse_component(parts.next(), trimmed)?;

        if !(1900..=2099).contains(&year) {
            return Err(EngineError::DateOutOfRange { field: "year", value: year });
        }
        if !(1..=12).contains(&month) {
            return Err(EngineError::DateOutOfRange { field: "month", value: month });
        }
        if !(1..=31).contains(&day) {
            return Err(EngineError::DateOutOfRange { field: "day", value: day });
        }

        Ok(Self { year, month, day })
    }

    /// ISO rendering, zero-padded (`1990-01-01`).
    pub fn to_iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn parse_component(part: Option<&str>, whole: &str) -> Result<u32, EngineError> {
    let raw = part.ok_or_else(|| EngineError::InvalidDateFormat(whole.to_string()))?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::InvalidDateFormat(whole.to_string()));
    }
    raw.parse::<u32>()
        .map_err(|_| EngineError::InvalidDateFormat(whole.to_string()))
}

/// The five interlocking matrix anchors plus their derived line sums.
/// Everything here lives in [1,22] by construction (`reduce_to_matrix_range`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixExtras {
    pub sky_line: u32,
    pub earth_line: u32,
    pub male_line: u32,
    pub female_line: u32,
    pub love: u32,
    pub money: u32,
}

/// Forecast numbers computed against the captured `today`, not the birth date
/// alone. `universal_day` is shared across all people for a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_day: u32,
    pub universal_day: u32,
}

/// Full numeric profile derived from one birth date. Immutable once computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericProfile {
    pub date: BirthDate,
    /// Dominant identifier: single digit or preserved master (11/22/33).
    pub life_path: u32,
    /// Master-preserving reductions of the raw day/month/year, reused by the
    /// scorer and the derived-metric generators.
    pub reduced_day: u32,
    pub reduced_month: u32,
    pub reduced_year: u32,
    pub day_anchor: u32,
    pub month_anchor: u32,
    pub year_anchor: u32,
    pub lower_anchor: u32,
    pub center_anchor: u32,
    pub attitude_number: u32,
    pub challenges: [u32; 3],
    pub pinnacles: [u32; 4],
    pub pinnacle_ages: [u32; 3],
    pub forecast: Forecast,
    pub matrix_extras: MatrixExtras,
}

/// Compute the full profile for a `YYYY-MM-DD` date string against `today`.
pub fn compute_profile(date: &str, today: NaiveDate) -> Result<NumericProfile, EngineError> {
    let parsed = BirthDate::parse(date)?;
    Ok(profile_from_date(parsed, today))
}

/// Compute the profile from already-parsed components.
pub fn profile_from_date(date: BirthDate, today: NaiveDate) -> NumericProfile {
    let BirthDate { year, month, day } = date;

    // Digit sum of the concatenated date string equals the sum of the
    // per-component digit sums, so no string round-trip is needed.
    let life_path = reduce(sum_digits(day) + sum_digits(month) + sum_digits(year), true);

    let reduced_day = reduce(day, true);
    let reduced_month = reduce(month, true);
    let reduced_year = reduce(year, true);

    let day_anchor = reduce_to_matrix_range(day);
    let month_anchor = reduce_to_matrix_range(month);
    let year_anchor = reduce_to_matrix_range(sum_digits(year));
    let lower_anchor = reduce_to_matrix_range(day_anchor + month_anchor + year_anchor);
    let center_anchor =
        reduce_to_matrix_range(day_anchor + month_anchor + year_anchor + lower_anchor);

    let attitude_number = reduce(reduced_day + reduced_month, true);

    // Challenges are pure single digits: differences of the reduced
    // components, collapsed without master preservation.
    let single = |n: u32| reduce(n, false);
    let c1 = single(single(reduced_month).abs_diff(single(reduced_day)));
    let c2 = single(single(reduced_day).abs_diff(single(reduced_year)));
    let c3 = single(c1.abs_diff(c2));

    let p1 = reduce(reduced_month + reduced_day, true);
    let p2 = reduce(reduced_day + reduced_year, true);
    let p3 = reduce(p1 + p2, true);
    let p4 = reduce(reduced_month + reduced_year, true);
    let first_age = 36 - reduce(life_path, false);
    let pinnacle_ages = [first_age, first_age + 9, first_age + 18];

    let sky_line = reduce_to_matrix_range(month_anchor + year_anchor);
    let earth_line = reduce_to_matrix_range(day_anchor + lower_anchor);
    let male_line = reduce_to_matrix_range(day_anchor + month_anchor);
    let female_line = reduce_to_matrix_range(year_anchor + lower_anchor);
    let matrix_extras = MatrixExtras {
        sky_line,
        earth_line,
        male_line,
        female_line,
        love: reduce_to_matrix_range(center_anchor + female_line),
        money: reduce_to_matrix_range(center_anchor + male_line),
    };

    NumericProfile {
        date,
        life_path,
        reduced_day,
        reduced_month,
        reduced_year,
        day_anchor,
        month_anchor,
        year_anchor,
        lower_anchor,
        center_anchor,
        attitude_number,
        challenges: [c1, c2, c3],
        pinnacles: [p1, p2, p3, p4],
        pinnacle_ages,
        forecast: forecast_for(reduced_month, reduced_day, today),
        matrix_extras,
    }
}

fn forecast_for(reduced_month: u32, reduced_day: u32, today: NaiveDate) -> Forecast {
    let current_year = today.year() as u32;
    let current_month = today.month();
    let current_day = today.day();

    let personal_year = reduce(reduced_month + reduced_day + reduce(current_year, true), true);
    let personal_month = reduce(personal_year + current_month, true);
    let personal_day = reduce(personal_month + current_day, true);
    let universal_day = reduce(
        sum_digits(current_year) + sum_digits(current_month) + sum_digits(current_day),
        true,
    );

    Forecast {
        personal_year,
        personal_month,
        personal_day,
        universal_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let d = BirthDate::parse("1990-01-01").unwrap();
        assert_eq!(d, BirthDate { year: 1990, month: 1, day: 1 });
        assert_eq!(d.to_iso(), "1990-01-01");
    }

    #[test]
    fn test_parse_accepts_impossible_calendar_dates() {
        // Feb 31 is fine: the date is a digit source, not a calendar instant.
        assert!(BirthDate::parse("2001-02-31").is_ok());
        assert!(BirthDate::parse("2000-02-29").is_ok());
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["", "1990/01/01", "1990-01", "not-a-date", "1990-1x-01"] {
            assert!(
                matches!(BirthDate::parse(bad), Err(EngineError::InvalidDateFormat(_))),
                "expected InvalidDateFormat for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            BirthDate::parse("1990-13-01"),
            Err(EngineError::DateOutOfRange { field: "month", .. })
        ));
        assert!(matches!(
            BirthDate::parse("1990-01-32"),
            Err(EngineError::DateOutOfRange { field: "day", .. })
        ));
        assert!(matches!(
            BirthDate::parse("1899-01-01"),
            Err(EngineError::DateOutOfRange { field: "year", .. })
        ));
        assert!(matches!(
            BirthDate::parse("2100-01-01"),
            Err(EngineError::DateOutOfRange { field: "year", .. })
        ));
    }

    #[test]
    fn test_life_path_regression_fixture() {
        // 1990-01-01: digits 1+1+1+9+9+0 = 21 -> 3.
        let p = compute_profile("1990-01-01", fixed_today()).unwrap();
        assert_eq!(p.life_path, 3);
        assert_eq!(p.reduced_day, 1);
        assert_eq!(p.reduced_month, 1);
    }

    #[test]
    fn test_life_path_master_preserved() {
        // 1992-02-06 digit-sums to 29 -> 11, which must not collapse to 2.
        let p = compute_profile("1992-02-06", fixed_today()).unwrap();
        assert_eq!(p.life_path, 11);
    }

    #[test]
    fn test_anchors_in_matrix_range() {
        for date in ["1990-01-01", "1975-12-31", "2099-11-29", "1900-06-15"] {
            let p = compute_profile(date, fixed_today()).unwrap();
            for (label, v) in [
                ("day", p.day_anchor),
                ("month", p.month_anchor),
                ("year", p.year_anchor),
                ("lower", p.lower_anchor),
                ("center", p.center_anchor),
                ("sky", p.matrix_extras.sky_line),
                ("earth", p.matrix_extras.earth_line),
                ("male", p.matrix_extras.male_line),
                ("female", p.matrix_extras.female_line),
                ("love", p.matrix_extras.love),
                ("money", p.matrix_extras.money),
            ] {
                assert!((1..=22).contains(&v), "{} anchor {} out of [1,22] for {}", label, v, date);
            }
        }
    }

    #[test]
    fn test_anchor_wiring() {
        let p = compute_profile("1975-12-31", fixed_today()).unwrap();
        assert_eq!(
            p.lower_anchor,
            reduce_to_matrix_range(p.day_anchor + p.month_anchor + p.year_anchor)
        );
        assert_eq!(
            p.center_anchor,
            reduce_to_matrix_range(p.day_anchor + p.month_anchor + p.year_anchor + p.lower_anchor)
        );
    }

    #[test]
    fn test_idempotent_within_a_day() {
        let today = fixed_today();
        let a = compute_profile("1988-08-08", today).unwrap();
        let b = compute_profile("1988-08-08", today).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_forecast_tracks_today_not_birth_date() {
        let p1 = compute_profile("1990-01-01", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
        let p2 = compute_profile("1990-01-01", NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).unwrap();
        assert_ne!(p1.forecast.personal_day, p2.forecast.personal_day);
        // Non-forecast fields must not move with the clock.
        assert_eq!(p1.life_path, p2.life_path);
        assert_eq!(p1.center_anchor, p2.center_anchor);
    }

    #[test]
    fn test_personal_year_formula() {
        // 1990-01-01 against 2024-06-15: reduce(1 + 1 + reduce(2024)) =
        // reduce(1 + 1 + 8) = reduce(10) = 1.
        let p = compute_profile("1990-01-01", fixed_today()).unwrap();
        assert_eq!(p.forecast.personal_year, 1);
        // personal_month = reduce(1 + 6) = 7; personal_day = reduce(7 + 15) = 22 (master).
        assert_eq!(p.forecast.personal_month, 7);
        assert_eq!(p.forecast.personal_day, 22);
    }

    #[test]
    fn test_universal_day_is_date_only() {
        let today = fixed_today();
        let a = compute_profile("1990-01-01", today).unwrap();
        let b = compute_profile("1975-12-31", today).unwrap();
        assert_eq!(a.forecast.universal_day, b.forecast.universal_day);
    }

    #[test]
    fn test_challenges_are_single_digits() {
        for date in ["1990-01-01", "1984-11-22", "2001-02-31"] {
            let p = compute_profile(date, fixed_today()).unwrap();
            for c in p.challenges {
                assert!(c <= 9, "challenge {} not a single digit for {}", c, date);
            }
        }
    }

    #[test]
    fn test_pinnacle_ages_band() {
        let p = compute_profile("1990-01-01", fixed_today()).unwrap();
        // Life path 3 -> first boundary 33, then fixed 9-year bands.
        assert_eq!(p.pinnacle_ages, [33, 42, 51]);
    }
}
