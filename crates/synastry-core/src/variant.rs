//! Deterministic variant selector.
//!
//! Picks a stable but slowly-rotating narrative flavor: two sessions on the
//! same calendar day render identically, a returning user the next day may see
//! different phrasing for the same number. The hash is a polynomial rolling
//! hash with explicit 32-bit signed wraparound so the selected index
//! reproduces across platforms and reimplementations; do not swap in a hash
//! library here.

/// Select one of `count` variants for `(seed, date_iso)`.
///
/// Pure and total: `count` 0 is treated as 1. Uniform-ish, not cryptographic;
/// collisions and clustering are acceptable.
pub fn select(seed: u32, date_iso: &str, count: usize) -> usize {
    let count = count.max(1);
    let key = format!("{date_iso}{seed}");
    let mut hash: i32 = 0;
    for ch in key.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }
    hash.unsigned_abs() as usize % count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = select(7, "2024-01-01", 5);
        let b = select(7, "2024-01-01", 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_not_constant_across_dates() {
        // For a fixed seed, at least one other date must land on a different
        // index; otherwise the rotation mechanism is dead.
        let base = select(3, "2024-01-01", 7);
        let moved = (1..=28)
            .map(|d| select(3, &format!("2024-02-{d:02}"), 7))
            .any(|idx| idx != base);
        assert!(moved, "selector returned {} for every probed date", base);
    }

    #[test]
    fn test_index_in_range() {
        for seed in 0..40 {
            for count in 1..=6 {
                let idx = select(seed, "2031-12-09", count);
                assert!(idx < count);
            }
        }
    }

    #[test]
    fn test_count_zero_is_total() {
        assert_eq!(select(1, "2024-01-01", 0), 0);
    }

    #[test]
    fn test_known_wraparound_behavior() {
        // Pin the exact hash semantics: "a" * 31 + char math, signed 32-bit.
        // "2024-01-017" hashed char-by-char must match this precomputed walk.
        let mut h: i32 = 0;
        for ch in "2024-01-017".chars() {
            h = h.wrapping_mul(31).wrapping_add(ch as i32);
        }
        assert_eq!(select(7, "2024-01-01", usize::MAX), h.unsigned_abs() as usize);
    }
}
