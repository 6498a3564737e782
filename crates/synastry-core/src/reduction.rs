//! Digit-reduction kernel: the two reduction semantics everything else is built on.
//!
//! Every number in a profile or a score traces back to one of these two
//! reducers. `reduce` collapses to a single digit but refuses to collapse the
//! master values 11/22/33 when asked to preserve them; `reduce_to_matrix_range`
//! folds into [1,22] and never special-cases masters. Mixing the two up is the
//! classic bug in this domain, so call sites pick one deliberately.

/// Sum of the decimal digits of `n`.
pub fn sum_digits(mut n: u32) -> u32 {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

/// Collapse `n` to a single digit by repeated digit summing.
///
/// With `preserve_master`, an intermediate 11, 22, or 33 is returned as-is
/// instead of being collapsed further. `reduce(0, _)` is 0.
pub fn reduce(mut n: u32, preserve_master: bool) -> u32 {
    while n > 9 {
        if preserve_master && matches!(n, 11 | 22 | 33) {
            return n;
        }
        n = sum_digits(n);
    }
    n
}

/// Fold `n` into the matrix range [1,22] by repeated digit summing.
///
/// Used only for the five matrix anchors and their derived lines. Masters are
/// NOT preserved here: 33 folds to 6, but 22 and below pass through untouched.
pub fn reduce_to_matrix_range(mut n: u32) -> u32 {
    while n > 22 {
        n = sum_digits(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_digits() {
        assert_eq!(sum_digits(0), 0);
        assert_eq!(sum_digits(7), 7);
        assert_eq!(sum_digits(1990), 19);
        assert_eq!(sum_digits(999), 27);
    }

    #[test]
    fn test_reduce_plain() {
        assert_eq!(reduce(0, false), 0);
        assert_eq!(reduce(9, false), 9);
        assert_eq!(reduce(21, false), 3);
        assert_eq!(reduce(11, false), 2);
        assert_eq!(reduce(22, false), 4);
        assert_eq!(reduce(33, false), 6);
        assert_eq!(reduce(1999, false), 1); // 28 -> 10 -> 1
    }

    #[test]
    fn test_reduce_preserves_masters() {
        assert_eq!(reduce(11, true), 11);
        assert_eq!(reduce(22, true), 22);
        assert_eq!(reduce(33, true), 33);
        // 29 -> 11 stops at the intermediate master
        assert_eq!(reduce(29, true), 11);
        // 1993-08-13: 1+9+9+3+8+1+3 = 34 -> 7, no master on the way
        assert_eq!(reduce(34, true), 7);
    }

    #[test]
    fn test_reduce_preserved_range() {
        for n in 0..500 {
            let r = reduce(n, true);
            assert!(
                (1..=9).contains(&r) || matches!(r, 0 | 11 | 22 | 33),
                "reduce({}, true) = {} escaped the documented range",
                n,
                r
            );
        }
    }

    #[test]
    fn test_matrix_range() {
        assert_eq!(reduce_to_matrix_range(22), 22);
        assert_eq!(reduce_to_matrix_range(23), 5);
        assert_eq!(reduce_to_matrix_range(31), 4);
        assert_eq!(reduce_to_matrix_range(1990), 19);
        for n in 1..500 {
            let r = reduce_to_matrix_range(n);
            assert!((1..=22).contains(&r), "rmr({}) = {} out of [1,22]", n, r);
        }
    }

    #[test]
    fn test_matrix_range_never_preserves_masters() {
        // 33 is above 22 and must fold down even though it is a master value.
        assert_eq!(reduce_to_matrix_range(33), 6);
    }
}
