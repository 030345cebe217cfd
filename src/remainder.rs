//! Integer remainder variants for signed division.
//!
//! The `%` operator computes the truncated-division remainder, which for
//! negative operands differs from the floored and euclidean definitions.
//! All three satisfy `a == b * q + r` with `|r| < |b|`; they differ in how
//! the quotient is rounded and therefore in the sign of `r`:
//!
//! - truncated: `r` has the sign of the dividend (`-21 % 4 == -1`);
//! - floored: `r` has the sign of the divisor (`-21 mod 4 == 3`,
//!   `21 mod -4 == -3`);
//! - euclidean: `r` is always non-negative (`-21 mod 4 == 3`,
//!   `21 mod -4 == 1`).
//!
//! Every function panics on `b == 0`. `b == -1` is answered directly with
//! 0, which sidesteps the `i64::MIN % -1` overflow.

/// Truncated-division remainder, the native `%` semantics.
pub fn rem_truncated(a: i64, b: i64) -> i64 {
    assert_ne!(b, 0, "remainder by zero");
    if b == -1 {
        return 0;
    }
    a % b
}

/// Floored-division remainder; the result has the sign of the divisor.
pub fn rem_floored(a: i64, b: i64) -> i64 {
    assert_ne!(b, 0, "remainder by zero");
    if b == -1 {
        return 0;
    }
    let r = a % b;
    if r != 0 && (r ^ b) < 0 {
        r + b
    } else {
        r
    }
}

/// Euclidean remainder; the result is always non-negative.
pub fn rem_euclidean(a: i64, b: i64) -> i64 {
    assert_ne!(b, 0, "remainder by zero");
    if b == -1 {
        return 0;
    }
    let m = a % b;
    if m < 0 {
        if b < 0 {
            m - b
        } else {
            m + b
        }
    } else {
        m
    }
}

/// Euclidean remainder for a positive divisor.
pub fn rem_euclidean_positive_divisor(a: i64, b: i64) -> i64 {
    assert!(b > 0, "divisor must be positive");
    ((a % b) + b) % b
}

/// Euclidean remainder for non-negative operands, where all three
/// definitions coincide with plain `%`.
pub fn rem_unsigned(a: u64, b: u64) -> u64 {
    assert_ne!(b, 0, "remainder by zero");
    a % b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_follows_the_dividend_sign() {
        assert_eq!(rem_truncated(21, 4), 1);
        assert_eq!(rem_truncated(-21, 4), -1);
        assert_eq!(rem_truncated(21, -4), 1);
        assert_eq!(rem_truncated(100, -1), 0);
        assert_eq!(rem_truncated(i64::MIN, -1), 0);
        assert_eq!(rem_truncated(i64::MIN, 68488), -24144);
        assert_eq!(rem_truncated(i64::MAX, 76953), 68605);
    }

    #[test]
    fn floored_follows_the_divisor_sign() {
        assert_eq!(rem_floored(21, 4), 1);
        assert_eq!(rem_floored(-21, 4), 3);
        assert_eq!(rem_floored(21, -4), -3);
        assert_eq!(rem_floored(100, -1), 0);
        assert_eq!(rem_floored(i64::MIN, -1), 0);
        assert_eq!(rem_floored(i64::MIN, 68488), 44344);
        assert_eq!(rem_floored(i64::MAX, 76953), 68605);
    }

    #[test]
    fn euclidean_is_non_negative() {
        assert_eq!(rem_euclidean(21, 4), 1);
        assert_eq!(rem_euclidean(-21, 4), 3);
        assert_eq!(rem_euclidean(21, -4), 1);
        assert_eq!(rem_euclidean(100, -1), 0);
        assert_eq!(rem_euclidean(i64::MIN, -1), 0);
        assert_eq!(rem_euclidean(i64::MIN, 68488), 44344);
        assert_eq!(rem_euclidean(i64::MAX, 76953), 68605);
    }

    #[test]
    fn euclidean_matches_std_rem_euclid() {
        for a in [-100i64, -21, -1, 0, 1, 21, 100, 12345] {
            for b in [-7i64, -4, -2, 2, 4, 7, 97] {
                assert_eq!(rem_euclidean(a, b), a.rem_euclid(b), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn positive_divisor_variants_agree() {
        assert_eq!(rem_euclidean_positive_divisor(21, 4), 1);
        assert_eq!(rem_euclidean_positive_divisor(-21, 4), 3);
        assert_eq!(rem_euclidean_positive_divisor(i64::MIN, 68488), 44344);
        assert_eq!(rem_euclidean_positive_divisor(i64::MAX, 76953), 68605);
        assert_eq!(rem_unsigned(21, 4), 1);
        assert_eq!(rem_unsigned(u64::MAX, 76953), (i64::MAX as u64 * 2 + 1) % 76953);
    }

    #[test]
    fn quotient_remainder_identity_holds() {
        // a == b * q + r with |r| < |b| for each definition's quotient.
        for a in [-37i64, -4, 0, 5, 37] {
            for b in [-5i64, -3, 3, 5] {
                for r in [rem_truncated(a, b), rem_floored(a, b), rem_euclidean(a, b)] {
                    assert!(r.abs() < b.abs());
                    assert_eq!((a - r) % b, 0, "a={a} b={b} r={r}");
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "remainder by zero")]
    fn zero_divisor_panics() {
        let _ = rem_truncated(1, 0);
    }
}
