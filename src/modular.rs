//! Modular arithmetic over Z_n for full-range `u64` operands.
//!
//! Stateless helpers, independent of the map. Except for the reduction
//! functions, operands are expected to already live in Z_n (`a < n`,
//! `b < n`); the preconditions are debug-asserted. The branch-based
//! formulations and the double-and-add multiplication avoid widening, so
//! every function is correct for moduli up to `u64::MAX`.

/// Reduce any signed integer into Z_n. Requires `n > 0`.
pub fn mod_reduce(a: i64, n: i64) -> u64 {
    debug_assert!(n > 0);
    ((a % n + n) % n) as u64
}

/// Reduce an unsigned integer into Z_n. Requires `n > 0`.
pub fn mod_reduce_unsigned(a: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    a % n
}

/// `(a + b) % n` without overflow, via subtraction from the modulus.
pub fn mod_add(a: u64, b: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    debug_assert!(a < n);
    debug_assert!(b < n);

    if b == 0 {
        return a;
    }
    // Equivalent to mod_sub(a, n - b, n).
    let b = n - b;
    if a >= b {
        a - b
    } else {
        n - b + a
    }
}

/// `(a - b) % n` without overflow.
pub fn mod_sub(a: u64, b: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    debug_assert!(a < n);
    debug_assert!(b < n);

    if a >= b {
        a - b
    } else {
        n - b + a
    }
}

/// `(a + 1) % n`.
pub fn mod_increment(a: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    debug_assert!(a < n);

    let a = a + 1;
    if a == n {
        0
    } else {
        a
    }
}

/// `(a - 1) % n`.
pub fn mod_decrement(a: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    debug_assert!(a < n);

    if a == 0 {
        n - 1
    } else {
        a - 1
    }
}

/// The additive inverse of `a` in Z_n:
/// `mod_add(a, mod_additive_inverse(a, n), n) == 0`.
pub fn mod_additive_inverse(a: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    debug_assert!(a < n);

    if a == 0 {
        0
    } else {
        n - a
    }
}

/// `(a * b) % n` by double-and-add, O(log a + log b), overflow-free for
/// any modulus that fits in `u64`.
pub fn mod_mul(mut a: u64, mut b: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    debug_assert!(a < n);
    debug_assert!(b < n);

    if b > a {
        core::mem::swap(&mut a, &mut b);
    }
    let mut product = 0;
    while b != 0 {
        if b & 1 == 1 {
            product = mod_add(product, a, n);
        }
        a = mod_add(a, a, n);
        b >>= 1;
    }
    product
}

/// `(a * a) % n`.
pub fn mod_sqr(a: u64, n: u64) -> u64 {
    mod_mul(a, a, n)
}

/// `(a ^ e) % n` by binary exponentiation over [`mod_mul`].
pub fn mod_pow(a: u64, mut e: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    debug_assert!(a < n);

    if e == 0 {
        return 1;
    }
    let mut z = a;
    let mut y = 1;
    loop {
        if e & 1 == 1 {
            y = mod_mul(y, z, n);
        }
        e >>= 1;
        if e == 0 {
            break;
        }
        z = mod_sqr(z, n);
    }
    y
}

/// The multiplicative inverse of `a` in Z_n via Fermat's little theorem:
/// `mod_mul(a, mod_multiplicative_inverse(a, n), n) == 1`.
///
/// Only valid when `n` is prime. For a composite modulus use
/// [`extended_gcd`]: when `gcd(a, n) == 1`, the Bezout coefficient of `a`
/// reduced into Z_n is the inverse.
pub fn mod_multiplicative_inverse(a: u64, n: u64) -> u64 {
    debug_assert!(n > 0);
    debug_assert!(a < n);
    mod_pow(a, n - 2, n)
}

/// Extended Euclidean algorithm. Returns `(g, x, y)` with
/// `a * x + n * y == g == gcd(a, n)`.
pub fn extended_gcd(a: i64, n: i64) -> (i64, i64, i64) {
    let (mut u1, mut u2, mut u3) = (1i64, 0i64, a);
    let (mut v1, mut v2, mut v3) = (0i64, 1i64, n);
    while v3 != 0 {
        let q = u3 / v3;
        let t1 = u1 - v1 * q;
        u1 = v1;
        v1 = t1;
        let t3 = u3 - v3 * q;
        u3 = v3;
        v3 = t3;
        let t2 = u2 - v2 * q;
        u2 = v2;
        v2 = t2;
    }
    (u3, u1, u2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_of_signed_and_unsigned_values() {
        assert_eq!(mod_reduce(-9978483, 6742), 6419);
        assert_eq!(mod_reduce(0, 5), 0);
        assert_eq!(mod_reduce(-5, 5), 0);
        assert_eq!(mod_reduce_unsigned(368554407370949273, 698223547), 128930947);
    }

    #[test]
    fn add_and_sub_near_the_u64_limit() {
        assert_eq!(
            mod_add(3577888489959895, 1944674407370949273, 13686744073709492732),
            1948252295860909168
        );
        assert_eq!(
            mod_sub(18226785267862220, 6985665525488000877, 7985665525488000877),
            1018226785267862220
        );
        // Wrap-around cases.
        let n = u64::MAX;
        assert_eq!(mod_add(n - 1, n - 1, n), n - 2);
        assert_eq!(mod_sub(0, n - 1, n), 1);
    }

    #[test]
    fn increment_decrement_wrap() {
        assert_eq!(mod_increment(68529989, 68529990), 0);
        assert_eq!(mod_decrement(0, 68529990), 68529989);
        assert_eq!(mod_increment(3, 10), 4);
        assert_eq!(mod_decrement(4, 10), 3);
    }

    #[test]
    fn additive_inverse_round_trips() {
        let n = 678874930481234881;
        let a = 5478239525828;
        let inv = mod_additive_inverse(a, n);
        assert_eq!(inv, 678869452241709053);
        assert_eq!(mod_add(a, inv, n), 0);
        assert_eq!(mod_additive_inverse(0, n), 0);
    }

    #[test]
    fn mul_matches_u128_reference() {
        assert_eq!(
            mod_mul(
                18446743983658366132,
                17446663900858366132,
                18446743988858366132
            ),
            6543347294009229256
        );
        assert_eq!(
            mod_sqr(9876743983658366132, 18446743988858366132),
            15149960791603154288
        );
        // Cross-check against widening arithmetic on smaller operands.
        for (a, b, n) in [(3u64, 4, 7), (123456789, 987654321, 1000000007), (0, 5, 9)] {
            let expect = ((a as u128 * b as u128) % n as u128) as u64;
            assert_eq!(mod_mul(a, b, n), expect);
        }
    }

    #[test]
    fn pow_and_prime_inverse() {
        assert_eq!(
            mod_pow(7829454892340959985, 437827489237484, 12985254587577588852),
            7052917509512978809
        );
        assert_eq!(mod_pow(5, 0, 13), 1);
        assert_eq!(mod_pow(0, 3, 13), 0);

        // 9223372036854775337 is prime.
        let n = 9223372036854775337;
        let a = 97845874148483;
        let inv = mod_multiplicative_inverse(a, n);
        assert_eq!(inv, 7706179975126099074);
        assert_eq!(mod_mul(a, inv, n), 1);
    }

    #[test]
    fn extended_gcd_bezout_identity() {
        let (g, x, y) = extended_gcd(978458741484, 92233720368547753);
        assert_eq!(g, 1);
        assert_eq!(x, 18798863501111358);
        assert_eq!(y, -199427197007);
        // The identity check widens: a * x alone overflows i64.
        assert_eq!(
            978458741484i128 * x as i128 + 92233720368547753i128 * y as i128,
            g as i128
        );

        let (g, x, y) = extended_gcd(12, 18);
        assert_eq!(g, 6);
        assert_eq!(12 * x + 18 * y, 6);
    }

    #[test]
    fn extended_gcd_recovers_the_inverse() {
        // gcd(a, n) == 1, so the Bezout coefficient of `a` is its inverse.
        let (a, n) = (978458741484i64, 92233720368547753i64);
        let (g, x, _) = extended_gcd(a, n);
        assert_eq!(g, 1);
        let inv = mod_reduce(x, n);
        assert_eq!(mod_mul(a as u64, inv, n as u64), 1);
    }
}
