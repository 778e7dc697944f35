//! Integer square root.

/// Floor of `√n` via Newton's method.
///
/// Used for the initial share mint, `isqrt(reserve_a × reserve_b)`. The
/// product of two `u64` values has a root that always fits in `u64`.
///
/// # Examples
///
/// ```
/// use token_swap::math::isqrt;
///
/// assert_eq!(isqrt(1_000_000), 1_000);
/// assert_eq!(isqrt(99), 9);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = x / 2 + (x & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(isqrt(1_000_000), 1_000);
        assert_eq!(isqrt(1_000_000 * 2_000_000), 1_414_213);
    }

    #[test]
    fn max_u64_product() {
        let n = u128::from(u64::MAX) * u128::from(u64::MAX);
        assert_eq!(isqrt(n), u128::from(u64::MAX));
    }

    #[test]
    fn max_u128() {
        let r = isqrt(u128::MAX);
        assert!(r * r <= u128::MAX);
        assert_eq!(r, u128::from(u64::MAX));
    }
}
