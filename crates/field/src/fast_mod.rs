//! Division-free reduction modulo a fixed small prime.
//!
//! Based on Lemire, "Faster remainders when the divisor is a constant"
//! (<https://lemire.me/blog/2019/02/08/faster-remainders-when-the-divisor-is-a-constant-beating-compilers-and-libdivide/>).
//! With a 64-bit constant and a divisor below 2^16 the trick is exact for
//! every numerator below 2^48, which covers the unreduced sums produced by
//! polynomial multiplication over canonical coefficients.

use crate::number_theory::is_prime;

/// Largest numerator (exclusive) that [`FastModulus::reduce`] handles exactly.
pub const REDUCE_LIMIT: u64 = 1 << 48;

/// Reduction context bound to one prime modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FastModulus {
    c: u64,
    modulus: u16,
}

impl FastModulus {
    /// Precomputes the reduction constant for `modulus`.
    ///
    /// `modulus` must be a prime and at least 2.
    pub fn new(modulus: u16) -> Self {
        debug_assert!(modulus >= 2, "modulus must be at least 2");
        debug_assert!(is_prime(modulus as u64), "modulus {} is not prime", modulus);
        Self {
            c: u64::MAX / modulus as u64 + 1,
            modulus,
        }
    }

    /// The prime this context reduces by.
    #[inline]
    pub const fn modulus(&self) -> u16 {
        self.modulus
    }

    /// Computes `x mod p`.
    #[inline]
    pub fn reduce(&self, x: u64) -> u64 {
        debug_assert!(x < REDUCE_LIMIT, "{} is out of the fast reduction range", x);
        let low = self.c.wrapping_mul(x);
        ((low as u128 * self.modulus as u128) >> 64) as u64
    }

    /// Computes `x mod p` for any `x`, falling back to the remainder
    /// operator at or above [`REDUCE_LIMIT`].
    #[inline]
    pub fn reduce_wide(&self, x: u64) -> u64 {
        if x < REDUCE_LIMIT {
            self.reduce(x)
        } else {
            x % self.modulus as u64
        }
    }

    /// Returns true if `p` divides `x`, looking only at the multiplied
    /// intermediate.
    #[inline]
    pub fn divides(&self, x: u64) -> bool {
        debug_assert!(x < REDUCE_LIMIT, "{} is out of the fast reduction range", x);
        self.c.wrapping_mul(x) <= self.c - 1
    }

    /// Computes `-x mod p`, in `[0, p)`.
    #[inline]
    pub fn negate(&self, x: u64) -> u64 {
        match self.reduce(x) {
            0 => 0,
            r => self.modulus as u64 - r,
        }
    }

    /// Builds the table of multiplicative inverses of every residue.
    ///
    /// Entries 0 and 1 are both 1; entry 0 has no meaning and only exists so
    /// lookups never need a branch. Uses the recurrence
    /// `inv[i] = -(p / i) * inv[p mod i]`, which is linear in `p`.
    pub fn inverse_table(&self) -> Vec<u64> {
        let p = self.modulus as u64;
        let mut table = vec![1u64; p as usize];
        for i in 2..p {
            table[i as usize] = self.reduce(table[(p % i) as usize] * self.reduce(p - p / i));
        }
        table
    }
}
