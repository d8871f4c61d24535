//! Conversion between element indices and their polynomials.
//!
//! An element of GF(p^k) with coefficients `c_0 .. c_{k-1}` has index
//! `c_0 + c_1 p + ... + c_{k-1} p^{k-1}`, i.e. the coefficients are the base-p
//! digits of the index, least significant first.

use crate::fast_mod::FastModulus;
use crate::poly::Polynomial;

/// Encodes `poly` as its index, reducing each coefficient first.
///
/// The index is computed modulo 2^64, so it is exact only while `p^len`
/// fits in a `u64`; field elements always fit.
pub fn to_index(poly: &Polynomial, m: &FastModulus) -> u64 {
    let p = m.modulus() as u64;
    let mut index = 0u64;
    let mut power = 1u64;
    for &c in poly.coefficients() {
        index = index.wrapping_add(power.wrapping_mul(m.reduce_wide(c)));
        power = power.wrapping_mul(p);
    }
    index
}

/// Decodes `index` into `res`, reusing its allocation.
pub fn from_index_into(res: &mut Polynomial, mut index: u64, m: &FastModulus) {
    let p = m.modulus() as u64;
    res.clear();
    let digits = res.coeffs_mut();
    while index > 0 {
        digits.push(index % p);
        index /= p;
    }
    res.shrink();
}

/// Decodes `index` into a fresh polynomial.
///
/// # Examples
/// ```
/// use gfcalc_field::codec::{from_index, to_index};
/// use gfcalc_field::FastModulus;
///
/// let m = FastModulus::new(3);
/// // 7 = 1 + 2 * 3
/// let p = from_index(7, &m);
/// assert_eq!(p.coefficients(), &[1, 2]);
/// assert_eq!(to_index(&p, &m), 7);
/// ```
pub fn from_index(index: u64, m: &FastModulus) -> Polynomial {
    let mut res = Polynomial::zero();
    from_index_into(&mut res, index, m);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_indices() {
        let m = FastModulus::new(2);
        assert!(from_index(0, &m).is_zero());
        assert_eq!(from_index(1, &m).coefficients(), &[1]);
        assert_eq!(from_index(2, &m).coefficients(), &[0, 1]);
        assert_eq!(from_index(3, &m).coefficients(), &[1, 1]);
        assert_eq!(from_index(8, &m).coefficients(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_round_trip() {
        for p in [2u16, 3, 5, 7, 13, 251] {
            let m = FastModulus::new(p);
            for i in 0..5_000u64 {
                assert_eq!(to_index(&from_index(i, &m), &m), i, "index {} base {}", i, p);
            }
        }
    }

    #[test]
    fn test_round_trip_large_prime() {
        let m = FastModulus::new(65521);
        let n = 65521u64 * 65521 * 65521;
        for i in [0, 1, 65520, 65521, 65522, n / 2, n - 1] {
            let poly = from_index(i, &m);
            assert!(poly.len() <= 3);
            assert_eq!(to_index(&poly, &m), i);
        }
    }

    #[test]
    fn test_to_index_reduces_coefficients() {
        let m = FastModulus::new(5);
        // 7 + 6x = 2 + x mod 5 -> 2 + 1 * 5
        assert_eq!(to_index(&Polynomial::new(vec![7, 6]), &m), 7);
    }

    #[test]
    fn test_to_index_wide_input() {
        let m = FastModulus::new(3);
        // u64::MAX - 5 = 1 mod 3
        assert_eq!(to_index(&Polynomial::new(vec![u64::MAX - 5, 1]), &m), 4);

        // longer than any field element, wraps instead of overflowing
        let m = FastModulus::new(2);
        assert_eq!(to_index(&Polynomial::new(vec![1; 70]), &m), u64::MAX);
    }

    #[test]
    fn test_from_index_into_reuses_buffer() {
        let m = FastModulus::new(3);
        let mut buf = from_index(26, &m);
        assert_eq!(buf.coefficients(), &[2, 2, 2]);
        from_index_into(&mut buf, 3, &m);
        assert_eq!(buf.coefficients(), &[0, 1]);
        from_index_into(&mut buf, 0, &m);
        assert!(buf.is_zero());
    }
}
