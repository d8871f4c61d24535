//! Exhaustive search for irreducible polynomials.
//!
//! [`Field`](crate::Field) never calls into this module: choosing a modulus
//! is left to callers, who can use these helpers for small orders where trial
//! division is affordable.

use crate::codec::from_index;
use crate::fast_mod::FastModulus;
use crate::poly::Polynomial;

/// Returns true if `poly` has no factor of degree `1..=deg/2` over Z_p.
///
/// Returns false for constants and the zero polynomial.
pub fn is_irreducible(poly: &Polynomial, m: &FastModulus) -> bool {
    let mut poly = poly.clone();
    poly.reduce_mod(m);
    let Some(degree) = poly.degree() else {
        return false;
    };
    if degree == 0 {
        return false;
    }

    let inverses = m.inverse_table();
    let mut rem = Polynomial::zero();
    (1..=degree / 2).all(|d| {
        monic(*m, d as u32).all(|divisor| {
            rem.copy_from(&poly);
            rem.rem_assign(&divisor, m, &inverses);
            rem.reduce_mod(m);
            !rem.is_zero()
        })
    })
}

/// Iterates over every monic irreducible polynomial of `degree`, ordered by
/// the index of their lower coefficients.
pub fn irreducibles(m: FastModulus, degree: u32) -> impl Iterator<Item = Polynomial> {
    monic(m, degree).filter(move |candidate| is_irreducible(candidate, &m))
}

/// The first monic irreducible polynomial of `degree`.
///
/// # Examples
/// ```
/// use gfcalc_field::irreducible::find_irreducible;
/// use gfcalc_field::FastModulus;
///
/// let poly = find_irreducible(FastModulus::new(2), 2).unwrap();
/// assert_eq!(poly.to_string(), "x^2 + x + 1");
/// ```
pub fn find_irreducible(m: FastModulus, degree: u32) -> Option<Polynomial> {
    irreducibles(m, degree).next()
}

/// Every monic polynomial of `degree`. Empty if there are too many to count.
fn monic(m: FastModulus, degree: u32) -> impl Iterator<Item = Polynomial> {
    let count = match degree {
        0 => 0,
        _ => (m.modulus() as u64).checked_pow(degree).unwrap_or(0),
    };
    (0..count).map(move |low| {
        let mut coeffs = from_index(low, &m).coefficients().to_vec();
        coeffs.resize(degree as usize, 0);
        coeffs.push(1);
        Polynomial::new(coeffs)
    })
}
