//! Polynomials over Z_p with field-sized, possibly unreduced coefficients.
//!
//! Coefficients are stored constant term first. Most operations work on raw
//! integers and leave reduction modulo `p` to the caller, so a polynomial is
//! only a canonical residue after [`Polynomial::reduce_mod`].

use core::fmt;
use core::str::FromStr;

use crate::error::ParsePolynomialError;
use crate::fast_mod::FastModulus;

/// A growable polynomial, index 0 holding the constant term.
///
/// Canonical operations keep the highest coefficient, if any, non-zero. The
/// zero polynomial has no coefficients at all.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coeffs: Vec<u64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered constant term first.
    ///
    /// Trailing zeros are dropped.
    ///
    /// # Examples
    /// ```
    /// use gfcalc_field::Polynomial;
    ///
    /// // x^2 + 1
    /// let p = Polynomial::new(vec![1, 0, 1]);
    /// assert_eq!(p.degree(), Some(2));
    /// assert_eq!(p.to_string(), "x^2 + 1");
    /// ```
    pub fn new(coeffs: Vec<u64>) -> Self {
        let mut poly = Self { coeffs };
        poly.shrink();
        poly
    }

    /// The zero polynomial.
    pub const fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates a polynomial from a constant-first slice.
    pub fn from_slice(coeffs: &[u64]) -> Self {
        Self::new(coeffs.to_vec())
    }

    /// Coefficients, constant term first.
    #[inline]
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    pub(crate) fn coeffs_mut(&mut self) -> &mut Vec<u64> {
        &mut self.coeffs
    }

    /// Number of stored coefficients.
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if no coefficients are stored.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial, `None` for zero.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Highest stored coefficient.
    #[inline]
    pub fn leading(&self) -> Option<u64> {
        self.coeffs.last().copied()
    }

    /// Sets the logical length. New slots are zero.
    pub fn resize(&mut self, len: usize) {
        self.coeffs.resize(len, 0);
    }

    /// Makes `self` a copy of `src`, reusing the allocation.
    pub fn copy_from(&mut self, src: &Polynomial) {
        self.coeffs.clear();
        self.coeffs.extend_from_slice(&src.coeffs);
    }

    /// Resets to the zero polynomial, keeping the allocation.
    pub fn clear(&mut self) {
        self.coeffs.clear();
    }

    /// Drops trailing zero coefficients.
    pub fn shrink(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }

    /// Drops trailing coefficients that vanish modulo `p`.
    pub fn shrink_mod(&mut self, m: &FastModulus) {
        while self.coeffs.last().is_some_and(|&c| m.divides(c)) {
            self.coeffs.pop();
        }
    }

    /// Reduces every coefficient into `[0, p)`.
    ///
    /// Coefficients must be below [`REDUCE_LIMIT`], as every intermediate of
    /// field arithmetic is.
    ///
    /// [`REDUCE_LIMIT`]: crate::fast_mod::REDUCE_LIMIT
    pub fn reduce_mod(&mut self, m: &FastModulus) {
        for c in &mut self.coeffs {
            *c = m.reduce(*c);
        }
        self.shrink();
    }

    /// Reduces every coefficient into `[0, p)`, accepting any `u64`.
    ///
    /// Use this on caller-supplied polynomials; [`Polynomial::reduce_mod`]
    /// only handles coefficients below [`REDUCE_LIMIT`].
    ///
    /// [`REDUCE_LIMIT`]: crate::fast_mod::REDUCE_LIMIT
    pub fn canonicalize(&mut self, m: &FastModulus) {
        for c in &mut self.coeffs {
            *c = m.reduce_wide(*c);
        }
        self.shrink();
    }

    /// Replaces every coefficient by its additive inverse modulo `p`.
    pub fn negate_mod(&mut self, m: &FastModulus) {
        for c in &mut self.coeffs {
            *c = m.negate(*c);
        }
        self.shrink();
    }

    /// Writes the coefficient-wise integer sum of `a` and `b` into `self`.
    ///
    /// The result is not reduced modulo `p`. Sums wrap at 2^64, so they are
    /// only meaningful while they stay below [`REDUCE_LIMIT`], which holds for
    /// canonical field elements.
    ///
    /// [`REDUCE_LIMIT`]: crate::fast_mod::REDUCE_LIMIT
    pub fn add_into(&mut self, a: &Polynomial, b: &Polynomial) {
        let (short, long) = if a.len() < b.len() { (a, b) } else { (b, a) };

        self.coeffs.clear();
        self.coeffs.extend_from_slice(&long.coeffs);
        for (r, &c) in self.coeffs.iter_mut().zip(&short.coeffs) {
            *r = r.wrapping_add(c);
        }
        self.shrink();
    }

    /// Writes the exact integer convolution of `a` and `b` into `self`.
    ///
    /// Both operands must hold coefficients below 2^16, which canonical field
    /// elements always do.
    pub fn mul_full_into(&mut self, a: &Polynomial, b: &Polynomial) {
        self.coeffs.clear();
        if a.is_zero() || b.is_zero() {
            return;
        }

        self.coeffs.resize(a.len() + b.len() - 1, 0);
        for (i, &x) in a.coeffs.iter().enumerate() {
            for (j, &y) in b.coeffs.iter().enumerate() {
                self.coeffs[i + j] += x * y;
            }
        }
    }

    /// Reduces `self` modulo `modulus` by schoolbook long division.
    ///
    /// `inverses` is the inverse table of `m`. Coefficients of `self` may be
    /// unreduced; the remainder comes back with trailing vanishing
    /// coefficients removed but is otherwise not reduced modulo `p`.
    pub fn rem_assign(&mut self, modulus: &Polynomial, m: &FastModulus, inverses: &[u64]) {
        let Some(top) = modulus.leading() else {
            return;
        };
        let top_inverse = inverses[m.reduce(top) as usize];

        self.shrink_mod(m);
        while self.len() >= modulus.len() {
            let lead = self.coeffs[self.len() - 1];
            let q = m.reduce(m.reduce(lead) * top_inverse);

            let shift = self.len() - modulus.len();
            for (j, &c) in modulus.coeffs.iter().enumerate() {
                self.coeffs[shift + j] += m.negate(c * q);
            }

            // the leading terms cancel, so the degree drops by at least one
            self.coeffs.pop();
            self.shrink_mod(m);
        }
    }

    /// Writes `a * b mod modulus` into `self`.
    ///
    /// The remainder's coefficients still need [`Polynomial::reduce_mod`]
    /// before they are canonical.
    pub fn mul_mod_into(
        &mut self,
        a: &Polynomial,
        b: &Polynomial,
        modulus: &Polynomial,
        m: &FastModulus,
        inverses: &[u64],
    ) {
        self.mul_full_into(a, b);
        self.rem_assign(modulus, m, inverses);
    }

    /// Renders the coefficients highest degree first, separated by spaces.
    ///
    /// This is the format [`Polynomial::from_str`] parses.
    ///
    /// # Examples
    /// ```
    /// use gfcalc_field::Polynomial;
    ///
    /// let p = Polynomial::new(vec![1, 0, 2]);
    /// assert_eq!(p.coefficient_list().to_string(), "2 0 1");
    /// assert_eq!(p.coefficient_list().to_string().parse::<Polynomial>().unwrap(), p);
    /// ```
    pub fn coefficient_list(&self) -> CoefficientList<'_> {
        CoefficientList(self)
    }
}

impl From<Vec<u64>> for Polynomial {
    fn from(coeffs: Vec<u64>) -> Self {
        Self::new(coeffs)
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Polynomial").field(&self.coeffs).finish()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match (i, coeff) {
                (0, _) => write!(f, "{}", coeff)?,
                (1, 1) => write!(f, "x")?,
                (1, _) => write!(f, "{}x", coeff)?,
                (_, 1) => write!(f, "x^{}", i)?,
                _ => write!(f, "{}x^{}", coeff, i)?,
            }
        }
        Ok(())
    }
}

/// Space-separated coefficients of a [`Polynomial`], highest degree first.
pub struct CoefficientList<'a>(&'a Polynomial);

impl fmt::Display for CoefficientList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((top, rest)) = self.0.coeffs.split_last() else {
            return write!(f, "0");
        };
        write!(f, "{}", top)?;
        for c in rest.iter().rev() {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Polynomial {
    type Err = ParsePolynomialError;

    /// Parses whitespace-separated coefficients, highest degree first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coeffs = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u16>()
                    .map(u64::from)
                    .map_err(|_| ParsePolynomialError::InvalidCoefficient {
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if coeffs.is_empty() {
            return Err(ParsePolynomialError::Empty);
        }
        coeffs.reverse();
        Ok(Self::new(coeffs))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coeffs.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = Vec::<u64>::deserialize(deserializer)?;
        Ok(Self::new(coeffs))
    }
}
