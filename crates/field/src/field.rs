//! The finite field GF(p^k) with elements addressed by index.

use log::{debug, trace};

use crate::codec::{from_index, from_index_into, to_index};
use crate::error::{FieldError, IrreducibleDefect, Result};
use crate::fast_mod::FastModulus;
use crate::number_theory::factor;
use crate::poly::Polynomial;

/// Reusable buffers for field operations.
///
/// Every operation overwrites all three, so one `Scratch` serves any number
/// of sequential calls, on any field.
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    lhs: Polynomial,
    rhs: Polynomial,
    out: Polynomial,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A finite field of order `p^k`.
///
/// Elements are the indices `0..order()`; index `i` stands for the polynomial
/// whose coefficients are the base-p digits of `i`. Every operation reduces
/// its operands modulo the order first.
///
/// # Examples
/// ```
/// use gfcalc_field::Field;
///
/// // GF(4) = GF(2)[x] / (x^2 + x + 1)
/// let f = Field::with_irreducible(4, &[1, 1, 1]).unwrap();
/// assert_eq!((f.prime(), f.power()), (2, 2));
/// assert_eq!(f.mul(2, 3), 1);
/// assert_eq!(f.div(1, 2).unwrap(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    order: u64,
    power: u32,
    modulus: FastModulus,
    irreducible: Polynomial,
    inverses: Vec<u64>,
}

impl Field {
    /// Builds GF(`order`) with `irreducible` as its reduction polynomial.
    ///
    /// The polynomial is reduced modulo the prime and must then have degree
    /// exactly `k`. Whether it really is irreducible is not checked; a
    /// reducible one silently yields a ring with zero divisors (see
    /// [`Field::is_field`]).
    ///
    /// # Errors
    /// * [`FieldError::DoesNotExist`] if `order` is not a prime power.
    /// * [`FieldError::ModulusTooLarge`] if the prime exceeds 16 bits.
    /// * [`FieldError::IrreducibleInvalid`] if the polynomial is missing,
    ///   zero modulo the prime, or of the wrong degree.
    pub fn new(order: u64, irreducible: Option<&Polynomial>) -> Result<Self> {
        let (prime, power) = factor(order).ok_or(FieldError::DoesNotExist { order })?;
        let prime = u16::try_from(prime).map_err(|_| FieldError::ModulusTooLarge { order, prime })?;

        let modulus = FastModulus::new(prime);

        let mut irreducible = irreducible
            .ok_or(FieldError::IrreducibleInvalid(IrreducibleDefect::Missing))?
            .clone();
        irreducible.canonicalize(&modulus);
        match irreducible.degree() {
            None => return Err(FieldError::IrreducibleInvalid(IrreducibleDefect::Zero)),
            Some(found) if found != power as usize => {
                return Err(FieldError::IrreducibleInvalid(
                    IrreducibleDefect::WrongDegree {
                        expected: power,
                        found,
                    },
                ));
            }
            Some(_) => {}
        }

        debug!(
            "GF({}) = GF({}^{}) reducing by {}",
            order, prime, power, irreducible
        );

        Ok(Self {
            order,
            power,
            modulus,
            irreducible,
            inverses: modulus.inverse_table(),
        })
    }

    /// Builds GF(`order`) from constant-first irreducible coefficients.
    pub fn with_irreducible(order: u64, coeffs: &[u64]) -> Result<Self> {
        Self::new(order, Some(&Polynomial::from_slice(coeffs)))
    }

    /// Number of elements, `p^k`.
    #[inline]
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The characteristic `p`.
    #[inline]
    pub fn prime(&self) -> u16 {
        self.modulus.modulus()
    }

    /// The extension degree `k`.
    #[inline]
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Reduction context for the characteristic.
    #[inline]
    pub fn modulus(&self) -> &FastModulus {
        &self.modulus
    }

    /// The canonical reduction polynomial.
    #[inline]
    pub fn irreducible(&self) -> &Polynomial {
        &self.irreducible
    }

    /// Polynomial of the element at `index`.
    pub fn element(&self, index: u64) -> Polynomial {
        from_index(index % self.order, &self.modulus)
    }

    /// Index of `poly` after reducing it into the field.
    pub fn index_of(&self, poly: &Polynomial) -> u64 {
        let mut reduced = poly.clone();
        reduced.canonicalize(&self.modulus);
        reduced.rem_assign(&self.irreducible, &self.modulus, &self.inverses);
        to_index(&reduced, &self.modulus)
    }

    /// All element indices in order.
    pub fn elements(&self) -> impl Iterator<Item = u64> {
        0..self.order
    }

    /// A uniformly random element.
    pub fn random_element<R: rand::Rng>(&self, rng: &mut R) -> u64 {
        rng.gen_range(0..self.order)
    }

    /// Sum of `i` and `j`.
    pub fn add(&self, i: u64, j: u64) -> u64 {
        self.add_with(&mut Scratch::new(), i, j)
    }

    /// Difference `i - j`.
    pub fn sub(&self, i: u64, j: u64) -> u64 {
        self.sub_with(&mut Scratch::new(), i, j)
    }

    /// Product of `i` and `j`, reduced by the irreducible polynomial.
    pub fn mul(&self, i: u64, j: u64) -> u64 {
        self.mul_with(&mut Scratch::new(), i, j)
    }

    /// Finds `k` with `j * k == i` by trying every element.
    ///
    /// Linear in the field order.
    ///
    /// # Errors
    /// * [`FieldError::DivisionByZero`] if `j` is the zero element.
    /// * [`FieldError::NoQuotient`] if nothing matches, which only happens
    ///   with a reducible modulus.
    pub fn div(&self, i: u64, j: u64) -> Result<u64> {
        self.div_with(&mut Scratch::new(), i, j)
    }

    /// Additive inverse of `i`.
    pub fn neg(&self, i: u64) -> u64 {
        self.sub(0, i)
    }

    /// Multiplicative inverse of `j`.
    pub fn inverse(&self, j: u64) -> Result<u64> {
        self.div(1, j)
    }

    /// `i` raised to `exp` by square and multiply. `0^0` is 1.
    pub fn pow(&self, i: u64, mut exp: u64) -> u64 {
        let scratch = &mut Scratch::new();
        let mut base = i % self.order;
        let mut acc = 1 % self.order;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.mul_with(scratch, acc, base);
            }
            base = self.mul_with(scratch, base, base);
            exp >>= 1;
        }
        acc
    }

    /// [`Field::add`] using `s` for buffers. Operands are reduced mod the order.
    pub fn add_with(&self, s: &mut Scratch, i: u64, j: u64) -> u64 {
        self.load(s, i, j);
        s.out.add_into(&s.lhs, &s.rhs);
        s.out.reduce_mod(&self.modulus);
        to_index(&s.out, &self.modulus)
    }

    /// [`Field::sub`] using `s` for buffers. Operands are reduced mod the order.
    pub fn sub_with(&self, s: &mut Scratch, i: u64, j: u64) -> u64 {
        self.load(s, i, j);
        s.rhs.negate_mod(&self.modulus);
        s.out.add_into(&s.lhs, &s.rhs);
        s.out.reduce_mod(&self.modulus);
        to_index(&s.out, &self.modulus)
    }

    /// [`Field::mul`] using `s` for buffers. Operands are reduced mod the order.
    pub fn mul_with(&self, s: &mut Scratch, i: u64, j: u64) -> u64 {
        self.load(s, i, j);
        self.mul_loaded(s)
    }

    /// [`Field::div`] using `s` for buffers. Operands are reduced mod the order.
    pub fn div_with(&self, s: &mut Scratch, i: u64, j: u64) -> Result<u64> {
        let (i, j) = (i % self.order, j % self.order);
        if j == 0 {
            return Err(FieldError::DivisionByZero);
        }

        trace!("searching {} / {} in GF({})", i, j, self.order);
        from_index_into(&mut s.lhs, j, &self.modulus);
        for k in 0..self.order {
            from_index_into(&mut s.rhs, k, &self.modulus);
            if self.mul_loaded(s) == i {
                return Ok(k);
            }
        }
        Err(FieldError::NoQuotient {
            dividend: i,
            divisor: j,
        })
    }

    /// Checks that every non-zero element has an inverse, i.e. that the
    /// modulus really is irreducible. Quadratic in the field order.
    pub fn is_field(&self) -> bool {
        let s = &mut Scratch::new();
        (1..self.order).all(|j| self.div_with(s, 1, j).is_ok())
    }

    fn load(&self, s: &mut Scratch, i: u64, j: u64) {
        from_index_into(&mut s.lhs, i % self.order, &self.modulus);
        from_index_into(&mut s.rhs, j % self.order, &self.modulus);
    }

    fn mul_loaded(&self, s: &mut Scratch) -> u64 {
        s.out.mul_mod_into(
            &s.lhs,
            &s.rhs,
            &self.irreducible,
            &self.modulus,
            &self.inverses,
        );
        s.out.reduce_mod(&self.modulus);
        to_index(&s.out, &self.modulus)
    }
}
