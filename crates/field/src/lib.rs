//! Arithmetic over finite fields GF(p^k).
//!
//! Elements are addressed by index: the element with index `i` is the
//! polynomial over Z_p whose coefficients are the base-p digits of `i`.
//! Products are reduced by schoolbook long division against a caller-supplied
//! irreducible polynomial, and coefficients modulo `p` use a precomputed
//! division-free reduction.
//!
//! ```
//! use gfcalc_field::{Field, FieldError};
//!
//! let f = Field::with_irreducible(5, &[0, 1]).unwrap();
//! assert_eq!(f.add(3, 4), 2);
//! assert_eq!(f.mul(3, 4), 2);
//! assert_eq!(f.div(2, 4), Ok(3));
//! assert_eq!(f.div(2, 0), Err(FieldError::DivisionByZero));
//! ```

pub mod codec;
mod error;
pub mod fast_mod;
mod field;
pub mod irreducible;
pub mod number_theory;
mod poly;

pub use error::{FieldError, IrreducibleDefect, ParsePolynomialError, Result};
pub use fast_mod::FastModulus;
pub use field::{Field, Scratch};
pub use poly::{CoefficientList, Polynomial};
