//! Error types for field construction, arithmetic and parsing.

use thiserror::Error;

/// Errors that can occur while building a field or dividing in it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The order has no factorization as a single prime power.
    #[error("GF({order}) doesn't exist")]
    DoesNotExist { order: u64 },

    /// The prime factor does not fit in 16 bits.
    #[error("GF({order}) isn't supported, its prime {prime} is too big")]
    ModulusTooLarge { order: u64, prime: u64 },

    /// No usable irreducible polynomial was supplied.
    #[error("The irreducible polynomial is invalid: {0}")]
    IrreducibleInvalid(IrreducibleDefect),

    /// The divisor is the zero element.
    #[error("Division by zero")]
    DivisionByZero,

    /// No element multiplies the divisor to the dividend. Only possible when
    /// the modulus is reducible.
    #[error("{dividend} / {divisor} has no quotient, the modulus is not irreducible")]
    NoQuotient { dividend: u64, divisor: u64 },
}

/// Why an irreducible polynomial was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrreducibleDefect {
    #[error("no polynomial was given")]
    Missing,

    #[error("it is zero modulo the prime")]
    Zero,

    #[error("expected degree {expected}, found {found}")]
    WrongDegree { expected: u32, found: usize },
}

/// Errors from parsing a coefficient list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePolynomialError {
    #[error("Polynomial couldn't be parsed, no coefficients given")]
    Empty,

    #[error("Polynomial couldn't be parsed, '{token}' is not a coefficient")]
    InvalidCoefficient { token: String },
}

pub type Result<T> = std::result::Result<T, FieldError>;
