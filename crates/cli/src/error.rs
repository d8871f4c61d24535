//! Error handling

use gfcalc_field::{FieldError, ParsePolynomialError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    InvalidPolynomial(#[from] ParsePolynomialError),

    #[error("Element {index} is not in GF({order})")]
    ElementOutOfRange { index: u64, order: u64 },

    #[error("Invalid operation '{0}', expected one of + - * / (or add, sub, mul, div)")]
    InvalidOperation(String),

    #[error("GF({order}) is too big to search for an irreducible polynomial (limit {limit}), pass one with --irreducible")]
    SearchTooLarge { order: u64, limit: u64 },

    #[error("No irreducible polynomial of degree {degree} exists over GF({prime})")]
    NoIrreducible { prime: u16, degree: u32 },

    #[error("GF({order}) has {order} elements, more than the table limit of {limit}; use --force to list them anyway")]
    TableTooLarge { order: u64, limit: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
