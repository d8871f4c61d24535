//! The four field operations as user-selectable values

use gfcalc_field::{Field, FieldError, Scratch};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn apply(
        &self,
        field: &Field,
        scratch: &mut Scratch,
        lhs: u64,
        rhs: u64,
    ) -> Result<u64, FieldError> {
        match self {
            Self::Add => Ok(field.add_with(scratch, lhs, rhs)),
            Self::Sub => Ok(field.sub_with(scratch, lhs, rhs)),
            Self::Mul => Ok(field.mul_with(scratch, lhs, rhs)),
            Self::Div => field.div_with(scratch, lhs, rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Self::Add),
            "-" | "sub" => Ok(Self::Sub),
            "*" | "x" | "mul" => Ok(Self::Mul),
            "/" | "div" => Ok(Self::Div),
            other => Err(CliError::InvalidOperation(other.to_string())),
        }
    }
}
