//! Calc command implementation

use anyhow::{Context, Result};
use clap::Args;
use gfcalc_field::Scratch;

use crate::config::Config;
use crate::error::CliError;
use crate::operation::Operation;
use crate::utils::build_field;

#[derive(Args)]
pub struct CalcCommand {
    /// Field order p^k
    #[arg(value_name = "ORDER")]
    pub order: u64,

    /// Left operand index
    #[arg(value_name = "LHS")]
    pub lhs: u64,

    /// Operation: + - * / (or add, sub, mul, div)
    #[arg(value_name = "OP", allow_hyphen_values = true)]
    pub op: Operation,

    /// Right operand index
    #[arg(value_name = "RHS")]
    pub rhs: u64,

    /// Irreducible polynomial, coefficients highest degree first ("1 1 1")
    #[arg(short, long, value_name = "POLY")]
    pub irreducible: Option<String>,

    /// Also print the operands and result as polynomials
    #[arg(short = 'p', long)]
    pub show_polynomials: bool,
}

impl CalcCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let field = build_field(self.order, self.irreducible.as_deref(), config)?;
        for index in [self.lhs, self.rhs] {
            if index >= field.order() {
                return Err(CliError::ElementOutOfRange {
                    index,
                    order: field.order(),
                }
                .into());
            }
        }

        let mut scratch = Scratch::new();
        let result = self
            .op
            .apply(&field, &mut scratch, self.lhs, self.rhs)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to compute {} {} {}", self.lhs, self.op, self.rhs))?;

        if self.show_polynomials {
            println!(
                "({}) {} ({}) = {}",
                field.element(self.lhs),
                self.op,
                field.element(self.rhs),
                field.element(result)
            );
        }
        println!("{}", result);
        Ok(())
    }
}
