//! Irreducible command implementation

use anyhow::Result;
use clap::Args;
use gfcalc_field::irreducible::irreducibles;
use gfcalc_field::number_theory::factor;
use gfcalc_field::{FastModulus, FieldError};

use crate::config::Config;
use crate::error::CliError;

#[derive(Args)]
pub struct IrreducibleCommand {
    /// Field order p^k
    #[arg(value_name = "ORDER")]
    pub order: u64,

    /// List every monic irreducible polynomial instead of the first few
    #[arg(short, long)]
    pub all: bool,

    /// Number of polynomials to list
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Search orders above the configured limit
    #[arg(long)]
    pub force: bool,
}

impl IrreducibleCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let (prime, power) = factor(self.order)
            .ok_or(CliError::Field(FieldError::DoesNotExist { order: self.order }))?;
        let prime = u16::try_from(prime).map_err(|_| {
            CliError::Field(FieldError::ModulusTooLarge {
                order: self.order,
                prime,
            })
        })?;

        let limit = config.limits.max_search_order;
        if self.order > limit && !self.force {
            return Err(CliError::SearchTooLarge {
                order: self.order,
                limit,
            }
            .into());
        }

        let take = if self.all { usize::MAX } else { self.limit };
        let mut found = 0usize;
        let width = 2 * power as usize + 1;
        for poly in irreducibles(FastModulus::new(prime), power).take(take) {
            let coefficients = poly.coefficient_list().to_string();
            println!("{:<width$}  {}", coefficients, poly);
            found += 1;
        }

        if found == 0 {
            return Err(CliError::NoIrreducible { prime, degree: power }.into());
        }
        log::debug!("listed {} irreducible polynomials of degree {}", found, power);
        Ok(())
    }
}
