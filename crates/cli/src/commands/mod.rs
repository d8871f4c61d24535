//! Command implementations for the gfcalc CLI

mod calc;
mod info;
mod irreducible;
mod table;

pub use calc::CalcCommand;
pub use info::InfoCommand;
pub use irreducible::IrreducibleCommand;
pub use table::TableCommand;

use crate::config::Config;
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Describe a field and its elements
    Info(InfoCommand),

    /// Apply one operation to two elements
    Calc(CalcCommand),

    /// Print the full table of an operation
    Table(TableCommand),

    /// List monic irreducible polynomials usable as a modulus
    Irreducible(IrreducibleCommand),
}

impl Commands {
    pub fn execute(&self, config: &Config) -> Result<()> {
        match self {
            Commands::Info(cmd) => cmd.execute(config),
            Commands::Calc(cmd) => cmd.execute(config),
            Commands::Table(cmd) => cmd.execute(config),
            Commands::Irreducible(cmd) => cmd.execute(config),
        }
    }
}
