//! Table command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::CliError;
use crate::formats::{OperationTable, TableFormat};
use crate::operation::Operation;
use crate::utils::build_field;

#[derive(Args)]
pub struct TableCommand {
    /// Field order p^k
    #[arg(value_name = "ORDER")]
    pub order: u64,

    /// Operation to tabulate
    #[arg(long, value_name = "OP", default_value = "mul")]
    pub op: Operation,

    /// Irreducible polynomial, coefficients highest degree first ("1 1 1")
    #[arg(short, long, value_name = "POLY")]
    pub irreducible: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "table")]
    pub format: TableFormat,

    /// Print tables larger than the configured limit
    #[arg(long)]
    pub force: bool,

    /// Write the table to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl TableCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let limit = config.limits.max_table_order;
        if self.order > limit && !self.force {
            return Err(CliError::TableTooLarge {
                order: self.order,
                limit,
            }
            .into());
        }

        let field = build_field(self.order, self.irreducible.as_deref(), config)?;
        let table = OperationTable::build(&field, self.op)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to build the {} table of GF({})", self.op, self.order))?;
        let rendered = table.render(self.format)?;

        match &self.output {
            Some(path) => {
                fs::write(path, rendered)
                    .with_context(|| format!("Failed to write table: {}", path.display()))?;
                log::info!("wrote {} table to {}", self.op, path.display());
            }
            None => print!("{}", rendered),
        }
        Ok(())
    }
}
