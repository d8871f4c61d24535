//! Info command implementation

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::error::CliError;
use crate::formats::{FieldInfo, InfoOutputFormat};
use crate::utils::{build_field, cell_width};

#[derive(Args)]
pub struct InfoCommand {
    /// Field order p^k
    #[arg(value_name = "ORDER")]
    pub order: u64,

    /// Irreducible polynomial, coefficients highest degree first ("1 1 1")
    #[arg(short, long, value_name = "POLY")]
    pub irreducible: Option<String>,

    /// List every element with its polynomial
    #[arg(short, long)]
    pub elements: bool,

    /// Verify that every nonzero element has an inverse
    #[arg(long)]
    pub check: bool,

    /// List or check fields larger than the configured table limit
    #[arg(long)]
    pub force: bool,

    /// Output format for information
    #[arg(long, value_enum, default_value = "table")]
    pub output_format: InfoOutputFormat,
}

impl InfoCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let limit = config.limits.max_table_order;
        if (self.check || self.elements) && self.order > limit && !self.force {
            return Err(CliError::TableTooLarge {
                order: self.order,
                limit,
            }
            .into());
        }

        let field = build_field(self.order, self.irreducible.as_deref(), config)?;
        let info = FieldInfo::new(&field, self.check, self.elements);

        match self.output_format {
            InfoOutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
            InfoOutputFormat::Yaml => {
                print!("{}", serde_yaml::to_string(&info)?);
            }
            InfoOutputFormat::Table => print_table(&info),
        }
        Ok(())
    }
}

fn print_table(info: &FieldInfo) {
    println!("Field GF({})", info.order);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Characteristic: {}", info.prime);
    println!("Degree: {}", info.power);
    println!(
        "Irreducible: {} ({})",
        info.irreducible, info.irreducible_coefficients
    );

    if let Some(is_field) = info.is_field {
        if is_field {
            println!("Check: every nonzero element is invertible");
        } else {
            println!("Check: ⚠️  zero divisors found, the modulus is reducible");
        }
    }

    if let Some(elements) = &info.elements {
        let width = cell_width(info.order);
        println!("\nElements:");
        for element in elements {
            println!("  {:>width$}  {}", element.index, element.polynomial);
        }
    }
}
