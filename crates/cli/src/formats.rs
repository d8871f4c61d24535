//! Output format handling

use anyhow::Result;
use clap::ValueEnum;
use gfcalc_field::{Field, FieldError, Polynomial, Scratch};
use serde::Serialize;
use std::fmt::Write;

use crate::operation::Operation;
use crate::utils::cell_width;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TableFormat {
    Table,
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum InfoOutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Serialize, Debug)]
pub struct ElementInfo {
    pub index: u64,
    pub polynomial: String,
    /// Coefficients, constant term first
    pub coefficients: Polynomial,
}

#[derive(Serialize, Debug)]
pub struct FieldInfo {
    pub order: u64,
    pub prime: u16,
    pub power: u32,
    pub irreducible: String,
    /// Coefficient list as accepted by --irreducible, highest degree first
    pub irreducible_coefficients: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_field: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<ElementInfo>>,
}

impl FieldInfo {
    pub fn new(field: &Field, check: bool, elements: bool) -> Self {
        Self {
            order: field.order(),
            prime: field.prime(),
            power: field.power(),
            irreducible: field.irreducible().to_string(),
            irreducible_coefficients: field.irreducible().coefficient_list().to_string(),
            is_field: check.then(|| field.is_field()),
            elements: elements.then(|| {
                field
                    .elements()
                    .map(|index| {
                        let poly = field.element(index);
                        ElementInfo {
                            index,
                            polynomial: poly.to_string(),
                            coefficients: poly,
                        }
                    })
                    .collect()
            }),
        }
    }
}

/// A full operation table, `cells[row][col] = row op col`.
///
/// Cells are `None` where the operation is undefined (division by zero).
#[derive(Serialize, Debug)]
pub struct OperationTable {
    pub order: u64,
    pub operation: Operation,
    pub cells: Vec<Vec<Option<u64>>>,
}

impl OperationTable {
    pub fn build(field: &Field, operation: Operation) -> Result<Self, FieldError> {
        let mut scratch = Scratch::new();
        let cells = field
            .elements()
            .map(|row| {
                field
                    .elements()
                    .map(|col| match operation.apply(field, &mut scratch, row, col) {
                        Ok(v) => Ok(Some(v)),
                        Err(FieldError::DivisionByZero) => Ok(None),
                        Err(e) => Err(e),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            order: field.order(),
            operation,
            cells,
        })
    }

    pub fn render(&self, format: TableFormat) -> Result<String> {
        Ok(match format {
            TableFormat::Table => self.to_text(),
            TableFormat::Csv => self.to_csv(),
            TableFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    fn to_text(&self) -> String {
        let width = cell_width(self.order);
        let mut out = String::new();

        let _ = write!(out, "{:>width$} │", self.operation.symbol());
        for col in 0..self.order {
            let _ = write!(out, " {:>width$}", col);
        }
        out.push('\n');
        let _ = writeln!(
            out,
            "{}┼{}",
            "─".repeat(width + 1),
            "─".repeat((width + 1) * self.order as usize)
        );

        for (row, cells) in self.cells.iter().enumerate() {
            let _ = write!(out, "{:>width$} │", row);
            for cell in cells {
                match cell {
                    Some(v) => {
                        let _ = write!(out, " {:>width$}", v);
                    }
                    None => {
                        let _ = write!(out, " {:>width$}", "-");
                    }
                }
            }
            out.push('\n');
        }
        out
    }

    fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push(self.operation.symbol());
        for col in 0..self.order {
            let _ = write!(out, ",{}", col);
        }
        out.push('\n');

        for (row, cells) in self.cells.iter().enumerate() {
            let _ = write!(out, "{}", row);
            for cell in cells {
                out.push(',');
                if let Some(v) = cell {
                    let _ = write!(out, "{}", v);
                }
            }
            out.push('\n');
        }
        out
    }
}
