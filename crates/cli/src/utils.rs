//! Utility functions

use anyhow::{Context, Result};
use gfcalc_field::irreducible::find_irreducible;
use gfcalc_field::number_theory::factor;
use gfcalc_field::{FastModulus, Field, Polynomial};

use crate::config::Config;
use crate::error::CliError;

/// Builds GF(`order`), choosing the irreducible polynomial from the command
/// line, then the config file, then an exhaustive search.
pub fn build_field(order: u64, irreducible: Option<&str>, config: &Config) -> Result<Field> {
    let poly = match irreducible {
        Some(text) => Some(text.parse::<Polynomial>().map_err(CliError::from)?),
        None => config.irreducible_for(order)?,
    };

    let field = match poly {
        Some(poly) => Field::new(order, Some(&poly)).map_err(CliError::from)?,
        None => search_field(order, config)?,
    };

    log::debug!(
        "using GF({}) = GF({}^{}) modulo {}",
        field.order(),
        field.prime(),
        field.power(),
        field.irreducible()
    );
    if field.order() > config.limits.warn_order {
        log::warn!(
            "GF({}) is large, division searches all {} elements",
            field.order(),
            field.order()
        );
    }
    Ok(field)
}

fn search_field(order: u64, config: &Config) -> Result<Field> {
    let split = factor(order).and_then(|(p, k)| u16::try_from(p).ok().map(|p| (p, k)));
    let Some((prime, power)) = split else {
        // no usable prime split, let the field report why
        return Field::new(order, None).map_err(|e| CliError::from(e).into());
    };

    let limit = config.limits.max_search_order;
    if order > limit {
        return Err(CliError::SearchTooLarge { order, limit }.into());
    }

    log::info!("searching an irreducible polynomial of degree {} over GF({})", power, prime);
    let poly = find_irreducible(FastModulus::new(prime), power)
        .ok_or(CliError::NoIrreducible { prime, degree: power })?;
    Field::new(order, Some(&poly))
        .map_err(CliError::from)
        .with_context(|| format!("Failed to build GF({})", order))
}

/// Characters needed to print any element index of GF(`order`).
pub fn cell_width(order: u64) -> usize {
    order.saturating_sub(1).to_string().len()
}
