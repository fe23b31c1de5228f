//! Income tax deducted at source (TDS) under the old regime.
//!
//! The liability is the slab tax on annual income plus the health and
//! education cess on that tax. Nothing here rounds except [`round_half_up`],
//! which callers apply when presenting an amount.

use crate::error::TaxError;
use crate::tax::india::{cess_rate, old_regime_slabs, FinancialYear, Slab};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// An annual income as given on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Income {
    /// Representable as a `Decimal`, taxed exactly
    Exact(Decimal),
    /// Beyond `Decimal` range or precision (including the infinities and
    /// NaN), taxed in binary floating point
    Float(f64),
}

impl Income {
    pub fn liability(self) -> Liability {
        match self {
            Income::Exact(income) => Liability::Exact(compute_tax(income)),
            Income::Float(income) => Liability::Float(compute_tax_f64(income)),
        }
    }
}

/// Total tax plus cess, displayed with two decimal places
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Liability {
    Exact(Decimal),
    Float(f64),
}

impl fmt::Display for Liability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Liability::Exact(total) => f.write_str(&format_amount(*total)),
            Liability::Float(total) if total.is_nan() => f.write_str("nan"),
            Liability::Float(total) => write!(f, "{total:.2}"),
        }
    }
}

/// Tax attributable to one slab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlabLine {
    pub slab: Slab,
    /// Portion of income falling inside the slab
    pub taxable: Decimal,
    pub tax: Decimal,
}

/// Full working of a TDS calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub financial_year: FinancialYear,
    pub annual_income: Decimal,
    /// One line per slab up to and including the marginal slab
    pub lines: Vec<SlabLine>,
    /// Slab tax before cess
    pub base_tax: Decimal,
    pub cess: Decimal,
    /// Base tax plus cess, unrounded
    pub total: Decimal,
}

impl TaxBreakdown {
    /// The slab the last rupee of income is taxed in
    pub fn marginal_slab(&self) -> Option<&Slab> {
        self.lines.last().map(|line| &line.slab)
    }
}

/// Calculate the FY2023-24 old regime liability for an annual income.
///
/// Never fails: zero and negative incomes fall in the nil slab and yield
/// zero tax.
pub fn calculate(annual_income: Decimal) -> TaxBreakdown {
    let slabs = old_regime_slabs();
    let marginal = slabs
        .iter()
        .position(|slab| slab.caps(annual_income))
        .unwrap_or(slabs.len() - 1);

    let lines: Vec<SlabLine> = slabs[..=marginal]
        .iter()
        .map(|slab| {
            let taxable = slab.taxable(annual_income);
            SlabLine {
                slab: *slab,
                taxable,
                tax: taxable * slab.rate,
            }
        })
        .collect();

    for line in &lines {
        log::debug!(
            "Slab {}..{}: taxable={}, rate={}, tax={}",
            line.slab.lower,
            line.slab.upper.map(|u| u.to_string()).unwrap_or_default(),
            line.taxable,
            line.slab.rate,
            line.tax
        );
    }

    let base_tax: Decimal = lines.iter().map(|line| line.tax).sum();
    let cess = base_tax * cess_rate();
    let total = base_tax + cess;

    log::debug!(
        "Income {}: base tax={}, cess={}, total={}",
        annual_income,
        base_tax,
        cess,
        total
    );

    TaxBreakdown {
        financial_year: FinancialYear::FY2023_24,
        annual_income,
        lines,
        base_tax,
        cess,
        total,
    }
}

/// Total annual liability (tax plus cess), unrounded
pub fn compute_tax(annual_income: Decimal) -> Decimal {
    calculate(annual_income).total
}

/// Total annual liability for incomes a `Decimal` cannot hold.
///
/// Uses the same slabs and order of operations as [`calculate`]. NaN
/// compares false against every bound and lands in the top slab.
pub fn compute_tax_f64(annual_income: f64) -> f64 {
    let slabs = old_regime_slabs();
    let mut base_tax = 0.0;
    for slab in &slabs {
        let lower = to_f64(slab.lower);
        let rate = to_f64(slab.rate);
        let upper = slab.upper.map(to_f64);
        if annual_income <= lower {
            break;
        }
        base_tax += match upper {
            Some(upper) if annual_income > upper => (upper - lower) * rate,
            _ => (annual_income - lower) * rate,
        };
        if upper.map_or(false, |upper| annual_income <= upper) {
            break;
        }
    }
    let cess = base_tax * to_f64(cess_rate());
    log::debug!(
        "Income {}: base tax={}, cess={} (floating point)",
        annual_income,
        base_tax,
        cess
    );
    base_tax + cess
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Monthly withholding for a monthly gross salary.
///
/// The salary is annualized, the annual liability rounded to paise, and one
/// twelfth of it withheld.
pub fn monthly_tds(monthly_gross: Decimal) -> Result<Decimal, TaxError> {
    let annual = monthly_gross
        .checked_mul(dec!(12))
        .ok_or(TaxError::Overflow(monthly_gross))?;
    let annual_tax = round_half_up(compute_tax(annual));
    Ok(round_half_up(annual_tax / dec!(12)))
}

/// Rounds to two decimal places, midpoint away from zero.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with exactly two decimal places (e.g. `13000.00`)
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}
