//! Indian income tax deducted at source (old regime, FY2023-24) with the 4%
//! health and education cess.

pub mod app;
pub mod cli;
pub mod error;
pub mod tax;

pub use error::{InputError, TaxError};
pub use tax::{calculate, compute_tax, monthly_tds, Income, Liability, TaxBreakdown};
