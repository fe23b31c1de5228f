//! Error types for parsing input and calculating tax.

use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid command-line input.
///
/// A missing income is not a failure: the caller prints `0` and exits
/// successfully. An unparseable one is.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no annual income given")]
    Missing,
    #[error("annual income is not a number: '{value}'")]
    Unparseable {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("annualized income overflows for monthly gross {0}")]
    Overflow(Decimal),
}
