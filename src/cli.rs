//! Command-line surface of `tdsc`.

use crate::error::InputError;
use crate::tax::Income;
use clap::Parser;
use rust_decimal::Decimal;
use std::ffi::OsString;
use std::str::FromStr;

/// Calculate Indian TDS (old regime FY2023-24, with 4% cess)
#[derive(Parser, Debug)]
#[command(name = "tdsc", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Gross annual income in rupees
    #[arg(value_name = "ANNUAL_INCOME")]
    pub annual_income: Option<String>,

    /// Anything after the income is ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Parse process arguments, program name first.
    ///
    /// Every token after the program name is positional, including `--`,
    /// `--help` and negative numbers.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("tdsc"));
        Cli::try_parse_from(
            std::iter::once(program)
                .chain(std::iter::once(OsString::from("--")))
                .chain(args),
        )
    }

    /// The annual income argument, parsed
    pub fn income(&self) -> Result<Income, InputError> {
        match &self.annual_income {
            Some(raw) => parse_income(raw),
            None => Err(InputError::Missing),
        }
    }
}

/// Parse an income such as `500000`, `-100`, `1.5e6`, `1e30` or `inf`.
///
/// Surrounding whitespace is ignored. Anything a `Decimal` holds is parsed
/// exactly; other real numbers, the infinities and NaN fall back to `f64`.
pub fn parse_income(raw: &str) -> Result<Income, InputError> {
    let trimmed = raw.trim();
    let exact = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };
    if let Ok(income) = exact {
        return Ok(Income::Exact(income));
    }
    f64::from_str(trimmed)
        .map(Income::Float)
        .map_err(|source| InputError::Unparseable {
            value: raw.to_string(),
            source,
        })
}
