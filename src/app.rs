//! Entry point: parse the income, print the liability, choose the exit code.
//!
//! Every failure prints `0`. A missing income exits successfully; anything
//! else that goes wrong exits with status 1.

use crate::cli::Cli;
use crate::error::InputError;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

pub fn run() -> ExitCode {
    pretty_env_logger::init();

    let stdout = io::stdout();
    ExitCode::from(execute(std::env::args_os(), &mut stdout.lock()))
}

/// Run against explicit arguments (program name first) and output,
/// returning the process exit status.
pub fn execute<I, T, W>(args: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    match report(args, out) {
        Ok(()) => SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<InputError>() {
                Some(InputError::Missing) => {
                    log::debug!("{err}, defaulting to zero");
                    SUCCESS
                }
                _ => {
                    log::warn!("{err:#}");
                    FAILURE
                }
            };
            if let Err(err) = writeln!(out, "0") {
                log::warn!("Failed to write output: {err}");
                return FAILURE;
            }
            code
        }
    }
}

fn report<I, T, W>(args: I, out: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let cli = Cli::try_from_args(args)?;
    let liability = cli.income()?.liability();
    writeln!(out, "{liability}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exec(args: &[&str]) -> (String, u8) {
        let mut out = Vec::new();
        let code = execute(std::iter::once("tdsc").chain(args.iter().copied()), &mut out);
        (String::from_utf8(out).unwrap(), code)
    }

    #[test]
    fn no_argument_prints_zero() {
        let (out, code) = exec(&[]);
        assert_eq!(out, "0\n");
        assert_eq!(code, SUCCESS);
    }

    #[test]
    fn invalid_argument_prints_zero_and_fails() {
        let (out, code) = exec(&["abc"]);
        assert_eq!(out, "0\n");
        assert_eq!(code, FAILURE);
    }

    #[test]
    fn valid_argument_prints_two_decimals() {
        let (out, code) = exec(&["500000"]);
        assert_eq!(out, "13000.00\n");
        assert_eq!(code, SUCCESS);
    }

    #[test]
    fn negative_argument_prints_formatted_zero() {
        let (out, code) = exec(&["-100"]);
        assert_eq!(out, "0.00\n");
        assert_eq!(code, SUCCESS);
    }

    #[test]
    fn only_first_argument_is_used() {
        let (out, code) = exec(&["1500000", "abc"]);
        assert_eq!(out, "273000.00\n");
        assert_eq!(code, SUCCESS);
    }

    #[test]
    fn fractional_result_is_rounded() {
        // 312345.67 -> 3117.2835 tax, 124.69134 cess
        let (out, _) = exec(&["312345.67"]);
        assert_eq!(out, "3241.97\n");
    }

    #[test]
    fn double_dash_is_an_invalid_income() {
        assert_eq!(exec(&["--", "500000"]), ("0\n".to_string(), FAILURE));
        assert_eq!(exec(&["--"]), ("0\n".to_string(), FAILURE));
    }

    #[test]
    fn real_numbers_beyond_decimal_are_taxed() {
        assert_eq!(exec(&["1e-30"]), ("0.00\n".to_string(), SUCCESS));
        assert_eq!(
            exec(&["1e30"]),
            ("311999999999999988752554393600.00\n".to_string(), SUCCESS)
        );
        assert_eq!(exec(&["inf"]), ("inf\n".to_string(), SUCCESS));
        assert_eq!(exec(&["-inf"]), ("0.00\n".to_string(), SUCCESS));
        assert_eq!(exec(&["nan"]), ("nan\n".to_string(), SUCCESS));
        assert_eq!(
            exec(&["0.000000000000000000000000000000001"]),
            ("0.00\n".to_string(), SUCCESS)
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_exits_with_failure() {
        let code = execute(["tdsc", "500000"], &mut BrokenPipe);
        assert_eq!(code, FAILURE);
    }
}
