//! Command-line contract: exactly one positional `count`.

use std::ffi::OsStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Usage: dragmany count")]
    Usage,

    #[error("Could not parse {0} as integer.")]
    NotAnInteger(String),

    #[error("count must be a positive integer, got {0}")]
    NotPositive(i64),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Parses the shape count from program arguments (without the program name).
///
/// The value must fit a 32-bit signed integer, like any other pixel-scale
/// integer in the demo, and be at least one. Arguments that are not valid
/// UTF-8 are reported as unparsable.
pub fn parse_count<I, S>(args: I) -> Result<usize, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut args = args.into_iter();
    let (Some(raw), None) = (args.next(), args.next()) else {
        return Err(CliError::Usage);
    };
    let raw = raw.as_ref();
    let raw = raw
        .to_str()
        .ok_or_else(|| CliError::NotAnInteger(raw.to_string_lossy().into_owned()))?;

    let count: i32 = raw
        .parse()
        .map_err(|_| CliError::NotAnInteger(raw.to_string()))?;

    match usize::try_from(count) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::NotPositive(i64::from(count))),
    }
}
