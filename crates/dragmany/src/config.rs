//! Demo configuration.

use std::ffi::OsStr;

use crate::cli::CliError;

/// Smallest shape edge / diameter, inclusive.
pub const MIN_SIZE: u32 = 25;
/// Largest shape edge / diameter, exclusive.
pub const MAX_SIZE: u32 = 100;
/// Side of the square canvas, in logical pixels.
pub const PANEL_SIZE: u32 = 600;

/// Environment variable holding an optional `u64` RNG seed.
pub const SEED_ENV: &str = "DRAGMANY_SEED";

/// Everything `main` needs to start the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of shapes to generate.
    pub count: usize,
    /// Fixed seed for reproducible layouts. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub title: String,
    pub panel_size: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 0,
            seed: None,
            title: "DragMany".to_string(),
            panel_size: PANEL_SIZE,
        }
    }
}

impl DemoConfig {
    /// Builds the config from program arguments (without the program name)
    /// and the raw value of [`SEED_ENV`].
    pub fn from_args<I, S>(args: I, seed_var: Option<&str>) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let count = crate::cli::parse_count(args)?;
        Ok(Self {
            count,
            seed: seed_var.and_then(parse_seed),
            ..Self::default()
        })
    }
}

/// Parses a seed value; anything unparsable is ignored with a warning.
fn parse_seed(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("ignoring {SEED_ENV}={raw:?}: {e}");
            None
        }
    }
}
