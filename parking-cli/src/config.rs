//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use parking_engine::{FeeSchedule, RecreatePolicy};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where the command script comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    /// Open the script for line-by-line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>, CliError> {
        match self {
            InputSource::Stdin => Ok(Box::new(std::io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| CliError::Input {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Script to execute
    pub input: InputSource,
    /// Behaviour of a repeated `create_parking_lot`
    pub recreate: RecreatePolicy,
    /// Tariff applied on leave
    pub fees: FeeSchedule,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args, validating the tariff
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let fees = FeeSchedule {
            base_hours: args.base_hours,
            base_charge: args.base_charge,
            additional_rate: args.hourly_rate,
        };
        if fees.base_charge == 0 && fees.additional_rate == 0 {
            return Err(CliError::Config(
                "base charge and hourly rate cannot both be zero".to_string(),
            ));
        }

        Ok(Config {
            input: InputSource::from_path(&args.input),
            recreate: args.on_recreate.into(),
            fees,
            verbosity: args.verbose,
        })
    }

    /// Default log filter directive for the configured verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
