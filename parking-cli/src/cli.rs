//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use parking_engine::{ADDITIONAL_RATE, BASE_CHARGE, BASE_HOURS, RecreatePolicy};
use std::path::PathBuf;

/// What to do when a script creates a second parking lot
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OnRecreate {
    /// Report an error and keep the current lot (default)
    #[default]
    Reject,
    /// Throw away the current lot and its vehicles, then create the new one
    Reset,
}

impl From<OnRecreate> for RecreatePolicy {
    fn from(value: OnRecreate) -> Self {
        match value {
            OnRecreate::Reject => RecreatePolicy::Reject,
            OnRecreate::Reset => RecreatePolicy::Reset,
        }
    }
}

/// Parking lot command script runner
#[derive(Parser, Debug)]
#[command(name = "parking", about = "Run a parking lot command script", version)]
pub struct Args {
    /// Script file to execute (`-` reads from stdin)
    pub input: PathBuf,

    /// Behaviour of `create_parking_lot` when a lot already exists
    #[arg(long, value_enum, default_value = "reject")]
    pub on_recreate: OnRecreate,

    /// Hours covered by the base charge
    #[arg(long, default_value_t = BASE_HOURS)]
    pub base_hours: u64,

    /// Flat charge for the first base hours
    #[arg(long, default_value_t = BASE_CHARGE)]
    pub base_charge: u64,

    /// Charge per hour past the base hours
    #[arg(long, default_value_t = ADDITIONAL_RATE)]
    pub hourly_rate: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
