//! Parking CLI - runs a parking lot command script

mod cli;
mod config;
mod driver;
mod error;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use parking_engine::Executor;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_tracing(&config);

    let reader = config.input.open()?;
    let mut executor = Executor::with_config(config.recreate, config.fees);
    let mut formatter = OutputFormatter::new(std::io::stdout().lock());
    let mut errors = std::io::stderr().lock();

    let summary = driver::run_script(reader, &mut executor, &mut formatter, &mut errors)?;

    tracing::info!(
        lines = summary.lines,
        executed = summary.executed,
        parse_failures = summary.parse_failures,
        execution_failures = summary.execution_failures,
        "script finished"
    );
    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` overrides the `-v` level
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
