//! Output formatting for command outcomes

use parking_engine::{LeaveOutcome, Outcome, ParkOutcome};
use std::io::{self, Write};

pub const STATUS_HEADER: &str = "Slot No. Registration No.";

/// Writes command outcomes in the fixed line-oriented text format
pub struct OutputFormatter<W: Write> {
    out: W,
}

impl<W: Write> OutputFormatter<W> {
    /// Create a formatter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Format and write a single outcome
    pub fn print_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        for line in render(outcome) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Give back the underlying writer
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render an outcome as output lines
pub fn render(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Created { capacity } => {
            vec![format!("Created a parking lot with {} slots", capacity)]
        }
        Outcome::Parked { outcome, .. } => match outcome {
            ParkOutcome::Allocated { slot } => vec![format!("Allocated slot number: {}", slot)],
            ParkOutcome::LotFull => vec!["Sorry, parking lot is full".to_string()],
        },
        Outcome::Left {
            registration,
            outcome,
        } => match outcome {
            LeaveOutcome::Freed { slot, charge } => vec![format!(
                "Registration number {} with Slot Number {} is free with Charge ${}",
                registration, slot, charge
            )],
            LeaveOutcome::NotFound => {
                vec![format!("Registration number {} not found", registration)]
            }
        },
        Outcome::Status(entries) => std::iter::once(STATUS_HEADER.to_string())
            .chain(
                entries
                    .iter()
                    .map(|e| format!("{} {}", e.slot, e.registration)),
            )
            .collect(),
    }
}
