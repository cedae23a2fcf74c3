//! Line-by-line script execution

use crate::error::CliError;
use crate::output::OutputFormatter;
use parking_engine::{Command, Executor};
use std::io::{BufRead, Write};

/// Counters collected over one script run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub executed: usize,
    pub parse_failures: usize,
    pub execution_failures: usize,
}

/// Feed every line of `reader` through the parser and `executor`
///
/// Outcomes go to `formatter`; parse and execution failures are reported to
/// `errors` with their 1-based line number and do not stop the run. Only a
/// failure to read input or write output is returned as an error.
pub fn run_script<R, W, E>(
    reader: R,
    executor: &mut Executor,
    formatter: &mut OutputFormatter<W>,
    errors: &mut E,
) -> Result<RunSummary, CliError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = RunSummary::default();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line_number = idx + 1;
        summary.lines = line_number;

        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line,
            Err(e) => {
                summary.parse_failures += 1;
                tracing::debug!(line_number, error = %e, "line is not UTF-8");
                writeln!(errors, "Error on line {}: invalid UTF-8: {}", line_number, e)?;
                continue;
            }
        };

        let command = match Command::parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                summary.parse_failures += 1;
                tracing::debug!(line_number, error = %e, "parse failure");
                writeln!(errors, "Error on line {}: {}", line_number, e)?;
                continue;
            }
        };

        match executor.execute(command) {
            Ok(outcome) => {
                summary.executed += 1;
                formatter.print_outcome(&outcome)?;
            }
            Err(e) => {
                summary.execution_failures += 1;
                tracing::debug!(line_number, error = %e, "execution failure");
                writeln!(
                    errors,
                    "Error executing command on line {}: {}",
                    line_number, e
                )?;
            }
        }
    }

    formatter.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_engine::{FeeSchedule, RecreatePolicy};

    struct Run {
        stdout: String,
        stderr: String,
        summary: RunSummary,
    }

    fn run_with(executor: &mut Executor, script: &str) -> Run {
        let mut formatter = OutputFormatter::new(Vec::new());
        let mut errors = Vec::new();
        let summary = run_script(script.as_bytes(), executor, &mut formatter, &mut errors).unwrap();
        Run {
            stdout: String::from_utf8(formatter.into_inner()).unwrap(),
            stderr: String::from_utf8(errors).unwrap(),
            summary,
        }
    }

    fn run(script: &str) -> Run {
        run_with(&mut Executor::new(), script)
    }

    #[test]
    fn test_sample_script() {
        let script = "\
create_parking_lot 6
park KA-01-HH-1234
park KA-01-HH-9999
park KA-01-BB-0001
park KA-01-HH-7777
park KA-01-HH-2701
park KA-01-HH-3141
leave KA-01-HH-3141 4
status
park KA-01-P-333
park DL-12-AA-9999
leave KA-01-HH-1234 4
leave KA-01-BB-0001 6
leave DL-12-AA-9999 2
park KA-09-HH-0987
park CA-09-IO-1111
park KA-09-HH-0123
status
";
        let expected = "\
Created a parking lot with 6 slots
Allocated slot number: 1
Allocated slot number: 2
Allocated slot number: 3
Allocated slot number: 4
Allocated slot number: 5
Allocated slot number: 6
Registration number KA-01-HH-3141 with Slot Number 6 is free with Charge $30
Slot No. Registration No.
1 KA-01-HH-1234
2 KA-01-HH-9999
3 KA-01-BB-0001
4 KA-01-HH-7777
5 KA-01-HH-2701
Allocated slot number: 6
Sorry, parking lot is full
Registration number KA-01-HH-1234 with Slot Number 1 is free with Charge $30
Registration number KA-01-BB-0001 with Slot Number 3 is free with Charge $50
Registration number DL-12-AA-9999 not found
Allocated slot number: 1
Allocated slot number: 3
Sorry, parking lot is full
Slot No. Registration No.
1 KA-09-HH-0987
2 KA-01-HH-9999
3 CA-09-IO-1111
4 KA-01-HH-7777
5 KA-01-HH-2701
6 KA-01-P-333
";
        let result = run(script);
        assert_eq!(result.stdout, expected);
        assert_eq!(result.stderr, "");
        assert_eq!(result.summary.lines, 18);
        assert_eq!(result.summary.executed, 18);
    }

    #[test]
    fn test_bad_lines_reported_and_skipped() {
        let script = "\
park A
create_parking_lot two
create_parking_lot 2

teleport A
park A
park A
leave A
status
";
        let result = run(script);
        assert_eq!(
            result.stderr,
            "\
Error executing command on line 1: parking lot has not been created
Error on line 2: invalid capacity: two (must be an integer)
Error on line 5: unknown command: teleport
Error executing command on line 7: vehicle A is already parked
Error on line 8: leave requires exactly 2 argument(s), got 1
"
        );
        assert_eq!(
            result.stdout,
            "\
Created a parking lot with 2 slots
Allocated slot number: 1
Slot No. Registration No.
1 A
"
        );
        assert_eq!(
            result.summary,
            RunSummary {
                lines: 9,
                executed: 3,
                parse_failures: 3,
                execution_failures: 2,
            }
        );
    }

    #[test]
    fn test_invalid_utf8_line_skipped() {
        let script: &[u8] = b"create_parking_lot 2\npark \xff\xfe\npark B\r\nstatus\n";
        let mut executor = Executor::new();
        let mut formatter = OutputFormatter::new(Vec::new());
        let mut errors = Vec::new();
        let summary = run_script(script, &mut executor, &mut formatter, &mut errors).unwrap();

        assert_eq!(
            String::from_utf8(formatter.into_inner()).unwrap(),
            "\
Created a parking lot with 2 slots
Allocated slot number: 1
Slot No. Registration No.
1 B
"
        );
        let stderr = String::from_utf8(errors).unwrap();
        assert!(stderr.starts_with("Error on line 2: invalid UTF-8"));
        assert_eq!(stderr.lines().count(), 1);
        assert_eq!(summary.parse_failures, 1);
        assert_eq!(summary.executed, 3);
        assert_eq!(summary.lines, 4);
    }

    #[test]
    fn test_recreate_policies() {
        let script = "create_parking_lot 1\npark A\ncreate_parking_lot 2\nstatus\n";

        let rejected = run(script);
        assert_eq!(
            rejected.stderr,
            "Error executing command on line 3: parking lot already exists with 1 slots\n"
        );
        assert!(rejected.stdout.ends_with("Slot No. Registration No.\n1 A\n"));

        let mut exec = Executor::with_config(RecreatePolicy::Reset, FeeSchedule::default());
        let reset = run_with(&mut exec, script);
        assert_eq!(reset.stderr, "");
        assert!(reset.stdout.ends_with(
            "Created a parking lot with 2 slots\nSlot No. Registration No.\n"
        ));
    }

    #[test]
    fn test_missing_trailing_newline() {
        let result = run("create_parking_lot 1\nstatus");
        assert_eq!(
            result.stdout,
            "Created a parking lot with 1 slots\nSlot No. Registration No.\n"
        );
    }
}
