use std::io::{self, BufRead, Write};

use crate::{
    compute,
    error::{Error, EvaluationError},
    interpreter::value::table::ConversionTable,
};

/// Printed before every line is read.
pub const PROMPT: &str = "Enter expression: ";

/// Runs the interactive loop until `input` is exhausted.
///
/// Every non-empty line is evaluated on its own and answered with
/// `"<line> = <value>,<currency>."`. Failures are logged and the loop moves on
/// to the next line: syntax errors and self-conversions as warnings, anything
/// else as an error.
///
/// # Errors
/// Only I/O errors on `input` or `output` end the loop early.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use fxcalc::{interpreter::value::table::ConversionTable, repl};
///
/// let table = ConversionTable::new().with_directive("usd", "USD");
/// let mut out = Vec::new();
/// repl::run(&table, Cursor::new("usd: 10USD - 5USD\n"), &mut out).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("usd: 10USD - 5USD = 5,USD."));
/// ```
pub fn run<R: BufRead, W: Write>(table: &ConversionTable, input: R, mut output: W) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match compute(line, table) {
            Ok(computation) => writeln!(output, "{line} = {}.", computation.result)?,
            Err(e @ (Error::Syntax(_)
                     | Error::Evaluation(EvaluationError::SelfConversion { .. }))) => {
                tracing::warn!(input = line, "{e}");
            },
            Err(e) => tracing::error!(input = line, "{e}"),
        }
    }
}
