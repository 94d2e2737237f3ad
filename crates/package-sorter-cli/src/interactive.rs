//! Interactive prompt loop
//!
//! 1回につき4つの値を入力させ、空入力で終了する。

use std::io::{self, BufRead, Write};

use colored::Colorize;
use package_sorter_core::{parse_measurement, DisplayConfig, SorterError};

use crate::output::report_lines;

pub const PARSE_FAILURE_MESSAGE: &str = "Invalid input. Please enter numeric values.";

/// Run the prompt loop until blank input or end of input.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    display: &DisplayConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Interactive Demo".cyan().bold())?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out, "Enter package dimensions to see how they would be sorted.")?;
    writeln!(out, "Press Enter with empty input to exit.")?;

    let prompts = [
        format!("Width ({}): ", display.length_unit),
        format!("Height ({}): ", display.length_unit),
        format!("Length ({}): ", display.length_unit),
        format!("Mass ({}): ", display.mass_unit),
    ];

    loop {
        writeln!(out)?;
        writeln!(out, "Enter package dimensions:")?;

        let mut values: [String; 4] = Default::default();
        for (slot, prompt) in values.iter_mut().zip(&prompts) {
            write!(out, "{}", prompt)?;
            out.flush()?;

            match read_value(&mut input)? {
                Prompted::Value(text) => *slot = text,
                Prompted::Blank => return Ok(()),
                Prompted::Eof => {
                    writeln!(out)?;
                    writeln!(out, "Goodbye!")?;
                    return Ok(());
                }
            }
        }

        let measurement = match parse_measurement(values) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("rejected input: {}", e);
                writeln!(out, "{}", PARSE_FAILURE_MESSAGE.red())?;
                continue;
            }
        };

        match measurement.describe() {
            Ok(report) => {
                tracing::debug!(stack = %report.category, "classified {:?}", measurement);
                writeln!(out)?;
                writeln!(out, "Package Analysis:")?;
                for line in report_lines(&report, display) {
                    writeln!(out, "{}", line)?;
                }
            }
            Err(e @ SorterError::InvalidInput { .. }) => {
                writeln!(out, "{} {}", "[ERROR]".red().bold(), e)?;
            }
            Err(e) => return Err(io::Error::other(e.to_string())),
        }
    }
}

enum Prompted {
    Value(String),
    Blank,
    Eof,
}

fn read_value<R: BufRead>(input: &mut R) -> io::Result<Prompted> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Prompted::Eof);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(Prompted::Blank)
    } else {
        Ok(Prompted::Value(trimmed.to_string()))
    }
}
