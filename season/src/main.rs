//! Holds a `season` program printing the day of the year of a date and its season.
//!
//! Days are counted on a fixed non-leap year, so the year of any given date is ignored and
//! February 29 is rejected. The season labels follow fixed day-of-year ranges (see
//! [`seasoncal::season`]) and not any hemisphere.
//!
//! Dates can come from:
//! - positionals (`14 8`, `14 aug`)
//! - `--date` (anything `parse_datetime` understands) or `--jalali-date`
//! - a file or STDIN with one `DAY MONTH` per line
//! - the current date if nothing else is given

use std::io::{BufRead, BufReader, Write};

use jiff::Zoned;
use seasoncal::{DayMonth, clap_helper::Parse, logging, parser::parse_day_month};

mod arg_parser;
mod string;
mod table;

use arg_parser::{Args, Reader, When};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Args::parse();

    logging::init(config.debug);
    config.color.apply();

    if config.table {
        table::print()?;
        return Ok(());
    }

    let (day, month): (i32, i32) = match config.when {
        When::Reader(reader) => {
            if file_apply(reader)? {
                return Ok(());
            } else {
                return Err("failed to classify all lines".into());
            }
        }
        When::Today => {
            let today = Zoned::now().with_time_zone(config.timezone);
            tracing::debug!(basis = %today, "using today");
            (DayMonth::day(&today), DayMonth::month(&today))
        }
        When::Date(date) => {
            tracing::debug!(basis = %date, "using the given date");
            (DayMonth::day(&date), DayMonth::month(&date))
        }
        When::Given { day, month } => (day.into(), month.into()),
    };

    let classification = (day, month).classify()?;
    println!("{}", string::describe(day, month, &classification));

    Ok(())
}

/// Open the reader and classify its lines to STDOUT, see [`classify_lines`].
fn file_apply(reader: Reader) -> std::io::Result<bool> {
    let read: Box<dyn std::io::Read> = match reader {
        Reader::Stdin => Box::new(std::io::stdin()),
        Reader::File(path) => Box::new(std::fs::File::open(path)?),
    };
    classify_lines(BufReader::new(read), &mut std::io::stdout().lock())
}

/// Classify each `DAY MONTH` line in a stream and write the result to `out`.
///
/// Empty lines are skipped. Every line that fails is logged and skipped.
///
/// Returns false if any line failed.
fn classify_lines(input: impl BufRead, out: &mut impl Write) -> std::io::Result<bool> {
    let mut ok = true;
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = parse_day_month(&line)
            .map_err(|e| e.to_string())
            .and_then(|(day, month)| {
                let (day, month) = (i32::from(day), i32::from(month));
                (day, month)
                    .classify()
                    .map(|c| string::describe(day, month, &c))
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(v) => writeln!(out, "{}", v)?,
            Err(e) => {
                tracing::warn!(line = i + 1, input = line.trim(), "invalid date: {}", e);
                ok = false;
            }
        }
    }

    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn classify_str(input: &str) -> (bool, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let ok = classify_lines(Cursor::new(input), &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_classify_lines_all_valid() {
        assert_eq!(
            classify_str("14 8\n1/1\n\n31-dec\n"),
            (
                true,
                "August 14: day 226 of the year, Winter\n\
                 January 1: day 1 of the year, Summer\n\
                 December 31: day 365 of the year, Spring\n"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_classify_lines_skips_failures() {
        assert_eq!(
            classify_str("14 8\n\n29 2\nfoo\n"),
            (false, "August 14: day 226 of the year, Winter\n".to_string())
        );
        assert_eq!(classify_str("-5 8\n14--8\n"), (false, String::new()));
    }

    #[test]
    fn test_classify_lines_blank_only() {
        assert_eq!(classify_str(""), (true, String::new()));
        assert_eq!(classify_str("\n  \n\t\n"), (true, String::new()));
    }
}
