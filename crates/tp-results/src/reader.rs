//! Read a result log back into records.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tp_sim::SimRecord;

use crate::csv_log::CSV_HEADER;
use crate::{ResultsError, ResultsResult};

/// Load every record from a log written by [`CsvLogger`](crate::CsvLogger).
pub fn read_log(path: &Path) -> ResultsResult<Vec<SimRecord>> {
    let content = fs::read_to_string(path)?;
    parse_log(&content)
}

/// Parse log text. Blank lines are skipped; line numbers in errors are 1-based.
pub fn parse_log(content: &str) -> ResultsResult<Vec<SimRecord>> {
    let mut lines = content.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim_end() == CSV_HEADER => {}
        Some((_, header)) => {
            return Err(ResultsError::Header {
                found: header.to_string(),
            });
        }
        None => {
            return Err(ResultsError::Header {
                found: String::new(),
            });
        }
    }

    let mut records = Vec::new();
    for (idx, line) in lines {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        records.push(parse_line(idx + 1, line)?);
    }
    Ok(records)
}

fn parse_line(line_no: usize, line: &str) -> ResultsResult<SimRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(ResultsError::Parse {
            line: line_no,
            message: format!("expected 4 fields, found {}", fields.len()),
        });
    }

    Ok(SimRecord {
        step_index: parse_field(line_no, "time", fields[0])?,
        temperature: parse_field(line_no, "temp", fields[1])?,
        setpoint: parse_field(line_no, "setpoint", fields[2])?,
        control_output: parse_field(line_no, "control", fields[3])?,
    })
}

fn parse_field<T: FromStr>(line_no: usize, column: &str, raw: &str) -> ResultsResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ResultsError::Parse {
        line: line_no,
        message: format!("{column} {raw:?}: {e}"),
    })
}
